//! The conversion-engine seam: everything that actually parses a PDF lives
//! behind [`ConversionEngine`].
//!
//! ## Why a trait?
//!
//! The library contributes request plumbing and chunking; layout analysis is
//! delegated whole to an external engine. Making that engine an explicit,
//! injectable dependency (an `Arc<dyn ConversionEngine>` on
//! [`crate::config::ProcessConfig`]) means tests substitute a canned engine
//! without touching process-wide state, and alternative backends slot in
//! without changes to the pipeline.
//!
//! ## Why synchronous?
//!
//! Conversion is a blocking, non-cancellable call — model loading and
//! page-by-page analysis can run for a long time and expose no async
//! interface. The trait stays synchronous and the orchestrator
//! ([`crate::process`]) owns the `spawn_blocking` hop, so engine
//! implementations never have to reason about executors.

use std::path::Path;
use thiserror::Error;

pub mod fixed;
pub mod pdfium;

pub use fixed::StaticEngine;
pub use pdfium::PdfiumEngine;

/// What the engine hands back for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    /// The document rendered as Markdown text.
    pub markdown: String,

    /// Number of pages in the source document, when the engine exposes one.
    ///
    /// `None` is mapped to `0` downstream. That fallback is preserved from
    /// the original contract even though it is indistinguishable from a
    /// genuinely zero-page document — a known metadata weakness, not an
    /// error.
    pub page_count: Option<usize>,
}

/// Errors raised by a conversion engine.
///
/// `Failed` displays the engine's message verbatim: the failure envelope's
/// `error` field carries exactly what the engine said.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The engine's native dependency is missing or cannot be loaded.
    #[error("conversion engine is not available: {0}")]
    Unavailable(String),

    /// The engine accepted the document but failed to convert it.
    #[error("{0}")]
    Failed(String),
}

/// A document-conversion engine: PDF file in, Markdown plus page count out.
///
/// One conversion attempt per request; implementations must not retry
/// internally — a failure is terminal for the request that triggered it.
pub trait ConversionEngine: Send + Sync {
    /// Cheap availability check, run by shells at startup so a missing
    /// engine is reported before any request-specific work.
    ///
    /// The default assumes the engine is always available.
    fn probe(&self) -> Result<(), EngineError> {
        Ok(())
    }

    /// Convert the PDF at `pdf_path`. Blocking; see the module docs.
    fn convert(&self, pdf_path: &Path) -> Result<EngineOutput, EngineError>;
}
