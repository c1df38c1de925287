//! Default engine: text extraction via the PDFium shared library.
//!
//! ## Binding strategy
//!
//! PDFium is an external native library; `pdfium-render` binds to it at
//! runtime. The engine looks for it from most-specific to least-specific:
//!
//! 1. An explicit directory passed to [`PdfiumEngine::with_library_path`]
//! 2. The `PDFIUM_LIB_PATH` environment variable
//! 3. The system library search path
//!
//! A failed bind is the "engine not installed" condition —
//! [`EngineError::Unavailable`] — which shells surface before doing any
//! request-specific work.
//!
//! The `Pdfium` handle is constructed fresh inside every call rather than
//! cached: the binding holds thread-affine state, and each [`convert`]
//! invocation already runs on a dedicated blocking thread.
//!
//! [`convert`]: ConversionEngine::convert

use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;
use tracing::debug;

use super::{ConversionEngine, EngineError, EngineOutput};

/// PDFium-backed [`ConversionEngine`].
///
/// Extracts the text of every page and joins pages with a blank line, which
/// downstream chunking treats as a paragraph boundary. No layout analysis
/// happens in this crate; whatever reading order PDFium reports is what the
/// chunks get.
#[derive(Debug, Clone, Default)]
pub struct PdfiumEngine {
    lib_path: Option<PathBuf>,
}

impl PdfiumEngine {
    /// Engine resolving the library from `PDFIUM_LIB_PATH` or the system path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine binding to the pdfium library in the given directory.
    pub fn with_library_path(dir: impl Into<PathBuf>) -> Self {
        Self {
            lib_path: Some(dir.into()),
        }
    }

    fn bind(&self) -> Result<Pdfium, EngineError> {
        let explicit = self
            .lib_path
            .clone()
            .or_else(|| std::env::var_os("PDFIUM_LIB_PATH").map(PathBuf::from));

        let bindings = match explicit {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir))
                    .or_else(|_| Pdfium::bind_to_system_library())
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| {
            EngineError::Unavailable(format!(
                "failed to bind pdfium library: {e}. \
                 Install libpdfium or set PDFIUM_LIB_PATH to its directory."
            ))
        })?;

        Ok(Pdfium::new(bindings))
    }
}

impl ConversionEngine for PdfiumEngine {
    fn probe(&self) -> Result<(), EngineError> {
        self.bind().map(|_| ())
    }

    fn convert(&self, pdf_path: &Path) -> Result<EngineOutput, EngineError> {
        let pdfium = self.bind()?;

        let document = pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| EngineError::Failed(format!("failed to open PDF: {e:?}")))?;

        let page_count = document.pages().len() as usize;
        debug!("PDF has {} pages", page_count);

        let mut sections: Vec<String> = Vec::with_capacity(page_count);
        for (index, page) in document.pages().iter().enumerate() {
            let text = page
                .text()
                .map_err(|e| {
                    EngineError::Failed(format!(
                        "text extraction failed on page {}: {e:?}",
                        index + 1
                    ))
                })?
                .all();
            sections.push(text);
        }

        Ok(EngineOutput {
            markdown: assemble_markdown(&sections),
            page_count: Some(page_count),
        })
    }
}

/// Join per-page text with a blank line and normalise line endings.
///
/// The chunker splits on the literal `"\n\n"`, so CRLF endings must be
/// normalised here or Windows-produced PDFs would never split.
fn assemble_markdown(sections: &[String]) -> String {
    sections
        .iter()
        .map(|s| s.replace("\r\n", "\n").replace('\r', "\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
