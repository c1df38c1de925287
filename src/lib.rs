//! # pdfchunk
//!
//! Extract Markdown from PDF documents and split it into paragraph-level
//! chunks for downstream indexing (retrieval-augmented generation
//! pipelines and similar).
//!
//! The heavy lifting — layout parsing, text extraction — is delegated to an
//! external conversion engine behind the [`ConversionEngine`] trait. This
//! crate contributes the request plumbing (base64 decode, managed temp
//! files, JSON envelopes) and the blank-line chunking heuristic, as one
//! shared core with thin transport shells on top:
//!
//! - `pdfchunkd` — standalone HTTP service (`POST /process-pdf`)
//! - [`service::router`] — the same router, mountable by any serverless host
//! - `pdfchunk` — single-shot CLI taking a filesystem path
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF (base64 body, raw bytes, or file path)
//!  │
//!  ├─ 1. Payload   decode + materialise as a managed temp file
//!  ├─ 2. Convert   external engine extracts Markdown (blocking call,
//!  │               isolated on the blocking thread pool)
//!  ├─ 3. Chunk     split on blank lines, trim, drop empties, index from 0
//!  └─ 4. Envelope  uniform success/failure JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdfchunk::{process_path, ProcessConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Engine resolved from PDFIUM_LIB_PATH / the system library.
//!     let config = ProcessConfig::default();
//!     let output = process_path("document.pdf", &config).await?;
//!     println!("{}", output.into_envelope().to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `cli`     | on      | Enables the `pdfchunk` binary (clap + tracing-subscriber) |
//! | `service` | on      | Enables the `pdfchunkd` binary and the [`service`] router (axum + tower-http) |
//!
//! Disable both when using only the library core:
//! ```toml
//! pdfchunk = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod process;

#[cfg(feature = "service")]
pub mod service;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ProcessConfig, ProcessConfigBuilder};
pub use engine::{ConversionEngine, EngineError, EngineOutput, PdfiumEngine, StaticEngine};
pub use envelope::{ProcessMetadata, ResponseEnvelope};
pub use error::ProcessError;
pub use pipeline::chunk::{chunk_markdown, Chunk, ChunkKind, ChunkMetadata};
pub use process::{process_base64, process_bytes, process_path, ProcessOutput};
