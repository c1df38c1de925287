//! Processing entry points: the shared core behind every transport shell.
//!
//! Control flow is strictly linear per request — payload, engine, chunker —
//! with no branching state machine and no concurrency between stages.
//! Requests are independent of each other; the only shared resource is the
//! temp-file namespace, which `tempfile` keeps collision-free.

use std::path::{Path, PathBuf};

use tokio::task;
use tracing::{debug, info};

use crate::config::ProcessConfig;
use crate::engine::EngineOutput;
use crate::envelope::ResponseEnvelope;
use crate::error::ProcessError;
use crate::pipeline::chunk::{chunk_markdown, Chunk};
use crate::pipeline::payload;

/// The result of one processed document, before envelope wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Paragraph chunks in source order, indexed from 0.
    pub chunks: Vec<Chunk>,
    /// Engine-reported page count, `0` when the engine exposed none.
    pub num_pages: usize,
}

impl ProcessOutput {
    /// Wrap this output in the success envelope.
    pub fn into_envelope(self) -> ResponseEnvelope {
        ResponseEnvelope::success(self.chunks, self.num_pages)
    }
}

/// Process a base64-encoded PDF payload (the HTTP shells' entry point).
///
/// # Errors
/// - [`ProcessError::MissingPayload`] when the payload is absent or blank
/// - [`ProcessError::Decode`] when the payload is not valid base64
/// - any error from [`process_bytes`]
pub async fn process_base64(
    pdf_base64: &str,
    config: &ProcessConfig,
) -> Result<ProcessOutput, ProcessError> {
    let bytes = payload::decode_base64(pdf_base64)?;
    process_bytes(&bytes, config).await
}

/// Process raw PDF bytes.
///
/// The bytes are materialised as a uniquely-named temporary file for the
/// engine's benefit. The file is owned by this call and deleted on every
/// exit path — success, conversion failure, panic, or the caller dropping
/// the future mid-flight — via the temp guard's destructor.
pub async fn process_bytes(
    bytes: &[u8],
    config: &ProcessConfig,
) -> Result<ProcessOutput, ProcessError> {
    let tmp = payload::write_temp_pdf(bytes, config)?;
    let output = run_engine(tmp.path().to_path_buf(), config).await?;
    // `tmp` drops here, removing the file; the `?` above unwinds through the
    // same destructor.
    Ok(assemble(output))
}

/// Process a PDF already on disk (the CLI's entry point).
///
/// The file is caller-owned: it is read in place, never copied, never
/// deleted.
///
/// # Errors
/// - [`ProcessError::FileNotFound`] when the path does not exist
/// - [`ProcessError::Conversion`] when the engine fails
pub async fn process_path(
    pdf_path: impl AsRef<Path>,
    config: &ProcessConfig,
) -> Result<ProcessOutput, ProcessError> {
    let pdf_path = pdf_path.as_ref();
    if !pdf_path.exists() {
        return Err(ProcessError::FileNotFound {
            path: pdf_path.to_path_buf(),
        });
    }
    let output = run_engine(pdf_path.to_path_buf(), config).await?;
    Ok(assemble(output))
}

/// Invoke the conversion engine on a dedicated blocking thread.
///
/// Conversion is a long, blocking, non-cancellable call (model loading,
/// page-by-page analysis); `spawn_blocking` keeps it off the async workers.
/// One attempt per request — engine failures are terminal, never retried.
async fn run_engine(
    pdf_path: PathBuf,
    config: &ProcessConfig,
) -> Result<EngineOutput, ProcessError> {
    let engine = config.resolve_engine();
    info!("converting {}", pdf_path.display());

    let output = task::spawn_blocking(move || engine.convert(&pdf_path))
        .await
        .map_err(|e| ProcessError::Internal(format!("conversion task panicked: {e}")))??;

    debug!(
        "engine produced {} bytes of markdown, page count {:?}",
        output.markdown.len(),
        output.page_count
    );
    Ok(output)
}

fn assemble(output: EngineOutput) -> ProcessOutput {
    let chunks = chunk_markdown(&output.markdown);
    info!("split markdown into {} chunks", chunks.len());
    ProcessOutput {
        chunks,
        // Engines without a page-count facility degrade to 0. Kept verbatim
        // from the upstream contract even though it is indistinguishable
        // from a zero-page document.
        num_pages: output.page_count.unwrap_or(0),
    }
}
