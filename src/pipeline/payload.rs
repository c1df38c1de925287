//! Request adapter: turn an incoming payload into a readable PDF file.
//!
//! ## Why a temp file?
//!
//! Conversion engines want a filesystem path — they cannot stream from a
//! byte buffer. Writing the payload to a [`tempfile::NamedTempFile`] gives
//! the engine a path while tying the file's lifetime to a guard value:
//! the file is deleted when the guard drops, on success, on error, and on
//! panic alike. Nothing here uses manual cleanup.
//!
//! Temp file names are unique per request (`tempfile` guarantees this), so
//! overlapping requests in the service shells never collide.

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::ProcessConfig;
use crate::error::ProcessError;

/// Decode a base64 PDF payload into raw bytes.
///
/// An absent or blank payload is invalid input; malformed base64 is a decode
/// failure. Neither is retried. Embedded ASCII whitespace is stripped first —
/// clients routinely send line-wrapped base64.
pub fn decode_base64(payload: &str) -> Result<Vec<u8>, ProcessError> {
    let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(ProcessError::MissingPayload);
    }
    Ok(BASE64.decode(cleaned)?)
}

/// Write PDF bytes to a uniquely-named temporary file.
///
/// The returned guard owns the file; hold it for as long as the engine needs
/// the path, then let it drop.
pub fn write_temp_pdf(
    bytes: &[u8],
    config: &ProcessConfig,
) -> Result<NamedTempFile, ProcessError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("pdfchunk-").suffix(".pdf");

    let mut tmp = match config.temp_dir {
        Some(ref dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };

    tmp.write_all(bytes)?;
    tmp.flush()?;

    debug!(
        "materialised {} payload bytes at {}",
        bytes.len(),
        tmp.path().display()
    );
    Ok(tmp)
}
