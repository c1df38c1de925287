//! Error types for the pdfchunk library.
//!
//! Every failure a request can hit maps onto one [`ProcessError`] variant,
//! and every variant belongs to one of four kinds the transport shells care
//! about:
//!
//! | Kind            | Variants                          | HTTP status |
//! |-----------------|-----------------------------------|-------------|
//! | invalid input   | `MissingPayload`, `FileNotFound`  | 400         |
//! | decode failure  | `Decode`                          | 500         |
//! | conversion      | `Conversion` (incl. unavailable)  | 500         |
//! | I/O             | `TempFile`                        | 500         |
//!
//! All errors are terminal for the current request — nothing is retried.
//! The shells catch every variant at their outermost handler and fold it
//! into the uniform failure envelope; no error escapes unformatted.

use std::path::PathBuf;
use thiserror::Error;

use crate::engine::EngineError;

/// All errors returned by the pdfchunk processing core.
#[derive(Debug, Error)]
pub enum ProcessError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The HTTP request body carried no usable `pdf_base64` field.
    #[error("missing or empty 'pdf_base64' field in request body")]
    MissingPayload,

    /// The CLI path does not exist on disk.
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The `pdf_base64` payload is not valid base64.
    #[error("invalid base64 in 'pdf_base64': {0}")]
    Decode(#[from] base64::DecodeError),

    // ── Conversion errors ─────────────────────────────────────────────────
    /// The conversion engine failed or is not installed. Transparent so the
    /// engine's own message reaches the response envelope verbatim.
    #[error(transparent)]
    Conversion(#[from] EngineError),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the temporary PDF file.
    #[error("temporary file I/O failed: {0}")]
    TempFile(#[from] std::io::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (e.g. a panicked blocking task).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProcessError {
    /// True for errors the caller caused by sending no usable input at all.
    ///
    /// The HTTP shells map these to 400; everything else is a 500. Decode
    /// failures deliberately count as processing errors, not invalid input:
    /// a malformed-but-present payload reached the processing stage.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ProcessError::MissingPayload | ProcessError::FileNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_payload_display_names_the_field() {
        let msg = ProcessError::MissingPayload.to_string();
        assert!(msg.contains("pdf_base64"), "got: {msg}");
    }

    #[test]
    fn file_not_found_display_includes_path() {
        let e = ProcessError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert!(e.to_string().contains("/tmp/missing.pdf"));
    }

    #[test]
    fn engine_message_is_surfaced_verbatim() {
        let e = ProcessError::from(EngineError::Failed("page tree is corrupt".into()));
        assert_eq!(e.to_string(), "page tree is corrupt");
    }

    #[test]
    fn invalid_input_discriminates_status() {
        assert!(ProcessError::MissingPayload.is_invalid_input());
        assert!(ProcessError::FileNotFound {
            path: PathBuf::from("x.pdf")
        }
        .is_invalid_input());
        assert!(!ProcessError::Internal("boom".into()).is_invalid_input());
        assert!(
            !ProcessError::from(EngineError::Unavailable("no library".into())).is_invalid_input()
        );
    }
}
