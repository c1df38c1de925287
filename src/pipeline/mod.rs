//! Pipeline stages for PDF-to-chunks processing.
//!
//! Each submodule implements exactly one transformation step, keeping every
//! stage independently testable.
//!
//! ## Data Flow
//!
//! ```text
//! payload ──▶ engine ──▶ chunk ──▶ envelope
//! (base64/    (external  (blank-   (uniform
//!  temp file)  Markdown)  line      success/
//!                         split)    failure JSON)
//! ```
//!
//! 1. [`payload`] — decode the base64 body and materialise it as a managed
//!    temporary file (or validate a caller-supplied path)
//! 2. `engine` ([`crate::engine`]) — the external conversion engine turns
//!    the file into Markdown; runs in `spawn_blocking` because conversion
//!    is a long, blocking call
//! 3. [`chunk`] — split the Markdown into trimmed, indexed paragraph chunks
//! 4. `envelope` ([`crate::envelope`]) — wrap the result (or the error) in
//!    the response contract shared by every transport shell

pub mod chunk;
pub mod payload;
