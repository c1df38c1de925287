//! Response builder: the uniform envelope every transport shell returns.
//!
//! Exactly one of the two shapes is ever populated:
//!
//! ```json
//! {"success": true,  "chunks": [...], "metadata": {"num_pages": 3, "num_chunks": 7}}
//! {"success": false, "error": "..."}
//! ```
//!
//! Absent fields are omitted from the JSON entirely (not serialised as
//! null), and the constructors are the only way to build an envelope, so a
//! failure can never leak partial chunk data and `num_chunks` can never
//! disagree with the chunk list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::chunk::Chunk;

/// Summary metadata attached to a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetadata {
    /// Page count reported by the engine; `0` when the engine exposed none.
    pub num_pages: usize,
    /// Always equal to the length of the chunk list.
    pub num_chunks: usize,
}

/// The success/failure contract shared by the HTTP shells and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProcessMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Build the success shape. `num_chunks` is derived, never passed in.
    pub fn success(chunks: Vec<Chunk>, num_pages: usize) -> Self {
        let metadata = ProcessMetadata {
            num_pages,
            num_chunks: chunks.len(),
        };
        Self {
            success: true,
            chunks: Some(chunks),
            metadata: Some(metadata),
            error: None,
        }
    }

    /// Build the failure shape from any displayable fault.
    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            chunks: None,
            metadata: None,
            error: Some(error.to_string()),
        }
    }

    /// Compact JSON, used by the CLI for failure output.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_JSON.to_string())
    }

    /// Pretty JSON, used by the CLI for success output.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| FALLBACK_JSON.to_string())
    }
}

// Serialising the envelope cannot fail in practice (no maps, no non-string
// keys); the fallback keeps the shells' output machine-parseable even if it
// somehow does.
const FALLBACK_JSON: &str = r#"{"success":false,"error":"failed to serialise response"}"#;
