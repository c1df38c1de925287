//! Chunking: split a Markdown document into paragraph-level chunks.
//!
//! ## The heuristic, and what it is not
//!
//! [`chunk_markdown`] splits on the literal blank-line boundary (`"\n\n"`),
//! trims each segment, drops segments that end up empty, and indexes the
//! survivors from 0. It is purely syntactic and deliberately lossy: it knows
//! nothing about headings, tables, code fences, or lists, and may split a
//! table or a fenced block mid-way. Downstream retrieval pipelines accept
//! this trade for its total, deterministic behaviour — the function never
//! fails, for any input, including the empty string.

use serde::{Deserialize, Serialize};

/// The delimiter between chunks in the source Markdown.
pub const CHUNK_DELIMITER: &str = "\n\n";

/// A minimal retrievable unit of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Trimmed, non-empty segment text, in source order.
    pub content: String,

    /// Fixed tag; every chunk this splitter produces is plain text.
    #[serde(rename = "type")]
    pub kind: ChunkKind,

    pub metadata: ChunkMetadata,
}

/// Chunk classification tag. Only [`ChunkKind::Text`] exists today; the tag
/// is on the wire so consumers can branch when richer kinds appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    #[default]
    Text,
}

/// Per-chunk metadata carried alongside the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Zero-based position among the retained chunks, contiguous and
    /// strictly increasing. Indices are assigned *after* empty segments are
    /// discarded, so there are never gaps.
    pub chunk_index: usize,
}

/// Split `markdown` into ordered, indexed paragraph chunks.
///
/// Pure and deterministic: equal inputs give equal outputs, and the empty
/// string yields an empty vec.
pub fn chunk_markdown(markdown: &str) -> Vec<Chunk> {
    markdown
        .split(CHUNK_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(chunk_index, content)| Chunk {
            content: content.to_string(),
            kind: ChunkKind::Text,
            metadata: ChunkMetadata { chunk_index },
        })
        .collect()
}
