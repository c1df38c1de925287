//! A canned engine for tests and wiring checks.

use std::path::Path;

use super::{ConversionEngine, EngineError, EngineOutput};

/// [`ConversionEngine`] that returns a fixed, pre-baked result.
///
/// Never touches the filesystem or any native library. Useful to exercise
/// the full request pipeline (decode → temp file → chunk → envelope) without
/// a real PDF engine, and to simulate engine faults.
#[derive(Debug, Clone)]
pub struct StaticEngine {
    markdown: String,
    page_count: Option<usize>,
    failure: Option<EngineError>,
}

impl StaticEngine {
    /// Engine that answers every conversion with the given markdown.
    pub fn markdown(markdown: impl Into<String>, page_count: usize) -> Self {
        Self {
            markdown: markdown.into(),
            page_count: Some(page_count),
            failure: None,
        }
    }

    /// Engine whose result exposes no page count (exercises the `0` fallback).
    pub fn without_page_count(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            page_count: None,
            failure: None,
        }
    }

    /// Engine that fails every conversion with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            markdown: String::new(),
            page_count: None,
            failure: Some(EngineError::Failed(message.into())),
        }
    }

    /// Engine that reports itself as not installed.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            markdown: String::new(),
            page_count: None,
            failure: Some(EngineError::Unavailable(message.into())),
        }
    }
}

impl ConversionEngine for StaticEngine {
    fn probe(&self) -> Result<(), EngineError> {
        match &self.failure {
            Some(EngineError::Unavailable(msg)) => Err(EngineError::Unavailable(msg.clone())),
            _ => Ok(()),
        }
    }

    fn convert(&self, _pdf_path: &Path) -> Result<EngineOutput, EngineError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(EngineOutput {
            markdown: self.markdown.clone(),
            page_count: self.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn returns_canned_output() {
        let engine = StaticEngine::markdown("# Title\n\nBody", 3);
        let out = engine.convert(&PathBuf::from("ignored.pdf")).unwrap();
        assert_eq!(out.markdown, "# Title\n\nBody");
        assert_eq!(out.page_count, Some(3));
    }

    #[test]
    fn failing_engine_probe_passes_but_convert_fails() {
        let engine = StaticEngine::failing("synthetic fault");
        assert!(engine.probe().is_ok());
        let err = engine.convert(&PathBuf::from("x.pdf")).unwrap_err();
        assert_eq!(err.to_string(), "synthetic fault");
    }

    #[test]
    fn unavailable_engine_fails_probe() {
        let engine = StaticEngine::unavailable("not installed");
        assert!(engine.probe().is_err());
    }
}
