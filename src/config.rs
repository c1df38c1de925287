//! Configuration for PDF processing.
//!
//! All behaviour is controlled through [`ProcessConfig`], built via its
//! [`ProcessConfigBuilder`]. Keeping the knobs in one struct makes it
//! trivial to share a config across requests (the service shells hold one
//! `Arc<ProcessConfig>` for the process lifetime) and to substitute the
//! conversion engine in tests without touching process-wide state.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::{ConversionEngine, PdfiumEngine};
use crate::error::ProcessError;

/// Configuration for processing one or many PDF requests.
///
/// # Example
/// ```rust
/// use pdfchunk::{ProcessConfig, StaticEngine};
/// use std::sync::Arc;
///
/// let config = ProcessConfig::builder()
///     .engine(Arc::new(StaticEngine::markdown("# Doc\n\nBody", 1)))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Default)]
pub struct ProcessConfig {
    /// Pre-constructed conversion engine. Takes precedence over
    /// `pdfium_lib_path`; when `None`, a [`PdfiumEngine`] is used.
    pub engine: Option<Arc<dyn ConversionEngine>>,

    /// Directory containing the pdfium shared library, for the default
    /// engine. When `None`, `PDFIUM_LIB_PATH` and then the system library
    /// path are tried.
    pub pdfium_lib_path: Option<PathBuf>,

    /// Directory for temporary PDF files. When `None`, the system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl fmt::Debug for ProcessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessConfig")
            .field("engine", &self.engine.as_ref().map(|_| "<dyn ConversionEngine>"))
            .field("pdfium_lib_path", &self.pdfium_lib_path)
            .field("temp_dir", &self.temp_dir)
            .finish()
    }
}

impl ProcessConfig {
    /// Create a new builder for `ProcessConfig`.
    pub fn builder() -> ProcessConfigBuilder {
        ProcessConfigBuilder {
            config: Self::default(),
        }
    }

    /// Resolve the conversion engine, from most-specific to least-specific:
    ///
    /// 1. A pre-built engine set on the config — the caller constructed and
    ///    configured it entirely (tests, alternative backends).
    /// 2. A [`PdfiumEngine`] looking in `pdfium_lib_path` when set.
    /// 3. A [`PdfiumEngine`] falling back to `PDFIUM_LIB_PATH` and then the
    ///    system library path.
    pub fn resolve_engine(&self) -> Arc<dyn ConversionEngine> {
        if let Some(ref engine) = self.engine {
            return Arc::clone(engine);
        }
        match self.pdfium_lib_path {
            Some(ref dir) => Arc::new(PdfiumEngine::with_library_path(dir.clone())),
            None => Arc::new(PdfiumEngine::new()),
        }
    }
}

/// Builder for [`ProcessConfig`].
#[derive(Debug)]
pub struct ProcessConfigBuilder {
    config: ProcessConfig,
}

impl ProcessConfigBuilder {
    pub fn engine(mut self, engine: Arc<dyn ConversionEngine>) -> Self {
        self.config.engine = Some(engine);
        self
    }

    pub fn pdfium_lib_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.pdfium_lib_path = Some(dir.into());
        self
    }

    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(dir.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ProcessConfig, ProcessError> {
        if let Some(ref dir) = self.config.temp_dir {
            if !dir.is_dir() {
                return Err(ProcessError::InvalidConfig(format!(
                    "temp_dir '{}' is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StaticEngine;

    #[test]
    fn default_config_resolves_a_pdfium_engine() {
        let config = ProcessConfig::default();
        // Resolution itself must not touch the native library.
        let _engine = config.resolve_engine();
    }

    #[test]
    fn explicit_engine_wins() {
        let engine: Arc<dyn ConversionEngine> = Arc::new(StaticEngine::markdown("m", 1));
        let config = ProcessConfig::builder()
            .engine(Arc::clone(&engine))
            .build()
            .unwrap();
        let resolved = config.resolve_engine();
        assert!(Arc::ptr_eq(&resolved, &engine));
    }

    #[test]
    fn nonexistent_temp_dir_is_rejected() {
        let result = ProcessConfig::builder()
            .temp_dir("/definitely/not/a/real/dir")
            .build();
        assert!(matches!(result, Err(ProcessError::InvalidConfig(_))));
    }

    #[test]
    fn debug_does_not_require_engine_debug() {
        let config = ProcessConfig::builder()
            .engine(Arc::new(StaticEngine::markdown("m", 1)))
            .build()
            .unwrap();
        let rendered = format!("{config:?}");
        assert!(rendered.contains("ConversionEngine"));
    }
}
