//! Integration tests for the processing core, exercised through the public
//! API with substitute engines — no native PDF library required.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pdfchunk::{
    process_base64, process_bytes, ConversionEngine, EngineError, EngineOutput, ProcessConfig,
    ProcessError, StaticEngine,
};

/// Wraps another engine and records every path it is asked to convert, so
/// tests can verify the temp file's lifecycle from the outside.
struct RecordingEngine {
    inner: StaticEngine,
    seen: Mutex<Vec<PathBuf>>,
}

impl RecordingEngine {
    fn new(inner: StaticEngine) -> Arc<Self> {
        Arc::new(Self {
            inner,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

impl ConversionEngine for RecordingEngine {
    fn convert(&self, pdf_path: &Path) -> Result<EngineOutput, EngineError> {
        self.seen.lock().unwrap().push(pdf_path.to_path_buf());
        assert!(
            pdf_path.exists(),
            "engine must see a readable temp file at {}",
            pdf_path.display()
        );
        self.inner.convert(pdf_path)
    }
}

fn config_with(engine: Arc<RecordingEngine>) -> ProcessConfig {
    ProcessConfig::builder().engine(engine).build().unwrap()
}

#[tokio::test]
async fn temp_file_is_deleted_after_success() {
    let engine = RecordingEngine::new(StaticEngine::markdown("a\n\nb", 2));
    let config = config_with(Arc::clone(&engine));

    let output = process_bytes(b"%PDF fake bytes", &config).await.unwrap();
    assert_eq!(output.chunks.len(), 2);

    let seen = engine.seen_paths();
    assert_eq!(seen.len(), 1);
    assert!(
        !seen[0].exists(),
        "temp file {} must not outlive the request",
        seen[0].display()
    );
}

#[tokio::test]
async fn temp_file_is_deleted_after_engine_failure() {
    let engine = RecordingEngine::new(StaticEngine::failing("engine blew up"));
    let config = config_with(Arc::clone(&engine));

    let err = process_bytes(b"%PDF fake bytes", &config).await.unwrap_err();
    assert_eq!(err.to_string(), "engine blew up");

    let seen = engine.seen_paths();
    assert_eq!(seen.len(), 1);
    assert!(
        !seen[0].exists(),
        "temp file must be deleted on the failure path too"
    );
}

#[tokio::test]
async fn concurrent_requests_get_distinct_temp_files() {
    let engine = RecordingEngine::new(StaticEngine::markdown("text", 1));
    let config = config_with(Arc::clone(&engine));

    let (a, b) = tokio::join!(
        process_bytes(b"first", &config),
        process_bytes(b"second", &config)
    );
    a.unwrap();
    b.unwrap();

    let seen = engine.seen_paths();
    assert_eq!(seen.len(), 2);
    assert_ne!(seen[0], seen[1], "temp file names must be unique per request");
}

#[tokio::test]
async fn full_pipeline_produces_the_wire_envelope() {
    let engine = RecordingEngine::new(StaticEngine::markdown(
        "Hello world.\n\nThis is paragraph two.\n\n\n\nThird.",
        3,
    ));
    let config = config_with(engine);

    let encoded = BASE64.encode(b"%PDF-1.4 pretend document");
    let envelope = process_base64(&encoded, &config)
        .await
        .unwrap()
        .into_envelope();

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["metadata"]["num_pages"], 3);
    assert_eq!(value["metadata"]["num_chunks"], 3);
    assert_eq!(value["chunks"][0]["content"], "Hello world.");
    assert_eq!(value["chunks"][0]["metadata"]["chunk_index"], 0);
    assert_eq!(value["chunks"][2]["content"], "Third.");
    assert_eq!(value["chunks"][2]["metadata"]["chunk_index"], 2);
}

#[tokio::test]
async fn unavailable_engine_reports_conversion_error() {
    let config = ProcessConfig::builder()
        .engine(Arc::new(StaticEngine::unavailable("libpdfium missing")))
        .build()
        .unwrap();

    let err = process_bytes(b"bytes", &config).await.unwrap_err();
    assert!(matches!(err, ProcessError::Conversion(_)));
    assert!(err.to_string().contains("libpdfium missing"));
}
