//! Tests driving the real `pdfchunk` binary.
//!
//! These make no assumption about whether a pdfium library is installed on
//! the machine: every failure path must produce exit code 1 and a parseable
//! failure envelope on stdout regardless of which error fires first, so the
//! assertions hold either way.
#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdfchunk"))
        .args(args)
        .output()
        .expect("failed to spawn pdfchunk binary")
}

fn stdout_envelope(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| {
        panic!("stdout must be a JSON envelope, got error {e}: {stdout:?}")
    })
}

#[test]
fn missing_argument_fails_with_json_envelope() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_envelope(&output);
    assert_eq!(value["success"], false);
    assert!(value["error"].is_string());
    assert!(value.get("chunks").is_none());
}

#[test]
fn nonexistent_file_fails_with_json_envelope() {
    let output = run_cli(&["/definitely/not/a/real/document.pdf"]);
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_envelope(&output);
    assert_eq!(value["success"], false);
    assert!(value["error"].is_string());

    // No panic/backtrace leakage into stdout: the envelope is the whole
    // stdout stream.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("panicked"));
    assert!(!stdout.contains("RUST_BACKTRACE"));
}

#[test]
fn help_exits_zero_without_an_envelope() {
    let output = run_cli(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage") || stdout.contains("usage"));
}
