//! CLI binary for pdfchunk.
//!
//! A thin shim over the library: path in, JSON envelope out. stdout carries
//! nothing but the envelope — pretty-printed on success (exit 0), compact on
//! failure (exit 1) — so the output is always machine-parseable. Logs go to
//! stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use pdfchunk::{process_path, ProcessConfig, ResponseEnvelope};
use tracing_subscriber::EnvFilter;

/// Extract a PDF's text as Markdown and split it into paragraph chunks.
#[derive(Parser, Debug)]
#[command(
    name = "pdfchunk",
    version,
    about = "Extract a PDF's text as Markdown and split it into paragraph chunks",
    long_about = "Converts a PDF document to Markdown via the PDFium engine and splits the \
result on blank-line boundaries into indexed text chunks, printing a JSON envelope to stdout. \
Exit code 0 on success, 1 on any failure (the failure is itself reported as JSON)."
)]
struct Cli {
    /// Path to the PDF document to process.
    input: PathBuf,

    /// Directory containing the pdfium shared library.
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib_path: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFCHUNK_VERBOSE")]
    verbose: bool,

    /// Suppress all log output.
    #[arg(short, long, env = "PDFCHUNK_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Argument errors become the same failure envelope as processing errors:
    // callers scripting this binary always get JSON on stdout, never a
    // traceback or bare usage dump. Help/version keep clap's behaviour.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            return fail(format!("usage: pdfchunk <PDF_PATH> — {}", e.kind()));
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "off"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ProcessConfig::builder();
    if let Some(ref dir) = cli.pdfium_lib_path {
        builder = builder.pdfium_lib_path(dir.clone());
    }
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    // ── Engine availability check ────────────────────────────────────────
    // A missing engine short-circuits before any request-specific work, in
    // the same JSON failure shape as every other error.
    if let Err(e) = config.resolve_engine().probe() {
        return fail(e);
    }

    // ── Process ──────────────────────────────────────────────────────────
    match process_path(&cli.input, &config).await {
        Ok(output) => {
            println!("{}", output.into_envelope().to_json_pretty());
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(error: impl std::fmt::Display) -> ExitCode {
    println!("{}", ResponseEnvelope::failure(error).to_json());
    ExitCode::FAILURE
}
