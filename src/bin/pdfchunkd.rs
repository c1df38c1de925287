//! Standalone HTTP service binary for pdfchunk.
//!
//! Hosts the shared [`pdfchunk::service::router`] on a TCP port. A
//! serverless deployment mounts the same router in its own host instead of
//! running this binary; the routes and envelopes are identical either way.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use pdfchunk::ProcessConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(ProcessConfig::default());

    // Refuse to start without a working engine: a service that can only
    // return 500s is better caught by the supervisor's crash loop than
    // discovered request by request.
    config
        .resolve_engine()
        .probe()
        .context("conversion engine unavailable at startup")?;

    let router = pdfchunk::service::router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
