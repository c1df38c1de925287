//! HTTP transport shell: the axum router shared by the standalone service
//! and any serverless host.
//!
//! There is deliberately only one HTTP surface. The `pdfchunkd` binary
//! serves [`router`] on a TCP port; a serverless runtime mounts the same
//! router as its function handler. Both get identical routes, envelopes,
//! and status mapping, so there is no duplicated handler code to drift.
//!
//! Status mapping is the only transport-specific behaviour: 200 on success,
//! 400 when the request carried no usable input, 500 for processing errors.
//! Every failure — including a body that is not valid JSON — is folded into
//! the uniform failure envelope; nothing escapes unformatted.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ProcessConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::ProcessError;
use crate::process::process_base64;

/// Request body for `POST /process-pdf`.
#[derive(Debug, Deserialize)]
pub struct ProcessPdfRequest {
    /// Base64-encoded PDF bytes. Defaulting to empty lets an absent field
    /// reach the handler, which reports it as the uniform 400 envelope
    /// instead of a serde rejection.
    #[serde(default)]
    pub pdf_base64: String,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

/// Build the service router.
///
/// CORS is wide open — all origins, methods, and headers — with hardening
/// expected at deployment time.
pub fn router(config: Arc<ProcessConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/process-pdf", post(process_pdf_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(config)
}

async fn root_handler() -> impl IntoResponse {
    Json(StatusResponse {
        status: "PDF chunking service is running",
    })
}

async fn health_handler() -> impl IntoResponse {
    Json(StatusResponse { status: "healthy" })
}

async fn process_pdf_handler(
    State(config): State<Arc<ProcessConfig>>,
    body: Result<Json<ProcessPdfRequest>, JsonRejection>,
) -> (StatusCode, Json<ResponseEnvelope>) {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected process-pdf body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ResponseEnvelope::failure(format!(
                    "invalid request body: {rejection}"
                ))),
            );
        }
    };

    match process_base64(&request.pdf_base64, &config).await {
        Ok(output) => (StatusCode::OK, Json(output.into_envelope())),
        Err(e) => {
            warn!(error = %e, "process-pdf request failed");
            (status_for(&e), Json(ResponseEnvelope::failure(e)))
        }
    }
}

fn status_for(error: &ProcessError) -> StatusCode {
    if error.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
