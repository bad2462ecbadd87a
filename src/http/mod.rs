//! HTTP boundary for the export pipeline.
//!
//! One endpoint: `POST /export` takes a JSON [`ExportRequest`] and answers
//! with the zip archive bytes, or a non-200 JSON error for any pipeline
//! failure. Malformed bodies are rejected by the `Json` extractor before the
//! pipeline is invoked.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing::error;

use crate::config::ExportRequest;
use crate::error::ExportError;
use crate::pipeline;

/// Build the service router.
pub fn router() -> Router {
    Router::new().route("/export", post(export_handler))
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn export_handler(Json(request): Json<ExportRequest>) -> Result<Response, ExportError> {
    request.validate()?;
    let archive = pipeline::export(&request).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"export.zip\"",
            ),
        ],
        archive,
    )
        .into_response())
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExportError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ExportError::Session(_) => StatusCode::SERVICE_UNAVAILABLE,
            ExportError::Render { .. } => StatusCode::BAD_GATEWAY,
            ExportError::Packaging(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("Export failed ({status}): {self}");

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
