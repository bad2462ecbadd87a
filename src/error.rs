//! Error taxonomy for the export pipeline.
//!
//! Every failure an export can hit maps onto one of four kinds, which the
//! HTTP boundary translates into status codes. Nothing is retried; the only
//! mandatory recovery action is browser-session teardown, which the
//! orchestrator performs before any of these propagate.

use thiserror::Error;

/// Failures surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Malformed or over-limit request. Raised before a browser session is
    /// ever acquired.
    #[error("invalid export request: {0}")]
    Validation(String),

    /// The renderer process could not be started.
    #[error("failed to start renderer session: {0}")]
    Session(String),

    /// Navigation, DOM evaluation, or PDF capture failed for one URL.
    /// Aborts the whole export (fail-fast, no partial archive).
    #[error("failed to render {url}: {message}")]
    Render { url: String, message: String },

    /// Archive assembly failed after all pages rendered.
    #[error("failed to assemble archive: {0}")]
    Packaging(String),
}

impl ExportError {
    pub(crate) fn render(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Render {
            url: url.into(),
            message: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type ExportResult<T> = Result<T, ExportError>;
