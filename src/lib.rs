//! wikibinder: export batches of wiki articles as a zip of print-ready PDFs.
//!
//! The pipeline runs one headless Chrome session per export request,
//! renders each URL strictly sequentially (navigate, prune disabled content
//! sections, capture a PDF), and packs the results into a zip archive. The
//! session is torn down on every exit path.

pub mod archive;
pub mod browser;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod render;

pub use config::{ExportRequest, PageFormat, RenderOptions, MAX_URLS};
pub use error::{ExportError, ExportResult};
pub use pipeline::{RenderSession, RenderedDocument};
pub use render::ChromeSession;

/// Run one export end to end and return the archive bytes.
pub async fn export(request: &ExportRequest) -> ExportResult<Vec<u8>> {
    request.validate()?;
    pipeline::export(request).await
}
