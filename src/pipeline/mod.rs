//! Export orchestration.
//!
//! Drives one validated request end to end: acquire a renderer session,
//! render each URL strictly sequentially, assign archive member names, pack
//! the results. The session is released exactly once on every code path,
//! and release happens before any error propagates and before archive
//! assembly.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::archive;
use crate::config::{ExportRequest, RenderOptions, MAX_URLS};
use crate::error::{ExportError, ExportResult};
use crate::render::ChromeSession;

/// Upper bound on one whole export. Sequential rendering of at most
/// [`MAX_URLS`] pages fits comfortably; anything longer is a hung renderer.
const EXPORT_DEADLINE: Duration = Duration::from_secs(300);

/// One rendered page, owned by the orchestrator for the duration of one
/// export and discarded after archive assembly.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Extracted article heading, if the page had one.
    pub title: Option<String>,
    /// PDF bytes captured after pruning.
    pub pdf: Vec<u8>,
}

/// The orchestrator's seam to the renderer.
///
/// Production uses [`ChromeSession`]; tests inject fakes to exercise the
/// teardown guarantees without a browser.
#[async_trait]
pub trait RenderSession: Send {
    /// Render exactly one URL into one PDF buffer under the configuration.
    async fn render(&mut self, url: &str, options: &RenderOptions) -> ExportResult<RenderedDocument>;

    /// Release the session. Called exactly once per export, on every path.
    async fn close(&mut self);
}

/// Run one export end to end: launch a browser session, render, pack.
pub async fn export(request: &ExportRequest) -> ExportResult<Vec<u8>> {
    // Input arrives validated, but the cap is cheap to re-check and a
    // violation here must not reach the renderer.
    if request.urls.len() > MAX_URLS {
        warn!(
            "Rejecting over-limit export request: {} URLs (maximum {MAX_URLS})",
            request.urls.len()
        );
        return Err(ExportError::Validation(format!(
            "too many URLs: {} (maximum {MAX_URLS})",
            request.urls.len()
        )));
    }

    let session = ChromeSession::launch().await?;
    export_with_session(session, request).await
}

/// Drive the export over an already-acquired session.
///
/// Owns the session for its whole lifetime: whatever the render loop
/// returns, the session is closed before the outcome propagates, and before
/// the archive is assembled on success.
pub async fn export_with_session<S: RenderSession>(
    mut session: S,
    request: &ExportRequest,
) -> ExportResult<Vec<u8>> {
    let outcome = match tokio::time::timeout(
        EXPORT_DEADLINE,
        render_all(&mut session, request),
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(_) => Err(ExportError::Render {
            url: "(batch)".to_string(),
            message: format!("export deadline of {EXPORT_DEADLINE:?} exceeded"),
        }),
    };

    session.close().await;

    let members = outcome?;
    info!("Rendered {} page(s), assembling archive", members.len());
    archive::build_archive(members)
}

/// Strictly sequential render loop. The next URL's navigation does not begin
/// until the previous URL's capture completed; the first failure aborts the
/// whole export.
async fn render_all<S: RenderSession>(
    session: &mut S,
    request: &ExportRequest,
) -> ExportResult<Vec<(String, Vec<u8>)>> {
    let mut members = Vec::with_capacity(request.urls.len());
    let mut namer = MemberNamer::default();

    for (index, url) in request.urls.iter().enumerate() {
        let document = session.render(url, &request.configuration).await?;
        let filename = namer.assign(document.title.as_deref(), index);
        members.push((filename, document.pdf));
    }

    Ok(members)
}

/// Assigns archive member names: sanitized extracted title, or
/// `Article {k}` (1-indexed) when no title was extracted, with a ` (n)`
/// suffix on duplicates so no member silently overwrites another.
#[derive(Default)]
struct MemberNamer {
    seen: HashMap<String, usize>,
}

impl MemberNamer {
    fn assign(&mut self, title: Option<&str>, index: usize) -> String {
        let base = match title {
            Some(title) => sanitize_filename::sanitize(title),
            None => String::new(),
        };
        let base = if base.is_empty() {
            format!("Article {}", index + 1)
        } else {
            base
        };

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            format!("{base}.pdf")
        } else {
            format!("{base} ({count}).pdf")
        }
    }
}
