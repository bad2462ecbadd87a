//! Per-page rendering: navigate, prune, capture.
//!
//! [`ChromeSession`] is the production [`RenderSession`]: it owns one
//! browser process and turns one URL at a time into a PDF buffer. Each URL
//! gets a fresh page context that is closed on every exit path; the session
//! itself is torn down by the orchestrator.

pub mod prune;

mod pdf;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::page::Page;
use tracing::{debug, info, warn};

use crate::browser::BrowserWrapper;
use crate::config::RenderOptions;
use crate::error::{ExportError, ExportResult};
use crate::pipeline::{RenderSession, RenderedDocument};

/// Timeout for `page.goto()`.
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for waiting on the load event.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Selector evaluation for the article heading; `null` when absent.
const TITLE_SCRIPT: &str = r"document.querySelector('#firstHeading')?.textContent || null";

/// One live headless Chrome process serving a single export request.
pub struct ChromeSession {
    wrapper: BrowserWrapper,
}

impl ChromeSession {
    /// Start the renderer process. Failure here means nothing was attempted.
    pub async fn launch() -> ExportResult<Self> {
        let wrapper = BrowserWrapper::launch()
            .await
            .map_err(|e| ExportError::Session(format!("{e:#}")))?;
        Ok(Self { wrapper })
    }
}

#[async_trait]
impl RenderSession for ChromeSession {
    async fn render(&mut self, url: &str, options: &RenderOptions) -> ExportResult<RenderedDocument> {
        info!("Rendering page: {url}");

        let page = self
            .wrapper
            .browser()
            .new_page("about:blank")
            .await
            .map_err(|e| ExportError::render(url, e))?;

        let result = render_on_page(&page, url, options).await;

        // The page context must not leak, success or failure. The session
        // outlives it and is torn down separately by the orchestrator.
        if let Err(e) = page.close().await {
            debug!("Failed to close page context for {url}: {e}");
        }

        result
    }

    async fn close(&mut self) {
        self.wrapper.shutdown().await;
    }
}

async fn render_on_page(
    page: &Page,
    url: &str,
    options: &RenderOptions,
) -> ExportResult<RenderedDocument> {
    with_page_timeout(
        async {
            page.goto(url)
                .await
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("{e}"))
        },
        PAGE_LOAD_TIMEOUT,
        "Page navigation",
    )
    .await
    .map_err(|e| ExportError::render(url, format!("{e:#}")))?;

    with_page_timeout(
        async {
            page.wait_for_navigation()
                .await
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("{e}"))
        },
        NAVIGATION_TIMEOUT,
        "Page load",
    )
    .await
    .map_err(|e| ExportError::render(url, format!("{e:#}")))?;

    let title = extract_title(page, url).await?;
    match &title {
        Some(title) => debug!("Extracted title {title:?} for {url}"),
        None => warn!("No article heading found for {url}, caller will assign a fallback name"),
    }

    apply_pruning(page, url, options).await?;

    let params = pdf::print_params(options)?;
    let pdf = page
        .pdf(params)
        .await
        .map_err(|e| ExportError::render(url, e))?;

    Ok(RenderedDocument { title, pdf })
}

/// Read the article heading as the candidate filename.
///
/// Fails soft to `None` when the heading is absent or not text; transport
/// failures talking to the page still propagate.
async fn extract_title(page: &Page, url: &str) -> ExportResult<Option<String>> {
    let evaluation = page
        .evaluate(TITLE_SCRIPT)
        .await
        .map_err(|e| ExportError::render(url, e))?;

    let title = evaluation
        .into_value::<Option<String>>()
        .ok()
        .flatten()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    Ok(title)
}

/// Bound an operation at the renderer boundary. A hung navigation must not
/// block the export; the orchestrator's deadline is the outer backstop.
async fn with_page_timeout<F, T>(operation: F, limit: Duration, what: &str) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .unwrap_or_else(|_| Err(anyhow::anyhow!("{what} timed out after {limit:?}")))
}

/// Apply every pruning script derived from the disabled flags. All mutation
/// completes before PDF capture begins.
async fn apply_pruning(page: &Page, url: &str, options: &RenderOptions) -> ExportResult<()> {
    if !options.contents {
        page.evaluate(prune::STRIP_TOC_SCRIPT)
            .await
            .map_err(|e| ExportError::render(url, format!("table-of-contents removal: {e}")))?;
    }

    if !options.images {
        page.evaluate(prune::STRIP_IMAGES_SCRIPT)
            .await
            .map_err(|e| ExportError::render(url, format!("image removal: {e}")))?;
    }

    let rules = prune::section_rules(options);
    if !rules.is_empty() {
        page.evaluate(prune::section_prune_script(&rules))
            .await
            .map_err(|e| ExportError::render(url, format!("section removal: {e}")))?;
    }

    Ok(())
}
