//! RAII ownership of a launched browser.

use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::launch::launch_browser;

/// Owns a browser process, its CDP event handler task and its temp profile
/// directory.
///
/// The handler MUST be aborted when the browser is done, otherwise it runs
/// indefinitely after the process exits. [`shutdown`](Self::shutdown) is the
/// orderly path; `Drop` is the fallback that still aborts the handler and
/// removes the profile directory.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    /// Launch a fresh browser and take ownership of its resources.
    pub async fn launch() -> anyhow::Result<Self> {
        let (browser, handler, user_data_dir) = launch_browser().await?;
        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        })
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser, wait for the process to exit, then remove the
    /// profile directory.
    ///
    /// Best-effort: each step logs a warning on failure rather than aborting
    /// the teardown, so a crashed Chrome cannot block session release. Safe
    /// to call once per wrapper; `Drop` skips directory cleanup afterwards.
    pub async fn shutdown(&mut self) {
        debug!("Closing browser");
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }

        // Wait for the process to fully exit so file handles are released
        // before the profile directory is removed.
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
        }

        self.cleanup_temp_dir();
    }

    /// Remove the profile directory (blocking; also callable from `Drop`).
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!("Removing browser profile directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to remove profile directory {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop kills the Chrome process if close() was never called.
        if self.user_data_dir.is_some() {
            info!("BrowserWrapper dropped without shutdown, cleaning up profile directory");
            self.cleanup_temp_dir();
        }
    }
}
