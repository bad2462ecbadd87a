//! Headless Chrome lifecycle.
//!
//! One browser process per export request: launched at the start, torn down
//! at the end regardless of outcome, never shared across requests.

mod launch;
mod wrapper;

pub use launch::{download_managed_browser, find_browser_executable, launch_browser};
pub use wrapper::BrowserWrapper;
