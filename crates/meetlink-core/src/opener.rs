//! Best-effort browser open via `xdg-open`.

use std::process::{Command, Stdio};

/// Opens `url` in the default browser.
///
/// Strictly best-effort: a missing or blocked opener is logged and
/// swallowed, never reported as an extraction error.
pub fn open_in_browser(url: &str) {
    match Command::new("xdg-open")
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_child) => tracing::debug!("opening {} via xdg-open", url),
        Err(err) => tracing::warn!("could not open {}: {}", url, err),
    }
}
