//! `meetlink extract` – print the canonical chat link.

use anyhow::Result;
use meetlink_core::clipboard;
use meetlink_core::config::MeetlinkConfig;
use meetlink_core::opener;

use super::extract_from;

pub async fn run_extract(
    cfg: &MeetlinkConfig,
    input: Option<String>,
    open: bool,
    copy: bool,
) -> Result<()> {
    let found = extract_from(input)?;
    println!("{}", found.link);

    if copy || cfg.copy_on_extract {
        copy_link(&found.link, cfg).await;
    }
    if open || cfg.auto_open {
        opener::open_in_browser(&found.link);
    }
    Ok(())
}

/// Copies the link and confirms on stdout; total failure is logged only,
/// never surfaced as a user-facing error.
pub(super) async fn copy_link(link: &str, cfg: &MeetlinkConfig) {
    match clipboard::copy_text(link, cfg.clipboard_backend).await {
        Ok(tool) => println!("Link copied to clipboard ({tool})."),
        Err(err) => tracing::error!("clipboard copy failed: {}", err),
    }
}
