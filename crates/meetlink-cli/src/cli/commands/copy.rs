//! `meetlink copy` – extract and copy the canonical chat link.

use anyhow::Result;
use meetlink_core::config::MeetlinkConfig;

use super::extract::copy_link;
use super::extract_from;

pub async fn run_copy(cfg: &MeetlinkConfig, input: Option<String>) -> Result<()> {
    let found = extract_from(input)?;
    println!("{}", found.link);
    copy_link(&found.link, cfg).await;
    Ok(())
}
