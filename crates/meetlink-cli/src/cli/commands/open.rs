//! `meetlink open` – extract and open the canonical chat link.

use anyhow::Result;
use meetlink_core::opener;

use super::extract_from;

pub fn run_open(input: Option<String>) -> Result<()> {
    let found = extract_from(input)?;
    println!("{}", found.link);
    opener::open_in_browser(&found.link);
    Ok(())
}
