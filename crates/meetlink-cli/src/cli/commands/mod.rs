//! Subcommand implementations.

mod copy;
mod extract;
mod open;

pub use copy::run_copy;
pub use extract::run_extract;
pub use open::run_open;

use anyhow::{bail, Context, Result};
use meetlink_core::extract::{extract, Extracted};
use std::io::Read;

/// Input from the positional argument, or stdin when omitted (so a forwarded
/// mail body can be piped in).
fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Runs the extractor on CLI input; a miss becomes the user-facing error.
fn extract_from(arg: Option<String>) -> Result<Extracted> {
    let raw = read_input(arg)?;
    match extract(&raw) {
        Some(found) => Ok(found),
        None => bail!("no Teams meeting thread identifier found in input"),
    }
}
