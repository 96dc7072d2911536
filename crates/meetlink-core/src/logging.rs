//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,meetlink=debug"))
}

/// Open (append) the log file under `~/.local/state/meetlink/`.
fn open_log_file() -> Result<(PathBuf, fs::File)> {
    let dir = xdg::BaseDirectories::with_prefix("meetlink")?.get_state_home();
    fs::create_dir_all(&dir)?;
    let path = dir.join("meetlink.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Initialize structured logging to the state-dir log file.
///
/// Logs go to a file rather than the terminal so stdout stays clean for the
/// extracted link. If the state dir is unavailable the subscriber writes to
/// stderr instead; either way the CLI keeps running.
pub fn init() {
    match open_log_file() {
        Ok((path, file)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::debug!("meetlink logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("state dir unavailable ({:#}); logging to stderr", err);
        }
    }
}
