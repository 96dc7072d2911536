//! Clipboard write via external tools.
//!
//! Prefers the Wayland tool (`wl-copy`) and falls back to the legacy X11
//! tool (`xclip`). Each attempt pipes the text into the tool's stdin and
//! waits for it to exit under a timeout, so a wedged tool cannot hang the
//! CLI. Callers log total failure instead of surfacing it to the user.

use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

/// How long a single clipboard tool may take before it is abandoned.
const TOOL_TIMEOUT: Duration = Duration::from_secs(5);

/// Clipboard backend override: `wl-copy` (Wayland) or `xclip` (X11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    Wayland,
    X11,
}

/// One external clipboard tool invocation.
#[derive(Debug, Clone, Copy)]
struct ToolSpec {
    name: &'static str,
    bin: &'static str,
    args: &'static [&'static str],
}

const WL_COPY: ToolSpec = ToolSpec {
    name: "wl-copy",
    bin: "wl-copy",
    args: &[],
};

const XCLIP: ToolSpec = ToolSpec {
    name: "xclip",
    bin: "xclip",
    args: &["-selection", "clipboard"],
};

/// Why a clipboard write failed. Per-tool failures are recoverable (the next
/// tool is tried); `Unavailable` means every tool failed.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o with {tool} failed: {source}")]
    Io {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}")]
    ToolFailed {
        tool: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("{tool} did not finish within {timeout:?}")]
    TimedOut {
        tool: &'static str,
        timeout: Duration,
    },
    #[error("no clipboard tool succeeded (tried {tried})")]
    Unavailable { tried: String },
}

/// Copies `text` to the system clipboard.
///
/// With no `backend` override the Wayland tool is tried first, then X11.
/// Returns the name of the tool that succeeded.
pub async fn copy_text(
    text: &str,
    backend: Option<ClipboardBackend>,
) -> Result<&'static str, ClipboardError> {
    let tools: &[ToolSpec] = match backend {
        Some(ClipboardBackend::Wayland) => &[WL_COPY],
        Some(ClipboardBackend::X11) => &[XCLIP],
        None => &[WL_COPY, XCLIP],
    };
    copy_with_tools(text, tools).await
}

async fn copy_with_tools(text: &str, tools: &[ToolSpec]) -> Result<&'static str, ClipboardError> {
    for tool in tools {
        match copy_with(text, *tool).await {
            Ok(()) => return Ok(tool.name),
            Err(err) => tracing::warn!("clipboard tool {} failed: {}", tool.name, err),
        }
    }
    Err(ClipboardError::Unavailable {
        tried: tools
            .iter()
            .map(|t| t.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

async fn copy_with(text: &str, tool: ToolSpec) -> Result<(), ClipboardError> {
    let mut child = Command::new(tool.bin)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            tool: tool.name,
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|source| ClipboardError::Io {
                tool: tool.name,
                source,
            })?;
        // dropping stdin closes the pipe so the tool sees EOF
    }

    let status = match timeout(TOOL_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(source)) => {
            return Err(ClipboardError::Io {
                tool: tool.name,
                source,
            })
        }
        Err(_elapsed) => {
            let _ = child.kill().await;
            return Err(ClipboardError::TimedOut {
                tool: tool.name,
                timeout: TOOL_TIMEOUT,
            });
        }
    };

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::ToolFailed {
            tool: tool.name,
            status,
        })
    }
}
