use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::clipboard::ClipboardBackend;

/// Global configuration loaded from `~/.config/meetlink/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetlinkConfig {
    /// Open the canonical link in a browser after a successful extraction.
    #[serde(default)]
    pub auto_open: bool,
    /// Copy the canonical link to the clipboard after a successful extraction.
    #[serde(default)]
    pub copy_on_extract: bool,
    /// Clipboard tool override: "wayland" (wl-copy) or "x11" (xclip).
    /// Unset means try Wayland first, then fall back to X11.
    #[serde(default)]
    pub clipboard_backend: Option<ClipboardBackend>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("meetlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MeetlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MeetlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MeetlinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MeetlinkConfig::default();
        assert!(!cfg.auto_open);
        assert!(!cfg.copy_on_extract);
        assert!(cfg.clipboard_backend.is_none());
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let cfg: MeetlinkConfig = toml::from_str("").unwrap();
        assert!(!cfg.auto_open);
        assert!(!cfg.copy_on_extract);
        assert!(cfg.clipboard_backend.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MeetlinkConfig {
            auto_open: true,
            copy_on_extract: true,
            clipboard_backend: Some(ClipboardBackend::X11),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MeetlinkConfig = toml::from_str(&toml).unwrap();
        assert!(parsed.auto_open);
        assert!(parsed.copy_on_extract);
        assert_eq!(parsed.clipboard_backend, Some(ClipboardBackend::X11));
    }

    #[test]
    fn config_toml_clipboard_backend() {
        let toml = r#"
            clipboard_backend = "wayland"
        "#;
        let cfg: MeetlinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.clipboard_backend, Some(ClipboardBackend::Wayland));

        let toml_x11 = r#"
            auto_open = true
            clipboard_backend = "x11"
        "#;
        let cfg_x11: MeetlinkConfig = toml::from_str(toml_x11).unwrap();
        assert!(cfg_x11.auto_open);
        assert_eq!(cfg_x11.clipboard_backend, Some(ClipboardBackend::X11));
    }
}
