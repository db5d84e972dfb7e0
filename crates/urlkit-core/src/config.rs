use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::mime::MimeRegistry;

/// Global configuration loaded from `~/.config/urlkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlkitConfig {
    /// Port reported for URLs that carry no explicit port.
    pub listen_port: u16,
    /// Size of the buffer the content type is written into (including the NUL).
    pub output_capacity: usize,
    /// Extra or overriding MIME entries, e.g. `".wasm" = "application/wasm"`.
    #[serde(default)]
    pub mime: BTreeMap<String, String>,
}

impl Default for UrlkitConfig {
    fn default() -> Self {
        Self {
            listen_port: 80,
            output_capacity: 64,
            mime: BTreeMap::new(),
        }
    }
}

impl UrlkitConfig {
    /// Built-in MIME table with this config's `[mime]` entries layered on top.
    pub fn mime_registry(&self) -> MimeRegistry {
        let mut registry = MimeRegistry::with_defaults();
        registry.extend(&self.mime);
        registry
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.output_capacity > 0, "output_capacity must be at least 1");
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlkitConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlkitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
