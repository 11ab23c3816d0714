use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default User-Agent for the reachability probe: a desktop Chrome UA so
/// servers answer the probe the way they will answer the renderer.
pub const DEFAULT_PROBE_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";

/// Reachability probe parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with the probe GET.
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: DEFAULT_PROBE_USER_AGENT.to_string(),
        }
    }
}

/// Renderer parameters (optional `[render]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Hard per-URL deadline for the browser process, in seconds.
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

/// Global configuration loaded from `~/.config/u2p/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct U2pConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("u2p")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<U2pConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = U2pConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: U2pConfig = toml::from_str(&data)?;
    Ok(cfg)
}
