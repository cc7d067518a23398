use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default `User-Agent` sent with the page request.
pub const DEFAULT_USER_AGENT: &str = "Curl";

/// Global configuration loaded from `~/.config/opengraph/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `User-Agent` used when a request does not set one.
    pub user_agent: String,
    /// Total timeout for the page request, in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed for the page request.
    pub max_redirects: u32,
    /// Verify TLS certificate and host name for the page request. Off by default so
    /// sites with broken certificates still yield metadata.
    pub verify_tls: bool,
    /// Total timeout for the image existence check, in seconds.
    pub image_timeout_secs: u64,
    /// Maximum redirects followed for the image existence check.
    pub image_max_redirects: u32,
    /// Verify TLS certificate and host name for the image existence check.
    pub verify_image_tls: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            max_redirects: 10,
            verify_tls: false,
            image_timeout_secs: 10,
            image_max_redirects: 5,
            verify_image_tls: true,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("opengraph")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
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

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
