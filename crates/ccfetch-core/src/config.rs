use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cluster::DEFAULT_CRAWL;
use crate::downloader::BASE_URL;
use crate::retry::RetryPolicy;

/// Retry parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per range (including the first).
    pub max_retries: u32,
    /// Delay in seconds after the first failure; doubles on each retry.
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: 1.0,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        RetryPolicy::from_backoff(cfg.max_retries, cfg.backoff_factor)
    }
}

/// Global configuration loaded from `~/.config/ccfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcConfig {
    /// Archive base URL that relative paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Crawl collection used to locate CDX shards (e.g. "CC-MAIN-2024-30").
    #[serde(default = "default_crawl")]
    pub crawl: String,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_crawl() -> String {
    DEFAULT_CRAWL.to_string()
}

impl Default for CcConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            crawl: default_crawl(),
            retry: None,
        }
    }
}

impl CcConfig {
    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CcConfig = toml::from_str(&data)?;
    Ok(cfg)
}
