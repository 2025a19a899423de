use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::{FetchSettings, DEFAULT_MAX_BODY_BYTES};
use crate::store::IntegrityStore;
use crate::verify::{FetchVerifyService, PersistPolicy};

const APP_NAME: &str = "ckfetch";

/// Outbound transfer limits (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Seconds to wait for the TCP/TLS connection (default 15). 0 waits indefinitely.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: Option<u64>,
    /// Seconds for the whole transfer (default 30). 0 waits indefinitely.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
    /// Larger response bodies are rejected.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

fn default_connect_timeout_secs() -> Option<u64> {
    Some(15)
}

fn default_timeout_secs() -> Option<u64> {
    Some(30)
}

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl HttpConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: secs_limit(self.connect_timeout_secs),
            timeout: secs_limit(self.timeout_secs),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

fn secs_limit(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|&s| s > 0).map(Duration::from_secs)
}

/// Global configuration loaded from `~/.config/ckfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CkfetchConfig {
    /// Endpoint returning `{"data": ..., "checksum": ...}`.
    pub remote_url: String,
    /// Directory holding the stored artifact. Defaults to `~/.local/share/ckfetch`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Listen address for `ckfetch serve`.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// "always" (save, then verify) or "verified-only".
    #[serde(default)]
    pub persist: PersistPolicy,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_file_name() -> String {
    "received.txt".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:5001".to_string()
}

impl Default for CkfetchConfig {
    fn default() -> Self {
        Self {
            remote_url: "http://127.0.0.1:5000/data".to_string(),
            data_dir: None,
            file_name: default_file_name(),
            bind_addr: default_bind_addr(),
            persist: PersistPolicy::default(),
            http: HttpConfig::default(),
        }
    }
}

impl CkfetchConfig {
    /// `data_dir` if set, else the XDG data home for ckfetch.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
                Ok(xdg_dirs.get_data_home())
            }
        }
    }

    /// Open the store (creating its directory) and build the service.
    pub fn build_service(&self) -> Result<FetchVerifyService> {
        let dir = self.resolved_data_dir()?;
        let store = IntegrityStore::open(&dir, &self.file_name)
            .with_context(|| format!("failed to create data dir {}", dir.display()))?;
        Ok(
            FetchVerifyService::new(&self.remote_url, self.http.fetch_settings(), store)
                .with_persist_policy(self.persist),
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CkfetchConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<CkfetchConfig> {
    if !path.exists() {
        let default_cfg = CkfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CkfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
