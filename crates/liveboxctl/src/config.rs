//! CLI-owned configuration: a small TOML file merged with `LIVEBOX_*`
//! environment variables, then overridden by command-line flags.
//!
//! Core never sees these types -- it receives a pre-built `DeviceConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use livebox_core::DeviceConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// On-disk configuration. Every field is optional; flags and env
/// variables win over the file.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    /// Hostname or IP of the set-top box.
    pub hostname: Option<String>,

    /// Remote-control API port (default 8080).
    pub port: Option<u16>,

    /// Per-request timeout in seconds (default 3).
    pub timeout: Option<u64>,

    /// Catalog refresh interval in seconds (default 60).
    pub refresh_interval: Option<u64>,

    /// Channel directory endpoint override.
    pub directory_url: Option<Url>,
}

/// Path of the config file (`~/.config/liveboxctl/config.toml` on Linux).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "liveboxctl")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("liveboxctl.toml"))
}

/// Load the layered configuration: defaults < file < environment.
pub fn load() -> Result<FileConfig, CliError> {
    let config = Figment::from(Serialized::defaults(FileConfig::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("LIVEBOX_"))
        .extract()?;
    Ok(config)
}

/// Resolve the effective [`DeviceConfig`] from the file, environment,
/// and CLI flag overrides.
pub fn device_config(global: &GlobalOpts) -> Result<DeviceConfig, CliError> {
    let file = load()?;

    let hostname = global
        .hostname
        .clone()
        .or(file.hostname)
        .ok_or_else(|| CliError::NoHost {
            path: config_path().display().to_string(),
        })?;

    let mut config = DeviceConfig::new(hostname);
    if let Some(port) = global.port.or(file.port) {
        config.port = port;
    }
    if let Some(secs) = global.timeout.or(file.timeout) {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.refresh_interval {
        config.refresh_interval = Duration::from_secs(secs);
    }
    if let Some(url) = file.directory_url {
        config.directory_url = url;
    }
    Ok(config)
}
