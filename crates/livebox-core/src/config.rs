// Device configuration.

use std::time::Duration;

use url::Url;

use livebox_api::DEFAULT_DIRECTORY_URL;

use crate::catalog::DEFAULT_REFRESH_INTERVAL;

/// Everything needed to talk to one set-top box.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Hostname or IP address of the appliance on the LAN.
    pub hostname: String,
    /// Remote-control API port.
    pub port: u16,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Minimum age before the channel catalog is re-fetched.
    pub refresh_interval: Duration,
    /// Channel directory endpoint (overridable for tests / mirrors).
    pub directory_url: Url,
}

impl DeviceConfig {
    /// Config with the appliance defaults: port 8080, 3 s timeout,
    /// 60 s catalog refresh, the public Orange directory.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: 8080,
            timeout: Duration::from_secs(3),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            directory_url: Url::parse(DEFAULT_DIRECTORY_URL)
                .expect("default directory URL is valid"),
        }
    }
}
