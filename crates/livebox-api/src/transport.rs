// Shared transport configuration for building reqwest::Client instances.
//
// Both the remote-control and directory clients share timeout and
// user-agent settings through this module. The appliance speaks plain
// HTTP on the LAN, so there is no TLS dimension here.

use std::time::Duration;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. The appliance answers within a few hundred
    /// milliseconds when reachable, so the bound is short.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("liveboxctl/0.1.0")
            .build()?;
        Ok(client)
    }
}
