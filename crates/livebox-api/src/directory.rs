// Orange channel-directory client
//
// The directory is a fixed public endpoint returning the full channel
// list (name, tvIndex, epgId) in one JSON document. It is consumed
// wholesale by `livebox-core`'s catalog store; no pagination, no auth.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ChannelRecord, DirectoryResponse};
use crate::transport::TransportConfig;

/// The public Orange rendezvous endpoint serving the channel list.
pub const DEFAULT_DIRECTORY_URL: &str =
    "http://lsm-rendezvous040413.orange.fr/API/?output=json&withChannels=1";

/// HTTP client for the Orange channel directory.
pub struct DirectoryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl DirectoryClient {
    /// Create a client for the given endpoint (use
    /// [`DEFAULT_DIRECTORY_URL`] outside of tests).
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Fetch the complete channel list.
    ///
    /// Records without an `epgId` are dropped here -- they cannot be
    /// tuned to and would only pollute resolution.
    pub async fn fetch_channels(&self) -> Result<Vec<ChannelRecord>, Error> {
        debug!(endpoint = %self.endpoint, "fetching channel directory");

        let resp = self.http.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                context: "channel directory",
            });
        }

        let body = resp.text().await?;
        let parsed: DirectoryResponse =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
                message: e.to_string(),
                body,
            })?;

        let records: Vec<ChannelRecord> = parsed
            .channels
            .channel
            .into_iter()
            .filter(|r| r.epg_id.is_some())
            .collect();
        debug!(count = records.len(), "channel directory fetched");
        Ok(records)
    }
}
