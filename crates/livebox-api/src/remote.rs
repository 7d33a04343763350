// Remote-control HTTP client
//
// Wraps `reqwest::Client` with appliance-specific URL construction and
// envelope unwrapping. Every operation is a GET against
// `/remoteControl/cmd` with an `operation` parameter; the response is a
// `{ result: { responseCode, message, data } }` envelope.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::keys::{KeyPressMode, RemoteKey};
use crate::models::{DeviceStatus, RcEnvelope};
use crate::transport::TransportConfig;

/// Operation codes understood by the firmware.
mod operation {
    pub const KEY_PRESS: &str = "01";
    pub const TUNE: &str = "09";
    pub const STATUS: &str = "10";
}

/// Raw HTTP client for the set-top box's `remoteControl` API.
///
/// Handles envelope unwrapping and the firmware's format quirks. All
/// methods return unwrapped `data` payloads -- the envelope is stripped
/// before the caller sees it.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RemoteClient {
    /// Create a new client for the appliance at `host:port`.
    pub fn new(host: &str, port: u16, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{host}:{port}/"))?;
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The appliance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Send an arbitrary operation with extra query parameters and
    /// return the unwrapped `data` payload.
    pub async fn operation(
        &self,
        op: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, Error> {
        let url = self.cmd_url()?;
        debug!(operation = op, ?params, "remote-control request");

        let resp = self
            .http
            .get(url)
            .query(&[("operation", op)])
            .query(params)
            .send()
            .await?;

        self.parse_envelope(op, resp).await
    }

    /// Fetch the device status snapshot (operation `10`).
    pub async fn status(&self) -> Result<DeviceStatus, Error> {
        let data = self.operation(operation::STATUS, &[]).await?;
        serde_json::from_value(data.clone()).map_err(|e| Error::MalformedResponse {
            message: e.to_string(),
            body: data.to_string(),
        })
    }

    /// Press a key on the virtual remote (operation `01`).
    pub async fn press_key(&self, key: RemoteKey, mode: KeyPressMode) -> Result<(), Error> {
        debug!(key = %key, mode = mode.code(), "press key");
        self.operation(
            operation::KEY_PRESS,
            &[
                ("key", key.code().to_string()),
                ("mode", mode.code().to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    /// Tune to an EPG identifier (operation `09`).
    ///
    /// `epg_id` must already be in wire format (10 chars, `*`-padded).
    /// The query is assembled by hand because the firmware rejects a
    /// percent-escaped `*` filler, which is exactly what the generic
    /// pair encoder would produce.
    pub async fn tune(&self, epg_id: &str) -> Result<(), Error> {
        let mut url = self.cmd_url()?;
        url.set_query(Some(&format!(
            "operation={}&epg_id={epg_id}&uui=1",
            operation::TUNE
        )));
        debug!(epg_id, "tune");

        let resp = self.http.get(url).send().await?;
        self.parse_envelope(operation::TUNE, resp).await?;
        Ok(())
    }

    /// Block until the appliance reports an event (`notifyEvent`).
    ///
    /// Long-polling debug aid; the response shape is undocumented, so the
    /// raw JSON is returned as-is.
    pub async fn event_notify(&self) -> Result<serde_json::Value, Error> {
        let url = self.base_url.join("remoteControl/notifyEvent")?;
        debug!(%url, "waiting for event");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                context: "notifyEvent",
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
            message: e.to_string(),
            body,
        })
    }

    // ── Internals ────────────────────────────────────────────────────

    fn cmd_url(&self) -> Result<Url, Error> {
        Ok(self.base_url.join("remoteControl/cmd")?)
    }

    /// Parse the `{ result }` envelope, returning `data` on success or an
    /// `Error::Command` if `responseCode != "0"`.
    async fn parse_envelope(
        &self,
        op: &str,
        resp: reqwest::Response,
    ) -> Result<serde_json::Value, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                context: "remoteControl/cmd",
            });
        }

        let body = resp.text().await?;
        let envelope: RcEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if envelope.result.response_code != "0" {
            return Err(Error::Command {
                operation: op.to_owned(),
                code: envelope.result.response_code,
                message: envelope
                    .result
                    .message
                    .unwrap_or_else(|| "no message".to_owned()),
            });
        }
        Ok(envelope.result.data)
    }
}
