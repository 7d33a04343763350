// Response types for the remote-control API and the channel directory.
//
// Every remote-control response is wrapped in the `RcEnvelope`. Fields use
// `#[serde(default)]` liberally because the appliance firmware is
// inconsistent about field presence across software versions.

use serde::{Deserialize, Deserializer, Serialize};

// ── Remote-control envelope ──────────────────────────────────────────

/// Standard remote-control API response envelope.
///
/// Every `remoteControl/cmd` call wraps its payload:
/// ```json
/// { "result": { "responseCode": "0", "message": "ok", "data": {...} } }
/// ```
#[derive(Debug, Deserialize)]
pub struct RcEnvelope {
    pub result: RcResult,
}

/// Result object from the envelope. `responseCode` == `"0"` means success.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcResult {
    pub response_code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

// ── Device status ────────────────────────────────────────────────────

/// Status snapshot from operation `10`.
///
/// The firmware reports everything as strings (`"0"` / `"1"` flags
/// included). We model the fields the facade consumes explicitly;
/// everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    /// `"0"` means the box is awake, `"1"` standby.
    #[serde(default)]
    pub active_standby_state: Option<String>,
    /// EPG identifier of the currently played channel, absent when the
    /// box is not on live TV.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub played_media_id: Option<String>,
    #[serde(default)]
    pub played_media_state: Option<String>,
    #[serde(default)]
    pub played_media_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub played_media_position: Option<String>,
    /// On-screen-display context (`LIVE`, `VOD`, `AdvPlayer`, ...).
    #[serde(default)]
    pub osd_context: Option<String>,
    #[serde(default)]
    pub time_shifting_state: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub wol_support: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeviceStatus {
    /// Whether the box is awake (out of standby).
    pub fn is_on(&self) -> bool {
        self.active_standby_state.as_deref() == Some("0")
    }
}

// ── Channel directory ────────────────────────────────────────────────

/// Top-level directory response: `{ "channels": { "channel": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    pub channels: ChannelList,
}

#[derive(Debug, Deserialize)]
pub struct ChannelList {
    #[serde(default)]
    pub channel: Vec<ChannelRecord>,
}

/// One channel record from the Orange directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    pub name: String,
    /// Display index as shown on the remote (`"2"` for France 2).
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub tv_index: Option<String>,
    /// The appliance-internal EPG identifier used for tuning.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub epg_id: Option<String>,
}

// ── Helpers ─────────────────────────────────────────────────────────

/// The directory emits identifiers sometimes as JSON strings, sometimes
/// as bare numbers. Accept both and normalize to `String`.
fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_with_missing_fields() {
        let status: DeviceStatus = serde_json::from_value(serde_json::json!({
            "activeStandbyState": "0",
            "osdContext": "LIVE"
        }))
        .expect("minimal status should parse");

        assert!(status.is_on());
        assert_eq!(status.osd_context.as_deref(), Some("LIVE"));
        assert!(status.played_media_id.is_none());
    }

    #[test]
    fn channel_record_accepts_numeric_ids() {
        let record: ChannelRecord = serde_json::from_value(serde_json::json!({
            "name": "France 2",
            "tvIndex": 2,
            "epgId": "192"
        }))
        .expect("record should parse");

        assert_eq!(record.tv_index.as_deref(), Some("2"));
        assert_eq!(record.epg_id.as_deref(), Some("192"));
    }
}
