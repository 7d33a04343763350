// ── Core error types ──
//
// User-facing errors from livebox-core. These are NOT transport-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<livebox_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// The taxonomy distinguishes "nothing matched" from "network/device
/// problem" from "catalog unavailable", so callers can pick the right
/// remediation (correct input vs. check connectivity vs. retry later).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The channel directory could not be fetched and no previous
    /// snapshot exists to fall back on.
    #[error("Channel directory unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    /// No catalog entry matched the supplied token.
    #[error("No channel matches '{token}'")]
    ChannelNotFound { token: String },

    /// The set-top box could not be reached.
    #[error("Cannot reach the set-top box: {reason}")]
    DeviceUnreachable { reason: String },

    /// The appliance (or directory) answered with something we could
    /// not parse.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The appliance accepted the request but refused the command.
    #[error("Command refused by the set-top box: {message}")]
    Rejected { message: String },

    /// No key with the given name or scancode exists.
    #[error("No such key: {name}")]
    UnknownKey { name: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<livebox_api::Error> for CoreError {
    fn from(err: livebox_api::Error) -> Self {
        match err {
            livebox_api::Error::Transport(e) => CoreError::DeviceUnreachable {
                reason: e.to_string(),
            },
            livebox_api::Error::InvalidUrl(e) => CoreError::DeviceUnreachable {
                reason: format!("invalid URL: {e}"),
            },
            livebox_api::Error::Status { status, context } => CoreError::DeviceUnreachable {
                reason: format!("HTTP {status} from {context}"),
            },
            livebox_api::Error::Command {
                operation,
                code,
                message,
            } => CoreError::Rejected {
                message: format!("operation {operation} failed with code {code}: {message}"),
            },
            livebox_api::Error::UnknownKey(name) => CoreError::UnknownKey { name },
            livebox_api::Error::MalformedResponse { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}

impl CoreError {
    /// Wrap a directory fetch failure. Used by the catalog store, where
    /// the same transport errors mean "upstream", not "device".
    pub(crate) fn upstream(err: &livebox_api::Error) -> Self {
        CoreError::UpstreamUnavailable {
            reason: err.to_string(),
        }
    }
}
