use thiserror::Error;

/// Top-level error type for the `livebox-api` crate.
///
/// Covers every failure mode across both API surfaces: the appliance's
/// remote-control endpoint and the Orange channel directory.
/// `livebox-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP status.
    #[error("HTTP {status} from {context}")]
    Status { status: u16, context: &'static str },

    // ── Remote-control API ──────────────────────────────────────────
    /// The appliance refused an operation (parsed from the
    /// `{result: {responseCode, message}}` envelope).
    #[error("Remote control refused operation {operation} (code {code}): {message}")]
    Command {
        operation: String,
        code: String,
        message: String,
    },

    /// No key with the given name or numeric code exists.
    #[error("No such key: {0}")]
    UnknownKey(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String, body: String },
}

impl Error {
    /// Returns `true` if the underlying transport timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the appliance (or directory host) could not be
    /// reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
