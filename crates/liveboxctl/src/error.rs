//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use livebox_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Cannot reach the set-top box: {reason}")]
    #[diagnostic(
        code(lbx::device_unreachable),
        help(
            "Check that the decoder is powered and on the same network.\n\
             Pass --hostname (-H) or set LIVEBOX_HOST."
        )
    )]
    DeviceUnreachable { reason: String },

    #[error("Channel directory unavailable: {reason}")]
    #[diagnostic(
        code(lbx::directory_unavailable),
        help("The Orange channel directory could not be fetched. Retry later.")
    )]
    DirectoryUnavailable { reason: String },

    // ── Resolution ───────────────────────────────────────────────────

    #[error("No channel matches '{token}'")]
    #[diagnostic(
        code(lbx::channel_not_found),
        help("Run: lbx channels to see everything the directory knows about.")
    )]
    ChannelNotFound { token: String },

    #[error("No such key: {name}")]
    #[diagnostic(
        code(lbx::unknown_key),
        help(
            "Keys are named after the labels on the remote (POWER, VOL+, OK,\n\
             CH+, 0-9, ...) and raw scancodes are accepted too."
        )
    )]
    UnknownKey { name: String },

    // ── Device protocol ──────────────────────────────────────────────

    #[error("Command refused by the set-top box: {message}")]
    #[diagnostic(code(lbx::rejected))]
    Rejected { message: String },

    #[error("Malformed response from the device: {message}")]
    #[diagnostic(code(lbx::malformed))]
    Malformed { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No set-top box hostname configured")]
    #[diagnostic(
        code(lbx::no_host),
        help(
            "Pass --hostname (-H), set LIVEBOX_HOST, or add `hostname` to\n\
             the config file at: {path}"
        )
    )]
    NoHost { path: String },

    #[error(transparent)]
    #[diagnostic(code(lbx::config))]
    Config(Box<figment::Error>),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lbx::validation))]
    Validation { field: String, reason: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(lbx::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DeviceUnreachable { .. } | Self::DirectoryUnavailable { .. } => {
                exit_code::CONNECTION
            }
            Self::ChannelNotFound { .. } => exit_code::NOT_FOUND,
            Self::UnknownKey { .. } | Self::NoHost { .. } | Self::Validation { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UpstreamUnavailable { reason } => CliError::DirectoryUnavailable { reason },
            CoreError::ChannelNotFound { token } => CliError::ChannelNotFound { token },
            CoreError::DeviceUnreachable { reason } => CliError::DeviceUnreachable { reason },
            CoreError::MalformedResponse { message } => CliError::Malformed { message },
            CoreError::Rejected { message } => CliError::Rejected { message },
            CoreError::UnknownKey { name } => CliError::UnknownKey { name },
        }
    }
}
