//! Clap derive structures for the `lbx` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap + clap_complete so build.rs can include it.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lbx -- remote-control CLI for the Livebox Play TV set-top box
#[derive(Debug, Parser)]
#[command(
    name = "lbx",
    version,
    about = "Control a Livebox Play TV set-top box from the command line",
    long_about = "Drives the local HTTP remote-control API of an Orange Livebox Play\n\
        TV decoder: tune channels by name or number, press remote keys,\n\
        manage power and volume.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Hostname or IP of the set-top box
    #[arg(long, short = 'H', env = "LIVEBOX_HOST", global = true)]
    pub hostname: Option<String>,

    /// Remote-control API port
    #[arg(long, env = "LIVEBOX_PORT", global = true)]
    pub port: Option<u16>,

    /// Output format
    #[arg(long, short = 'o', env = "LIVEBOX_OUTPUT", default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, env = "LIVEBOX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the full device status
    #[command(alias = "st")]
    Status,

    /// Print whether the box is on or in standby
    State,

    /// Wake the box from standby
    On,

    /// Put the box in standby
    Off,

    /// Press a key on the virtual remote (label or scancode)
    Key(KeyArgs),

    /// Adjust the volume
    Vol(VolArgs),

    /// Show or change the current channel
    #[command(alias = "ch")]
    Channel(ChannelArgs),

    /// List all channels known to the directory
    Channels(ChannelsArgs),

    /// Send a raw remote-control operation (debugging)
    #[command(hide = true)]
    Op(OpArgs),

    /// Block until the box reports its next event (debugging)
    #[command(hide = true)]
    Notify,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-command arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Key label as printed on the remote (POWER, VOL+, OK, 0-9, ...)
    /// or a raw numeric scancode
    pub key: String,

    /// Send a long press (hold) instead of a single press
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Args)]
pub struct VolArgs {
    #[command(subcommand)]
    pub direction: VolCommand,
}

#[derive(Debug, Subcommand)]
pub enum VolCommand {
    /// Volume up one step
    Up,
    /// Volume down one step
    Down,
    /// Toggle mute
    Mute,
}

#[derive(Debug, Args)]
pub struct ChannelArgs {
    /// Channel name, `#index`, or an approximation of the name.
    /// Omit to print the channel currently on screen.
    pub token: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChannelsArgs {
    /// Bypass the cache and re-fetch the directory
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Debug, Args)]
pub struct OpArgs {
    /// Two-digit operation code (e.g. `10` for status)
    pub operation: String,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
