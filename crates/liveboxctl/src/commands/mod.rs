//! Command dispatch: bridges CLI args -> device facade -> output formatting.

pub mod channel;
pub mod debug;
pub mod keys;
pub mod power;
pub mod status;

use livebox_core::SetTopBox;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::status(stb, global).await,
        Command::State => status::state(stb, global).await,
        Command::On => power::on(stb, global).await,
        Command::Off => power::off(stb, global).await,
        Command::Key(args) => keys::key(stb, &args, global).await,
        Command::Vol(args) => keys::vol(stb, &args, global).await,
        Command::Channel(args) => channel::channel(stb, args, global).await,
        Command::Channels(args) => channel::channels(stb, &args, global).await,
        Command::Op(args) => debug::op(stb, &args, global).await,
        Command::Notify => debug::notify(stb, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
