//! `lbx key` and `lbx vol`.

use livebox_core::{KeyPressMode, RemoteKey, SetTopBox};

use crate::cli::{GlobalOpts, KeyArgs, VolArgs, VolCommand};
use crate::error::CliError;
use crate::output;

pub async fn key(stb: &SetTopBox, args: &KeyArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let key: RemoteKey = args.key.parse().map_err(|_| CliError::UnknownKey {
        name: args.key.clone(),
    })?;
    let mode = if args.long {
        KeyPressMode::Long
    } else {
        KeyPressMode::Single
    };

    stb.press_key(key, mode).await?;
    output::print_output(&format!("pressed {key}"), global.quiet);
    Ok(())
}

pub async fn vol(stb: &SetTopBox, args: &VolArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let label = match args.direction {
        VolCommand::Up => {
            stb.volume_up().await?;
            "volume up"
        }
        VolCommand::Down => {
            stb.volume_down().await?;
            "volume down"
        }
        VolCommand::Mute => {
            stb.mute().await?;
            "mute toggled"
        }
    };
    output::print_output(label, global.quiet);
    Ok(())
}
