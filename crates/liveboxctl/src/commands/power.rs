//! `lbx on` / `lbx off`.

use livebox_core::SetTopBox;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn on(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    stb.turn_on().await?;
    output::print_output("on", global.quiet);
    Ok(())
}

pub async fn off(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    stb.turn_off().await?;
    output::print_output("standby", global.quiet);
    Ok(())
}
