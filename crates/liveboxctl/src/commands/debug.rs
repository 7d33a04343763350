//! Hidden debugging commands: `lbx op` and `lbx notify`.

use livebox_core::SetTopBox;

use crate::cli::{GlobalOpts, OpArgs};
use crate::error::CliError;
use crate::output;

/// Send a raw operation code and dump the `data` payload.
pub async fn op(stb: &SetTopBox, args: &OpArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if args.operation.len() != 2 || !args.operation.chars().all(|c| c.is_ascii_digit()) {
        return Err(CliError::Validation {
            field: "operation".into(),
            reason: format!("expected a two-digit code, got '{}'", args.operation),
        });
    }

    let data = stb.raw_operation(&args.operation).await?;
    output::print_output(&output::render_json(&data), global.quiet);
    Ok(())
}

/// Long-poll the appliance for its next event and dump it.
pub async fn notify(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    let event = stb.event_notify().await?;
    output::print_output(&output::render_json(&event), global.quiet);
    Ok(())
}
