//! `lbx status` and `lbx state`.

use tabled::{Table, Tabled, settings::Style};

use livebox_core::{DeviceStatus, SetTopBox};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Full status snapshot.
pub async fn status(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    let status = stb.status().await?;
    let rendered = output::render_single(&global.output, &status, detail, |s| {
        power_word(s).to_owned()
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// One word: `on` or `standby`.
pub async fn state(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    let status = stb.status().await?;
    output::print_output(power_word(&status), global.quiet);
    Ok(())
}

fn power_word(status: &DeviceStatus) -> &'static str {
    if status.is_on() { "on" } else { "standby" }
}

fn detail(status: &DeviceStatus) -> String {
    let dash = || "-".to_owned();
    let rows = vec![
        StatusRow {
            field: "power",
            value: power_word(status).to_owned(),
        },
        StatusRow {
            field: "channel id",
            value: status.played_media_id.clone().unwrap_or_else(dash),
        },
        StatusRow {
            field: "media state",
            value: status.played_media_state.clone().unwrap_or_else(dash),
        },
        StatusRow {
            field: "osd context",
            value: status.osd_context.clone().unwrap_or_else(dash),
        },
        StatusRow {
            field: "timeshift",
            value: status.time_shifting_state.clone().unwrap_or_else(dash),
        },
        StatusRow {
            field: "name",
            value: status.friendly_name.clone().unwrap_or_else(dash),
        },
        StatusRow {
            field: "mac",
            value: status.mac_address.clone().unwrap_or_else(dash),
        },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}
