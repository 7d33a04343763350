//! `lbx channel` and `lbx channels`.

use tabled::Tabled;

use livebox_core::{ChannelEntry, MatchKind, SetTopBox};

use crate::cli::{ChannelArgs, ChannelsArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ChannelRow {
    #[tabled(rename = "Index")]
    index: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "EPG id")]
    epg_id: String,
}

fn to_row(entry: &ChannelEntry) -> ChannelRow {
    ChannelRow {
        index: entry.index.clone(),
        name: entry.name.clone(),
        epg_id: entry.epg_id.clone(),
    }
}

/// Show the current channel, or tune when a token is given.
pub async fn channel(
    stb: &SetTopBox,
    args: ChannelArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.token {
        Some(token) => set(stb, &token, global).await,
        None => get(stb, global).await,
    }
}

async fn set(stb: &SetTopBox, token: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let resolved = stb.set_channel(token).await?;

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(&resolved),
        // Make it obvious when fuzzy matching picked something else
        // than what was typed.
        _ if resolved.kind == MatchKind::Fuzzy => {
            format!("tuned to {} (closest match for '{token}')", resolved.entry.name)
        }
        _ => format!("tuned to {}", resolved.entry.name),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}

async fn get(stb: &SetTopBox, global: &GlobalOpts) -> Result<(), CliError> {
    let name = stb.current_channel_name().await?;

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(&name),
        _ => name.unwrap_or_else(|| "unknown".to_owned()),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// List the full channel catalog.
pub async fn channels(
    stb: &SetTopBox,
    args: &ChannelsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let catalog = stb.catalog(args.refresh).await?;
    let entries: Vec<ChannelEntry> = catalog.iter().cloned().collect();

    let rendered = output::render_list(&global.output, &entries, to_row, |e| e.name.clone());
    output::print_output(&rendered, global.quiet);
    Ok(())
}
