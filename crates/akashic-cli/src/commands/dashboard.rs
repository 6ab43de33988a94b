use akashic_core::DashboardView;
use clap::Args;
use std::path::PathBuf;

use super::common::{load_config, load_timeline, parse_now};

#[derive(Args)]
pub struct DashboardArgs {
    /// JSON file with recorded time slices
    #[arg(long, value_name = "FILE")]
    log: PathBuf,
    /// Highlighted tag chip
    #[arg(long)]
    active: Option<String>,
    /// Evaluation time (RFC 3339, default: now)
    #[arg(long)]
    now: Option<String>,
    /// Config file (default: ~/.config/akashic/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run(args: DashboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let timeline = load_timeline(&args.log)?;
    let now = parse_now(args.now.as_deref())?;
    let view = DashboardView::build(&timeline, &config, now, args.active.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
