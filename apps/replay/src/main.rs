use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use shared::script::GestureScript;
use tracing::error;

mod config;
mod runner;

use config::{load_settings, Variant};

/// Replays a timed pan/rotate script against a gesture reactor and prints
/// one JSON line per start, tick and complete notification.
#[derive(Parser, Debug)]
#[command(name = "gesture-replay")]
struct Args {
    /// JSON gesture script.
    #[arg(long)]
    script: PathBuf,
    #[arg(long, default_value = "replay.toml")]
    config: PathBuf,
    #[arg(long, value_enum)]
    variant: Option<Variant>,
    #[arg(long)]
    tick_interval_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(variant) = args.variant {
        settings.variant = variant;
    }
    if let Some(ms) = args.tick_interval_ms {
        settings.tick_interval_ms = ms;
    }
    settings.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let raw = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script '{}'", args.script.display()))?;
    let script = GestureScript::from_json(&raw)
        .with_context(|| format!("invalid script '{}'", args.script.display()))?;

    runner::replay(
        &script,
        settings.variant,
        settings.tick_interval(),
        |event| match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => error!(%err, "replay: failed to encode event"),
        },
    )
    .await;

    Ok(())
}
