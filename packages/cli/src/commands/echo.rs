use super::emit;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use wavebridge_common::BridgeConfig;
use wavebridge_editor::process;

#[derive(Args, Debug)]
pub struct EchoArgs {
    /// Event bundle JSON file
    pub input: PathBuf,

    /// Write the operation bundle here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the operation bundle
    #[arg(short, long)]
    pub pretty: bool,
}

/// Open and immediately close a bundle
pub fn echo(args: EchoArgs, config: &BridgeConfig) -> Result<()> {
    let input = std::fs::read(&args.input).with_context(|| format!("Cannot read {}", args.input.display()))?;

    let mut received = 0;
    let bytes = process(config, &input, |_, events| received = events.len())
        .map_err(|err| {
            tracing::warn!("Rejected bundle {}: {}", args.input.display(), err);
            err
        })
        .with_context(|| format!("Cannot process {}", args.input.display()))?;

    eprintln!("{} {} events, no mutations", "Echoed".green().bold(), received);
    emit(bytes, args.output.as_deref(), args.pretty)
}
