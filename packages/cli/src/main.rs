mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{echo, inspect, respond, EchoArgs, InspectArgs, RespondArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wavebridge_common::{BridgeConfig, CommonResult};

/// Wavebridge CLI - robot bundle inspector and responder
#[derive(Parser, Debug)]
#[command(name = "wavebridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to wavebridge.config.json in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the events and blip tree of an event bundle
    Inspect(InspectArgs),

    /// Open a bundle and close it without mutations
    Echo(EchoArgs),

    /// Apply mutations to a bundle and print the resulting operations
    Respond(RespondArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> CommonResult<BridgeConfig> {
    let config = match path {
        Some(path) => BridgeConfig::load_file(path)?,
        None => BridgeConfig::load(&std::env::current_dir()?)?,
    };
    tracing::debug!("Using config {:?}", config);
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_ref())
        .map_err(anyhow::Error::from)
        .and_then(|config| match cli.command {
            Command::Inspect(args) => inspect(args, &config),
            Command::Echo(args) => echo(args, &config),
            Command::Respond(args) => respond(args, &config),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
