mod commands;
mod config;
mod input;
mod shutdown;
mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "padcode")]
#[command(about = "Recognize game pad input sequences")]
struct Args {
    #[arg(short, long, default_value = "padcode.toml")]
    config: PathBuf,

    /// Override the configured sequence, e.g. "UP,UP,DOWN,B+A"
    #[arg(short, long, env = "PADCODE_SEQUENCE")]
    sequence: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Enter the sequence on the keyboard (default)
    Watch,
    /// Feed a recorded input script through the recognizer
    Replay {
        script: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List pad buttons and the keys bound to them
    Buttons,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("padcode=info".parse()?))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    match args.command.unwrap_or(Command::Watch) {
        Command::Watch => commands::watch::run(&config),
        Command::Replay { script, json } => commands::replay::run(&config, &script, json),
        Command::Buttons => commands::buttons::run(&config),
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if args.config.exists() {
        let config = Config::load(&args.config)?;
        info!("Loaded config from {:?}", args.config);
        config
    } else {
        warn!("Config {:?} not found, using defaults", args.config);
        Config::default()
    };

    if let Some(sequence) = &args.sequence {
        config.override_sequence(sequence)?;
        debug!("Sequence overridden: {} steps", config.sequence.len());
    }

    Ok(config)
}
