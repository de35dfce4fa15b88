//! RoboRover - drive a toy robot around a tabletop from the terminal.
//!
//! # Configuration
//!
//! Settings are merged from defaults, `roborover.toml` (or `--config`),
//! `ROBOROVER_WIDTH` / `ROBOROVER_HEIGHT`, and finally the flags below.
//! Log verbosity follows `--log-level`, else `RUST_LOG`, else `info`.

use anyhow::{Context, Result};
use clap::Parser;
use roborover::{RoverConfig, Session, TracingSink};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roborover")]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file path (default: ./roborover.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tabletop width in units (also: ROBOROVER_WIDTH)
    #[arg(long)]
    width: Option<u32>,

    /// Tabletop height in units (also: ROBOROVER_HEIGHT)
    #[arg(long)]
    height: Option<u32>,

    /// Do not print the input prompt
    #[arg(long)]
    no_prompt: bool,

    /// Log filter, e.g. "info" or "roborover=debug" (also: RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_ansi(io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

fn run(args: Args) -> Result<()> {
    init_tracing(args.log_level.as_deref())?;

    let mut config = RoverConfig::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.tabletop.width = width;
    }
    if let Some(height) = args.height {
        config.tabletop.height = height;
    }
    if args.no_prompt {
        config.prompt = false;
    }
    let bounds = config.bounds()?;

    let stdin = io::stdin();
    let prompt = config.prompt && stdin.is_terminal();
    let mut session = Session::new(bounds).with_prompt(prompt);
    let reason = session.run(stdin.lock(), io::stdout(), &mut TracingSink)?;
    tracing::debug!(?reason, "session finished");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
