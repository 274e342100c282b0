//! sleep-tracker - record when you fall asleep and when you wake up
//!
//! # Examples
//!
//! ```bash
//! # Try it out with the in-memory backend
//! sleep-tracker --backend memory
//!
//! # Use the hosted services configured in ~/.sleeptracker/config.toml
//! ST_CONFIG_DIR=~/.sleeptracker sleep-tracker --backend remote
//! ```

use st_app::{AppResult, Cli, build_controller, logger, prompt};
use st_config::Config;
use st_controller::spawn_controller;

use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sleep-tracker: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Load and validate configuration
    let config_dir = cli.resolve_config_dir()?;
    let mut config = Config::load_from(&config_dir)?;
    cli.apply(&mut config);
    config.validate()?;

    let log_file = config.logging.file_path(&config_dir);
    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting sleep-tracker v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let handle = spawn_controller(build_controller(&config)?);

    prompt::run(&handle, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Shutting down");
    Ok(())
}
