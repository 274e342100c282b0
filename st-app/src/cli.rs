use st_config::{BackendKind, Config, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sleep-tracker")]
#[command(about = "Record when you go to sleep and when you wake up")]
#[command(version)]
pub struct Cli {
    /// Configuration directory (overrides ST_CONFIG_DIR)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Backend to use: memory or remote (overrides config.toml)
    #[arg(long)]
    pub backend: Option<BackendKind>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Resolve the configuration directory: flag > ST_CONFIG_DIR > ./.sleeptracker/
    pub fn resolve_config_dir(&self) -> st_config::ConfigErrorResult<PathBuf> {
        match &self.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => Config::config_dir(),
        }
    }

    /// Command-line flags win over both config.toml and ST_* variables.
    pub fn apply(&self, config: &mut Config) {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}
