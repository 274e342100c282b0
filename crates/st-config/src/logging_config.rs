use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// Log file name; stderr when unset
    pub file: Option<String>,
    /// Colored stderr output when stderr is a terminal (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a plain file name, got '{file}'"
            )));
        }

        Ok(())
    }

    /// Absolute log file path under `config_dir`, or `None` for stderr.
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file
            .as_ref()
            .map(|file| config_dir.join(&self.dir).join(file))
    }
}
