use crate::{
    BackendKind, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, IdentityConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub identity: IdentityConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for ST_CONFIG_DIR env var, else use ./.sleeptracker/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ST_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] but with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ST_CONFIG_DIR env var > ./.sleeptracker/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.identity.validate(self.backend)?;
        self.database.validate(self.backend)?;
        self.logging.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  backend: {}", self.backend);

        if self.backend == BackendKind::Remote {
            info!(
                "  identity: {} (api key {})",
                self.identity.base_url(),
                if self.identity.api_key.is_some() {
                    "set"
                } else {
                    "missing"
                }
            );
            info!(
                "  database: {}",
                self.database.base_url().unwrap_or("<unset>")
            );
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_parse("ST_BACKEND", &mut self.backend);

        // Identity
        Self::apply_env_option_string("ST_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_string("ST_IDENTITY_AUTH_URL", &mut self.identity.auth_url);

        // Database
        Self::apply_env_option_string("ST_DATABASE_URL", &mut self.database.url);

        // Logging
        Self::apply_env_parse("ST_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ST_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ST_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
