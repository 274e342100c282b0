mod backend_kind;
mod config;
mod database_config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use backend_kind::BackendKind;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "ST_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".sleeptracker";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const ALLOWED_URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// True when `url` starts with one of the accepted schemes and has a host part.
fn has_http_scheme(url: &str) -> bool {
    ALLOWED_URL_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme) && url.len() > scheme.len())
}
