use crate::{BackendKind, ConfigError, ConfigErrorResult, has_http_scheme};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Root URL of the realtime database, e.g. `https://<project>.firebaseio.com`
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn validate(&self, backend: BackendKind) -> ConfigErrorResult<()> {
        if backend != BackendKind::Remote {
            return Ok(());
        }

        let Some(url) = self.url.as_deref() else {
            return Err(ConfigError::database(
                "database.url is required when backend = \"remote\"",
            ));
        };

        if !has_http_scheme(url) {
            return Err(ConfigError::database(format!(
                "database.url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }

    /// Database URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }
}
