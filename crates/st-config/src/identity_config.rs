use crate::{BackendKind, ConfigError, ConfigErrorResult, DEFAULT_AUTH_URL, has_http_scheme};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Web API key sent as the `key` query parameter. Never logged.
    pub api_key: Option<String>,
    /// Base URL of the identity REST service
    pub auth_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_url: String::from(DEFAULT_AUTH_URL),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self, backend: BackendKind) -> ConfigErrorResult<()> {
        if backend != BackendKind::Remote {
            return Ok(());
        }

        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(ConfigError::identity(
                    "identity.api_key is required when backend = \"remote\"",
                ));
            }
            Some(_) => {}
        }

        if !has_http_scheme(&self.auth_url) {
            return Err(ConfigError::identity(format!(
                "identity.auth_url must start with http:// or https://, got '{}'",
                self.auth_url
            )));
        }

        Ok(())
    }

    /// Auth URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.auth_url.trim_end_matches('/')
    }
}
