use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which identity provider / record store pair the application is wired to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process provider and store; nothing leaves the machine.
    #[default]
    Memory,
    /// Hosted identity service and realtime database over HTTPS.
    Remote,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::config(format!(
                "backend must be 'memory' or 'remote', got '{other}'"
            ))),
        }
    }
}
