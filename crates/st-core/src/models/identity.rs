use crate::{CoreError, CoreResult, FORBIDDEN_KEY_CHARS, MAX_IDENTITY_LENGTH};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Opaque reference to an authenticated user.
///
/// The value doubles as a record-store key segment, so it is checked once on
/// construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(Self::invalid(value, "identity cannot be empty"));
        }

        if value.len() > MAX_IDENTITY_LENGTH {
            return Err(Self::invalid(
                value,
                format!("identity exceeds {MAX_IDENTITY_LENGTH} characters"),
            ));
        }

        if let Some(c) = value.chars().find(|c| FORBIDDEN_KEY_CHARS.contains(c)) {
            return Err(Self::invalid(
                value,
                format!("identity cannot contain '{c}'"),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[track_caller]
    fn invalid(value: String, message: impl Into<String>) -> CoreError {
        CoreError::InvalidIdentity {
            value,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identity {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}
