use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// Email/password pair held only for the duration of a login or register
/// attempt. Deliberately not serializable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email with surrounding whitespace removed.
    pub fn email(&self) -> &str {
        self.email.trim()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Reject obviously unusable input before a provider is contacted.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.email().is_empty() {
            return Err(CoreError::Validation {
                field: "email",
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.password.is_empty() {
            return Err(CoreError::Validation {
                field: "password",
                message: "password cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email())
            .field("password", &"<redacted>")
            .finish()
    }
}
