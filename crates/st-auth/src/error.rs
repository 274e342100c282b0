use st_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("An account already exists for {email} {location}")]
    AccountExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {message} (code: {code}) {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the same request might succeed later. Informational only;
    /// nothing in the session layer retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::AccountExists { .. } => "ACCOUNT_EXISTS",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
