use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Write to '{path}' failed: {message} {location}")]
    Write {
        path: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store rejected write to '{path}' (status {status}): {message} {location}")]
    Rejected {
        path: String,
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store unreachable while writing '{path}': {message} {location}")]
    Transport {
        path: String,
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(path: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            path: path.into(),
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the same write might succeed later. Informational only;
    /// the recorder never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Write { .. } => false,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Write { path, .. } | Self::Rejected { path, .. } | Self::Transport { path, .. } => {
                path
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
