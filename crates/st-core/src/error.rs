use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity '{value}': {message} {location}")]
    InvalidIdentity {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid screen state: {value} {location}")]
    InvalidScreenState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sleep event kind: {value} {location}")]
    InvalidSleepEventKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
