use st_auth::AuthError;
use st_core::ScreenState;
use st_db::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("'{action}' is not available on the {screen} screen {location}")]
    InvalidAction {
        screen: ScreenState,
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("No user is signed in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("'{action}' produced an outcome of the wrong kind {location}")]
    UnexpectedOutcome {
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("Screen controller is no longer running")]
    ChannelClosed,
}

impl ControllerError {
    #[track_caller]
    pub fn invalid_action(screen: ScreenState, action: &'static str) -> Self {
        Self::InvalidAction {
            screen,
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_outcome(action: &'static str) -> Self {
        Self::UnexpectedOutcome {
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short message suitable for showing on screen (no source locations).
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidAction { screen, action, .. } => {
                format!("'{action}' is not available on the {screen} screen")
            }
            Self::NotAuthenticated { .. } => "Please log in first".to_string(),
            Self::Auth(AuthError::InvalidCredentials { .. }) => {
                "Invalid email or password".to_string()
            }
            Self::Auth(AuthError::AccountExists { email, .. }) => {
                format!("An account already exists for {email}")
            }
            Self::Auth(AuthError::Validation { .. }) => {
                "Email and password are required".to_string()
            }
            Self::Auth(AuthError::Provider { message, .. }) => message.clone(),
            Self::Auth(AuthError::Transport { .. }) => {
                "Could not reach the sign-in service".to_string()
            }
            Self::Store(e) if e.is_transient() => {
                "Could not save the sleep event, try again later".to_string()
            }
            Self::Store(StoreError::Rejected { message, .. })
            | Self::Store(StoreError::Write { message, .. })
            | Self::Store(StoreError::Transport { message, .. }) => {
                format!("Could not save the sleep event: {message}")
            }
            Self::UnexpectedOutcome { action, .. } => format!("'{action}' could not be completed"),
            Self::ChannelClosed => "The application is shutting down".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ControllerError>;
