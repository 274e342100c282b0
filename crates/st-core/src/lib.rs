pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::credentials::Credentials;
pub use models::identity::Identity;
pub use models::screen_state::ScreenState;
pub use models::sleep_event::SleepEvent;
pub use models::sleep_event_kind::SleepEventKind;

pub use error_location::ErrorLocation;

/// Characters that cannot appear in a single record-store key segment.
pub const FORBIDDEN_KEY_CHARS: [char; 6] = ['/', '.', '#', '$', '[', ']'];

/// Upper bound on identity length accepted as a key segment.
pub const MAX_IDENTITY_LENGTH: usize = 128;
