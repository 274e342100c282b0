pub mod error;
pub mod in_memory_store;
pub mod record_path;
pub mod record_store;
pub mod sleep_event_recorder;

pub use error::{Result, StoreError};
pub use in_memory_store::InMemoryRecordStore;
pub use record_path::RecordPath;
pub use record_store::RecordStore;
pub use sleep_event_recorder::{Clock, SleepEventRecorder};

#[cfg(test)]
mod tests;

/// Top-level node under which every user's sleep record lives.
pub const USERS_ROOT: &str = "users";
