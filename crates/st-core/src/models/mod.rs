pub mod credentials;
pub mod identity;
pub mod screen_state;
pub mod sleep_event;
pub mod sleep_event_kind;
