//! Screen selection for the sleep tracker.
//!
//! [`ScreenController`] decides which of the Login, Register and Dashboard
//! screens is active and routes user actions to the session store and the
//! sleep event recorder. [`spawn_controller`] moves a controller into its own
//! task so every action is applied in order on a single owner.

pub mod action_outcome;
pub mod error;
pub mod runtime;
pub mod screen_controller;
pub mod ui_action;

pub use action_outcome::ActionOutcome;
pub use error::{ControllerError, Result};
pub use runtime::{ControllerActor, ControllerCommand, ControllerHandle, spawn_controller};
pub use screen_controller::ScreenController;
pub use ui_action::UiAction;

#[cfg(test)]
mod tests;
