//! Single-owner task around a [`ScreenController`].
//!
//! ```text
//! ControllerHandle --ControllerCommand (mpsc)--> ControllerActor
//!        ^                                           |
//!        +------------ ScreenState (watch) ----------+
//! ```
//!
//! Commands are applied one at a time, in the order they were sent, so the
//! completion of a login or a record write is always observed on the actor
//! before the next action starts.

use crate::ScreenController;

use tokio::sync::{mpsc, watch};

mod actor;
mod commands;
mod handle;

pub use actor::ControllerActor;
pub use commands::ControllerCommand;
pub use handle::ControllerHandle;

const COMMAND_BUFFER: usize = 32;

/// Move `controller` into a new tokio task and return a handle to it.
///
/// The task stops once every handle has been dropped.
pub fn spawn_controller(controller: ScreenController) -> ControllerHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
    let (screen_tx, screen_rx) = watch::channel(controller.screen());

    let actor = ControllerActor::new(cmd_rx, controller, screen_tx);
    tokio::spawn(actor.run());

    ControllerHandle::new(cmd_tx, screen_rx)
}
