use crate::{ActionOutcome, Result as ControllerResult, UiAction};

use st_core::{Identity, ScreenState};

use tokio::sync::oneshot;

/// Messages accepted by [`super::ControllerActor`]. Each carries the
/// channel its answer is sent back on.
#[derive(Debug)]
pub enum ControllerCommand {
    Dispatch {
        action: UiAction,
        respond_to: oneshot::Sender<ControllerResult<ActionOutcome>>,
    },

    GetScreen {
        respond_to: oneshot::Sender<ScreenState>,
    },

    GetIdentity {
        respond_to: oneshot::Sender<Option<Identity>>,
    },

    GetLastError {
        respond_to: oneshot::Sender<Option<String>>,
    },
}
