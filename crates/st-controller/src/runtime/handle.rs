use super::commands::ControllerCommand;
use crate::{ActionOutcome, ControllerError, Result as ControllerResult, UiAction};

use st_core::{Credentials, Identity, ScreenState, SleepEvent};

use tokio::sync::{mpsc, oneshot, watch};

/// Cheap-to-clone handle to a running [`super::ControllerActor`].
///
/// Every method returns [`ControllerError::ChannelClosed`] once the actor
/// has stopped.
#[derive(Clone)]
pub struct ControllerHandle {
    sender: mpsc::Sender<ControllerCommand>,
    screen: watch::Receiver<ScreenState>,
}

impl ControllerHandle {
    pub fn new(sender: mpsc::Sender<ControllerCommand>, screen: watch::Receiver<ScreenState>) -> Self {
        Self { sender, screen }
    }

    pub async fn dispatch(&self, action: UiAction) -> ControllerResult<ActionOutcome> {
        let (tx, rx) = oneshot::channel();

        self.sender
            .send(ControllerCommand::Dispatch {
                action,
                respond_to: tx,
            })
            .await
            .map_err(|_| ControllerError::ChannelClosed)?;

        rx.await.map_err(|_| ControllerError::ChannelClosed)?
    }

    pub async fn select_register(&self) -> ControllerResult<ScreenState> {
        self.dispatch_for_screen(UiAction::SelectRegister).await
    }

    pub async fn select_back(&self) -> ControllerResult<ScreenState> {
        self.dispatch_for_screen(UiAction::SelectBack).await
    }

    pub async fn submit_login(&self, credentials: Credentials) -> ControllerResult<ScreenState> {
        self.dispatch_for_screen(UiAction::SubmitLogin(credentials))
            .await
    }

    pub async fn submit_register(&self, credentials: Credentials) -> ControllerResult<ScreenState> {
        self.dispatch_for_screen(UiAction::SubmitRegister(credentials))
            .await
    }

    pub async fn start_sleep(&self) -> ControllerResult<SleepEvent> {
        self.dispatch_for_event(UiAction::StartSleep).await
    }

    pub async fn stop_sleep(&self) -> ControllerResult<SleepEvent> {
        self.dispatch_for_event(UiAction::StopSleep).await
    }

    pub async fn logout(&self) -> ControllerResult<ScreenState> {
        self.dispatch_for_screen(UiAction::Logout).await
    }

    /// Screen as seen by the actor, after every earlier command finished.
    pub async fn screen(&self) -> ControllerResult<ScreenState> {
        self.query(|respond_to| ControllerCommand::GetScreen { respond_to })
            .await
    }

    pub async fn current_identity(&self) -> ControllerResult<Option<Identity>> {
        self.query(|respond_to| ControllerCommand::GetIdentity { respond_to })
            .await
    }

    pub async fn last_error(&self) -> ControllerResult<Option<String>> {
        self.query(|respond_to| ControllerCommand::GetLastError { respond_to })
            .await
    }

    /// Receiver that is notified whenever the active screen changes.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.screen.clone()
    }

    async fn dispatch_for_screen(&self, action: UiAction) -> ControllerResult<ScreenState> {
        let name = action.name();
        match self.dispatch(action).await? {
            ActionOutcome::ScreenChanged(screen) => Ok(screen),
            ActionOutcome::Recorded(_) => Err(ControllerError::unexpected_outcome(name)),
        }
    }

    async fn dispatch_for_event(&self, action: UiAction) -> ControllerResult<SleepEvent> {
        let name = action.name();
        match self.dispatch(action).await? {
            ActionOutcome::Recorded(event) => Ok(event),
            ActionOutcome::ScreenChanged(_) => Err(ControllerError::unexpected_outcome(name)),
        }
    }

    async fn query<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> ControllerCommand,
    ) -> ControllerResult<T> {
        let (tx, rx) = oneshot::channel();

        self.sender
            .send(command(tx))
            .await
            .map_err(|_| ControllerError::ChannelClosed)?;

        rx.await.map_err(|_| ControllerError::ChannelClosed)
    }
}
