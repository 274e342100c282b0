use crate::ui_action::{
    SELECT_BACK, SELECT_REGISTER, START_SLEEP, STOP_SLEEP, SUBMIT_LOGIN, SUBMIT_REGISTER,
};
use crate::{ActionOutcome, ControllerError, Result as ControllerResult, UiAction};

use st_auth::SessionStore;
use st_core::{Credentials, Identity, ScreenState, SleepEvent, SleepEventKind};
use st_db::SleepEventRecorder;

use log::{info, warn};

/// Three-screen state machine in front of the session store and recorder.
///
/// Transitions:
/// - Login -> Register (select register), Register -> Login (select back)
/// - Login -> Dashboard when a login succeeds
/// - Register -> Login when a registration succeeds
/// - any screen -> Login on logout
///
/// Every other action is rejected with [`ControllerError::InvalidAction`].
/// A failed action never changes the screen; its message is kept in
/// [`ScreenController::last_error`] until the next successful action.
pub struct ScreenController {
    session: SessionStore,
    recorder: SleepEventRecorder,
    screen: ScreenState,
    last_error: Option<String>,
}

impl ScreenController {
    pub fn new(session: SessionStore, recorder: SleepEventRecorder) -> Self {
        Self {
            session,
            recorder,
            screen: ScreenState::default(),
            last_error: None,
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session.current_identity()
    }

    pub fn select_register(&mut self) -> ControllerResult<ScreenState> {
        let result = self
            .require(ScreenState::Login, SELECT_REGISTER)
            .map(|()| self.transition(ScreenState::Register));
        self.settle(result)
    }

    pub fn select_back(&mut self) -> ControllerResult<ScreenState> {
        let result = self
            .require(ScreenState::Register, SELECT_BACK)
            .map(|()| self.transition(ScreenState::Login));
        self.settle(result)
    }

    pub async fn submit_login(&mut self, credentials: &Credentials) -> ControllerResult<ScreenState> {
        let result = self.login(credentials).await;
        self.settle(result)
    }

    /// A successful registration returns to Login with nobody signed in.
    pub async fn submit_register(
        &mut self,
        credentials: &Credentials,
    ) -> ControllerResult<ScreenState> {
        let result = self.register(credentials).await;
        self.settle(result)
    }

    pub async fn start_sleep(&mut self) -> ControllerResult<SleepEvent> {
        let result = self.record(SleepEventKind::Start).await;
        self.settle(result)
    }

    pub async fn stop_sleep(&mut self) -> ControllerResult<SleepEvent> {
        let result = self.record(SleepEventKind::End).await;
        self.settle(result)
    }

    /// Accepted on every screen: clears the session and lands on Login.
    pub fn logout(&mut self) -> ControllerResult<ScreenState> {
        self.session.logout();
        let screen = self.transition(ScreenState::Login);
        self.settle(Ok(screen))
    }

    pub async fn handle(&mut self, action: UiAction) -> ControllerResult<ActionOutcome> {
        match action {
            UiAction::SelectRegister => self.select_register().map(ActionOutcome::ScreenChanged),
            UiAction::SelectBack => self.select_back().map(ActionOutcome::ScreenChanged),
            UiAction::SubmitLogin(credentials) => self
                .submit_login(&credentials)
                .await
                .map(ActionOutcome::ScreenChanged),
            UiAction::SubmitRegister(credentials) => self
                .submit_register(&credentials)
                .await
                .map(ActionOutcome::ScreenChanged),
            UiAction::StartSleep => self.start_sleep().await.map(ActionOutcome::Recorded),
            UiAction::StopSleep => self.stop_sleep().await.map(ActionOutcome::Recorded),
            UiAction::Logout => self.logout().map(ActionOutcome::ScreenChanged),
        }
    }

    async fn login(&mut self, credentials: &Credentials) -> ControllerResult<ScreenState> {
        self.require(ScreenState::Login, SUBMIT_LOGIN)?;
        self.session.login(credentials).await?;
        Ok(self.transition(ScreenState::Dashboard))
    }

    async fn register(&mut self, credentials: &Credentials) -> ControllerResult<ScreenState> {
        self.require(ScreenState::Register, SUBMIT_REGISTER)?;
        self.session.register(credentials).await?;
        self.session.logout();
        Ok(self.transition(ScreenState::Login))
    }

    async fn record(&self, kind: SleepEventKind) -> ControllerResult<SleepEvent> {
        let action = match kind {
            SleepEventKind::Start => START_SLEEP,
            SleepEventKind::End => STOP_SLEEP,
        };
        self.require(ScreenState::Dashboard, action)?;

        let identity = self
            .session
            .current_identity()
            .ok_or_else(ControllerError::not_authenticated)?;

        let event = match kind {
            SleepEventKind::Start => self.recorder.record_start(&identity).await?,
            SleepEventKind::End => self.recorder.record_end(&identity).await?,
        };

        Ok(event)
    }

    #[track_caller]
    fn require(&self, expected: ScreenState, action: &'static str) -> ControllerResult<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(ControllerError::invalid_action(self.screen, action))
        }
    }

    fn transition(&mut self, to: ScreenState) -> ScreenState {
        if self.screen != to {
            info!("Screen {} -> {}", self.screen, to);
            self.screen = to;
        }
        self.screen
    }

    fn settle<T>(&mut self, result: ControllerResult<T>) -> ControllerResult<T> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(e) => {
                warn!("Action rejected on {} screen: {e}", self.screen);
                self.last_error = Some(e.user_message());
            }
        }
        result
    }
}
