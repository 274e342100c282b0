use st_core::Credentials;

pub(crate) const SELECT_REGISTER: &str = "select_register";
pub(crate) const SELECT_BACK: &str = "select_back";
pub(crate) const SUBMIT_LOGIN: &str = "submit_login";
pub(crate) const SUBMIT_REGISTER: &str = "submit_register";
pub(crate) const START_SLEEP: &str = "start_sleep";
pub(crate) const STOP_SLEEP: &str = "stop_sleep";
pub(crate) const LOGOUT: &str = "logout";

/// Something the user did on the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectRegister,
    SelectBack,
    SubmitLogin(Credentials),
    SubmitRegister(Credentials),
    StartSleep,
    StopSleep,
    Logout,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectRegister => SELECT_REGISTER,
            Self::SelectBack => SELECT_BACK,
            Self::SubmitLogin(_) => SUBMIT_LOGIN,
            Self::SubmitRegister(_) => SUBMIT_REGISTER,
            Self::StartSleep => START_SLEEP,
            Self::StopSleep => STOP_SLEEP,
            Self::Logout => LOGOUT,
        }
    }
}
