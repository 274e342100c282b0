use st_core::{ScreenState, SleepEvent};

/// Result of a successfully handled [`crate::UiAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The active screen is now this one (it may be unchanged).
    ScreenChanged(ScreenState),
    Recorded(SleepEvent),
}

impl ActionOutcome {
    pub fn screen(&self) -> Option<ScreenState> {
        match self {
            Self::ScreenChanged(screen) => Some(*screen),
            Self::Recorded(_) => None,
        }
    }
}
