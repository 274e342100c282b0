
use crate::ScreenController;

use st_auth::{InMemoryIdentityProvider, SessionStore};
use st_core::{Credentials, Identity};
use st_db::{Clock, InMemoryRecordStore, RecordPath, SleepEventRecorder};

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

pub(crate) const T1: i64 = 1_700_000_000_000;
pub(crate) const T2: i64 = T1 + 3_600_000;

pub(crate) struct Fixture {
    pub provider: Arc<InMemoryIdentityProvider>,
    pub store: Arc<InMemoryRecordStore>,
    pub controller: ScreenController,
}

impl Fixture {
    /// One known account (a@x.com / pw1 -> u1) and an empty store.
    pub fn new() -> Self {
        let provider = Arc::new(
            InMemoryIdentityProvider::new().with_account("a@x.com", "pw1", identity("u1")),
        );
        let store = Arc::new(InMemoryRecordStore::new());

        let session = SessionStore::new(provider.clone());
        let recorder = SleepEventRecorder::with_clock(store.clone(), stepping_clock());

        Self {
            provider,
            store,
            controller: ScreenController::new(session, recorder),
        }
    }

    /// Same as [`Fixture::new`] but already on the Dashboard as u1.
    pub async fn signed_in() -> Self {
        let mut fixture = Self::new();
        fixture
            .controller
            .submit_login(&credentials("a@x.com", "pw1"))
            .await
            .unwrap();
        fixture
    }

    pub async fn record_of(&self, value: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
        self.store.get(&RecordPath::for_user(&identity(value))).await
    }
}

pub(crate) fn identity(value: &str) -> Identity {
    Identity::new(value).unwrap()
}

pub(crate) fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password)
}

/// Clock that starts at T1 and advances one hour per reading.
pub(crate) fn stepping_clock() -> Clock {
    let next = Arc::new(AtomicI64::new(T1));
    Arc::new(move || {
        let millis = next.fetch_add(3_600_000, Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    })
}
