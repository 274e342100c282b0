mod logger;
mod prompt;

use st_auth::{InMemoryIdentityProvider, SessionStore};
use st_controller::{ControllerHandle, ScreenController, spawn_controller};
use st_core::Identity;
use st_db::{InMemoryRecordStore, SleepEventRecorder};

use std::sync::Arc;

/// Running controller with one known account (a@x.com / pw1 -> u1).
pub(crate) fn spawn_with_alice() -> (ControllerHandle, Arc<InMemoryRecordStore>) {
    let provider = Arc::new(InMemoryIdentityProvider::new().with_account(
        "a@x.com",
        "pw1",
        Identity::new("u1").unwrap(),
    ));
    let store = Arc::new(InMemoryRecordStore::new());

    let controller = ScreenController::new(
        SessionStore::new(provider),
        SleepEventRecorder::new(store.clone()),
    );

    (spawn_controller(controller), store)
}
