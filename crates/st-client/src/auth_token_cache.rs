use st_core::Identity;

use std::sync::{Arc, PoisonError, RwLock};

/// Signed-in user and ID token, shared between the identity and database
/// clients. Cloning shares the same slot.
#[derive(Clone, Default)]
pub struct AuthTokenCache {
    inner: Arc<RwLock<Option<CachedSession>>>,
}

#[derive(Clone)]
struct CachedSession {
    identity: Identity,
    id_token: String,
}

impl AuthTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, identity: Identity, id_token: String) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CachedSession { identity, id_token });
    }

    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read().map(|session| session.identity)
    }

    pub fn id_token(&self) -> Option<String> {
        self.read().map(|session| session.id_token)
    }

    fn read(&self) -> Option<CachedSession> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
