use crate::{AuthError, IdentityProvider, Result as AuthErrorResult};

use st_core::{Credentials, Identity};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

/// Identity provider that keeps accounts in process memory.
///
/// Emails are matched case-insensitively. New accounts get a random UUID
/// identity unless one is supplied through [`InMemoryIdentityProvider::with_account`].
#[derive(Default)]
pub struct InMemoryIdentityProvider {
    inner: Mutex<ProviderInner>,
}

#[derive(Default)]
struct ProviderInner {
    accounts: HashMap<String, Account>,
    current: Option<Identity>,
    offline: bool,
}

struct Account {
    password: String,
    identity: Identity,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with a fixed identity.
    pub fn with_account(self, email: &str, password: &str, identity: Identity) -> Self {
        self.lock().accounts.insert(
            normalize(email),
            Account {
                password: password.to_string(),
                identity,
            },
        );
        self
    }

    /// Simulate losing connectivity: every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }

    fn lock(&self) -> MutexGuard<'_, ProviderInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        let mut inner = self.lock();

        if inner.offline {
            return Err(AuthError::transport("in-memory provider is offline"));
        }

        let identity = match inner.accounts.get(&normalize(credentials.email())) {
            Some(account) if account.password == credentials.password() => {
                account.identity.clone()
            }
            _ => return Err(AuthError::invalid_credentials()),
        };

        debug!("In-memory sign-in for {identity}");
        inner.current = Some(identity.clone());
        Ok(identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        let mut inner = self.lock();

        if inner.offline {
            return Err(AuthError::transport("in-memory provider is offline"));
        }

        let key = normalize(credentials.email());
        if inner.accounts.contains_key(&key) {
            return Err(AuthError::account_exists(credentials.email()));
        }

        let identity = Identity::new(Uuid::new_v4().simple().to_string())?;
        inner.accounts.insert(
            key,
            Account {
                password: credentials.password().to_string(),
                identity: identity.clone(),
            },
        );

        debug!("In-memory account created for {identity}");
        inner.current = Some(identity.clone());
        Ok(identity)
    }

    fn sign_out(&self) {
        self.lock().current = None;
    }

    fn current_user(&self) -> Option<Identity> {
        self.lock().current.clone()
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
