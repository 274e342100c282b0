use crate::{AuthError, IdentityProvider, Result as AuthErrorResult};

use st_core::{Credentials, Identity};

use std::sync::Arc;

use log::{info, warn};

/// Holds the identity of the signed-in user, if any.
///
/// The identity changes only when the provider reports success, or when
/// [`SessionStore::logout`] clears it.
pub struct SessionStore {
    provider: Arc<dyn IdentityProvider>,
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            current: None,
        }
    }

    pub async fn login(&mut self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        credentials.validate().map_err(AuthError::from)?;

        match self.provider.sign_in(credentials).await {
            Ok(identity) => {
                info!("Signed in as {identity}");
                self.current = Some(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                warn!("Sign-in rejected ({}): {e}", e.error_code());
                Err(e)
            }
        }
    }

    pub async fn register(&mut self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        credentials.validate().map_err(AuthError::from)?;

        match self.provider.sign_up(credentials).await {
            Ok(identity) => {
                info!("Registered account {identity}");
                self.current = Some(identity.clone());
                Ok(identity)
            }
            Err(e) => {
                warn!("Registration rejected ({}): {e}", e.error_code());
                Err(e)
            }
        }
    }

    /// Clear the current identity. Succeeds locally even if the provider
    /// has no session to end.
    pub fn logout(&mut self) {
        self.provider.sign_out();

        if let Some(identity) = self.current.take() {
            info!("Signed out {identity}");
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.current.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
