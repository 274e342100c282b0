use crate::Result as AuthErrorResult;

use st_core::{Credentials, Identity};

use async_trait::async_trait;

/// An external service that can authenticate users and create accounts.
///
/// Implementations are injected into [`crate::SessionStore`]; the store never
/// reaches for a process-wide instance.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate an existing account.
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity>;

    /// Create a new account. Providers may also treat the new account as
    /// signed in.
    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity>;

    /// Forget the signed-in user locally. Never fails.
    fn sign_out(&self);

    fn current_user(&self) -> Option<Identity>;
}
