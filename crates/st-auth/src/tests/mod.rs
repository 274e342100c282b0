
use crate::InMemoryIdentityProvider;

use st_core::{Credentials, Identity};

use std::sync::Arc;

pub(crate) fn identity(value: &str) -> Identity {
    Identity::new(value).unwrap()
}

pub(crate) fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password)
}

/// Provider with a single known account: a@x.com / pw1 -> u1
pub(crate) fn provider_with_alice() -> Arc<InMemoryIdentityProvider> {
    Arc::new(InMemoryIdentityProvider::new().with_account("a@x.com", "pw1", identity("u1")))
}
