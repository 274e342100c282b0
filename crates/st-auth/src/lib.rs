pub mod error;
pub mod identity_provider;
pub mod in_memory_provider;
pub mod session_store;

pub use error::{AuthError, Result};
pub use identity_provider::IdentityProvider;
pub use in_memory_provider::InMemoryIdentityProvider;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
