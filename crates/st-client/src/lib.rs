//! HTTP adapters for the hosted identity service and realtime database.
//!
//! [`IdentityToolkitClient`] implements [`st_auth::IdentityProvider`] and
//! [`RealtimeDbClient`] implements [`st_db::RecordStore`]. Both share an
//! [`AuthTokenCache`] so database writes carry the signed-in user's token.

pub(crate) mod auth_token_cache;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod identity_toolkit_client;
pub(crate) mod realtime_db_client;

pub use auth_token_cache::AuthTokenCache;
pub use error::{ClientError, Result as ClientResult};
pub use identity_toolkit_client::IdentityToolkitClient;
pub use realtime_db_client::RealtimeDbClient;
