use crate::http::{build_url, execute};
use crate::{AuthTokenCache, ClientError, ClientResult};

use st_auth::{AuthError, IdentityProvider, Result as AuthErrorResult};
use st_core::{Credentials, Identity};

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
const SIGN_UP_PATH: &str = "/v1/accounts:signUp";

/// Error codes that mean "these credentials are wrong", as opposed to a
/// provider or configuration problem.
const INVALID_CREDENTIAL_CODES: [&str; 4] = [
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "USER_DISABLED",
];
const ACCOUNT_EXISTS_CODE: &str = "EMAIL_EXISTS";

/// Email/password client for the hosted identity REST service.
pub struct IdentityToolkitClient {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
    tokens: AuthTokenCache,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    id_token: String,
}

impl IdentityToolkitClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://identitytoolkit.googleapis.com")
    /// * `api_key` - Web API key, sent as the `key` query parameter
    /// * `tokens` - Cache that receives the ID token on successful sign-in
    pub fn new(base_url: &str, api_key: &str, tokens: AuthTokenCache) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &AuthTokenCache {
        &self.tokens
    }

    async fn authenticate(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> ClientResult<(Identity, String)> {
        let url = build_url(&self.base_url, path, &[("key", &self.api_key)])?;
        debug!("POST {}{}", self.base_url, path);

        let body = PasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
            return_secure_token: true,
        };

        let value = execute(self.client.post(url).json(&body)).await?;
        let account: AccountResponse = serde_json::from_value(value)?;

        let identity = Identity::new(account.local_id.as_str()).map_err(|e| {
            ClientError::api_error(200, "INVALID_LOCAL_ID".to_string(), e.to_string())
        })?;

        Ok((identity, account.id_token))
    }

    async fn authenticate_and_cache(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> AuthErrorResult<Identity> {
        let (identity, id_token) = self
            .authenticate(path, credentials)
            .await
            .map_err(|e| to_auth_error(e, credentials.email()))?;

        self.tokens.store(identity.clone(), id_token);
        Ok(identity)
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.authenticate_and_cache(SIGN_IN_PATH, credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthErrorResult<Identity> {
        self.authenticate_and_cache(SIGN_UP_PATH, credentials).await
    }

    fn sign_out(&self) {
        self.tokens.clear();
    }

    fn current_user(&self) -> Option<Identity> {
        self.tokens.identity()
    }
}

#[track_caller]
fn to_auth_error(error: ClientError, email: &str) -> AuthError {
    match error {
        ClientError::Api { code, .. } if INVALID_CREDENTIAL_CODES.contains(&code.as_str()) => {
            AuthError::invalid_credentials()
        }
        ClientError::Api { code, .. } if code == ACCOUNT_EXISTS_CODE => {
            AuthError::account_exists(email)
        }
        ClientError::Api { code, message, .. } => AuthError::provider(code, message),
        ClientError::Http { message, .. } => AuthError::transport(message),
        ClientError::Json { message, .. } => AuthError::provider("MALFORMED_RESPONSE", message),
        ClientError::Url { message, .. } => AuthError::provider("INVALID_URL", message),
    }
}
