use crate::http::{build_url, execute};
use crate::{AuthTokenCache, ClientError, ClientResult};

use st_db::{RecordPath, RecordStore, Result as StoreErrorResult, StoreError};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::{Map, Value};

/// REST client for the hosted realtime database.
///
/// `put` maps to HTTP `PUT` (replace) and `merge` to `PATCH` (update the
/// given children only), both against `{base_url}/{path}.json`.
pub struct RealtimeDbClient {
    base_url: String,
    client: ReqwestClient,
    tokens: AuthTokenCache,
}

impl RealtimeDbClient {
    pub fn new(base_url: &str, tokens: AuthTokenCache) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
            tokens,
        }
    }

    async fn write(
        &self,
        method: Method,
        path: &RecordPath,
        value: &Map<String, Value>,
    ) -> ClientResult<()> {
        let node = format!("/{path}.json");
        let token = self.tokens.id_token();
        let query: Vec<(&str, &str)> = token
            .as_deref()
            .map(|token| vec![("auth", token)])
            .unwrap_or_default();

        let url = build_url(&self.base_url, &node, &query)?;
        debug!("{method} {}{node}", self.base_url);

        execute(self.client.request(method, url).json(value)).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for RealtimeDbClient {
    async fn put(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()> {
        self.write(Method::PUT, path, &value)
            .await
            .map_err(|e| to_store_error(e, path))
    }

    async fn merge(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()> {
        self.write(Method::PATCH, path, &value)
            .await
            .map_err(|e| to_store_error(e, path))
    }
}

#[track_caller]
fn to_store_error(error: ClientError, path: &RecordPath) -> StoreError {
    match error {
        ClientError::Api {
            status, message, ..
        } => StoreError::rejected(path.as_str(), status, message),
        ClientError::Http { message, .. } => StoreError::transport(path.as_str(), message),
        ClientError::Json { message, .. } | ClientError::Url { message, .. } => {
            StoreError::write(path.as_str(), message)
        }
    }
}
