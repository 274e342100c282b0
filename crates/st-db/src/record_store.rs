use crate::{RecordPath, Result as StoreErrorResult};

use async_trait::async_trait;
use serde_json::{Map, Value};

/// A hierarchical key/value store addressed by [`RecordPath`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Replace the node at `path` with `value`.
    async fn put(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()>;

    /// Write only the keys in `value`, leaving other fields at `path` intact.
    /// Creates the node if it does not exist.
    async fn merge(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()>;
}
