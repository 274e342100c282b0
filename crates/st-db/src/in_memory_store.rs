use crate::{RecordPath, RecordStore, Result as StoreErrorResult, StoreError};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::debug;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Record store backed by a map from path to JSON object.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<RecordPath, Map<String, Value>>>,
    offline: AtomicBool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the node at `path`.
    pub async fn get(&self, path: &RecordPath) -> Option<Map<String, Value>> {
        self.records.read().await.get(path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Simulate losing connectivity: every write fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    #[track_caller]
    fn ensure_online(&self, path: &RecordPath) -> StoreErrorResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::transport(
                path.as_str(),
                "in-memory store is offline",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()> {
        self.ensure_online(path)?;

        self.records.write().await.insert(path.clone(), value);
        debug!("Replaced record at {path}");
        Ok(())
    }

    async fn merge(&self, path: &RecordPath, value: Map<String, Value>) -> StoreErrorResult<()> {
        self.ensure_online(path)?;

        let mut records = self.records.write().await;
        records.entry(path.clone()).or_default().extend(value);
        debug!("Merged into record at {path}");
        Ok(())
    }
}
