use crate::{RecordPath, RecordStore, Result as StoreErrorResult};

use st_core::{Identity, SleepEvent, SleepEventKind};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};

/// Source of "now" for event timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Writes sleep start/end markers to the user's record.
///
/// Stateless: it does not check that a start precedes an end, and nothing is
/// kept after the store accepts the write.
pub struct SleepEventRecorder {
    store: Arc<dyn RecordStore>,
    clock: Clock,
}

impl SleepEventRecorder {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_clock(store, Arc::new(Utc::now))
    }

    pub fn with_clock(store: Arc<dyn RecordStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Overwrite the user's record with `{startTime: now}`.
    pub async fn record_start(&self, identity: &Identity) -> StoreErrorResult<SleepEvent> {
        self.record(identity, SleepEventKind::Start).await
    }

    /// Merge `{endTime: now}` into the user's record.
    pub async fn record_end(&self, identity: &Identity) -> StoreErrorResult<SleepEvent> {
        self.record(identity, SleepEventKind::End).await
    }

    async fn record(
        &self,
        identity: &Identity,
        kind: SleepEventKind,
    ) -> StoreErrorResult<SleepEvent> {
        let event = SleepEvent::new(identity.clone(), kind, (self.clock)());
        let path = RecordPath::for_user(identity);

        let result = match kind {
            SleepEventKind::Start => self.store.put(&path, event.to_fields()).await,
            SleepEventKind::End => self.store.merge(&path, event.to_fields()).await,
        };

        match result {
            Ok(()) => {
                info!(
                    "Recorded sleep {} at {} for {path}",
                    event.kind, event.timestamp_millis
                );
                Ok(event)
            }
            Err(e) => {
                warn!("Failed to record sleep {kind} for {path}: {e}");
                Err(e)
            }
        }
    }
}
