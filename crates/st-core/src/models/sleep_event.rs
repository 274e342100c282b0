use crate::{Identity, SleepEventKind};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single "sleep started" or "sleep ended" marker.
///
/// Immutable once created; handed to the record store and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SleepEvent {
    pub identity: Identity,
    pub kind: SleepEventKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
}

impl SleepEvent {
    pub fn new(identity: Identity, kind: SleepEventKind, at: DateTime<Utc>) -> Self {
        Self {
            identity,
            kind,
            timestamp_millis: at.timestamp_millis(),
        }
    }

    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_millis)
    }

    /// The fields this event contributes to the user's record,
    /// e.g. `{"startTime": 1700000000000}`.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            self.kind.field_name().to_string(),
            Value::from(self.timestamp_millis),
        );
        fields
    }
}
