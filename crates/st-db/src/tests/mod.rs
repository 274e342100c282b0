mod sleep_event_recorder;

use crate::Clock;

use st_core::Identity;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

pub(crate) const T1: i64 = 1_700_000_000_000;

pub(crate) fn identity(value: &str) -> Identity {
    Identity::new(value).unwrap()
}

/// Clock that starts at T1 and advances one hour per reading.
pub(crate) fn stepping_clock() -> Clock {
    let next = Arc::new(AtomicI64::new(T1));
    Arc::new(move || {
        let millis = next.fetch_add(3_600_000, Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    })
}
