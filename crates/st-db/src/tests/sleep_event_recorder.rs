use crate::tests::{T1, identity, stepping_clock};
use crate::{InMemoryRecordStore, RecordPath, SleepEventRecorder, StoreError};

use st_core::SleepEventKind;

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::{Value, json};

#[tokio::test]
async fn given_start_then_end_when_recorded_then_single_record_has_both_timestamps() {
    // Given
    let store = Arc::new(InMemoryRecordStore::new());
    let recorder = SleepEventRecorder::with_clock(store.clone(), stepping_clock());
    let user = identity("u1");

    // When
    let start = recorder.record_start(&user).await.unwrap();
    let end = recorder.record_end(&user).await.unwrap();

    // Then
    assert_that!(start.kind, eq(SleepEventKind::Start));
    assert_that!(end.kind, eq(SleepEventKind::End));
    assert_that!(start.timestamp_millis, eq(T1));
    assert_that!(end.timestamp_millis, eq(T1 + 3_600_000));

    let record = store.get(&RecordPath::for_user(&user)).await.unwrap();
    assert_that!(
        &Value::Object(record),
        eq(&json!({ "startTime": T1, "endTime": T1 + 3_600_000 }))
    );
    assert_that!(store.len().await, eq(1));
}

#[tokio::test]
async fn given_completed_session_when_start_again_then_previous_end_is_overwritten() {
    // Given
    let store = Arc::new(InMemoryRecordStore::new());
    let recorder = SleepEventRecorder::with_clock(store.clone(), stepping_clock());
    let user = identity("u1");
    recorder.record_start(&user).await.unwrap();
    recorder.record_end(&user).await.unwrap();

    // When
    let restart = recorder.record_start(&user).await.unwrap();

    // Then
    let record = store.get(&RecordPath::for_user(&user)).await.unwrap();
    assert_that!(
        &Value::Object(record),
        eq(&json!({ "startTime": restart.timestamp_millis }))
    );
}

#[tokio::test]
async fn given_no_start_when_end_recorded_then_end_only_record_is_accepted() {
    // Given
    let store = Arc::new(InMemoryRecordStore::new());
    let recorder = SleepEventRecorder::with_clock(store.clone(), stepping_clock());
    let user = identity("u1");

    // When
    let result = recorder.record_end(&user).await;

    // Then
    assert_that!(result, ok(anything()));
    let record = store.get(&RecordPath::for_user(&user)).await.unwrap();
    assert_that!(&Value::Object(record), eq(&json!({ "endTime": T1 })));
}

#[tokio::test]
async fn given_two_users_when_recording_then_records_are_separate() {
    let store = Arc::new(InMemoryRecordStore::new());
    let recorder = SleepEventRecorder::with_clock(store.clone(), stepping_clock());

    recorder.record_start(&identity("u1")).await.unwrap();
    recorder.record_start(&identity("u2")).await.unwrap();

    assert_that!(store.len().await, eq(2));
}

#[tokio::test]
async fn given_offline_store_when_record_start_then_store_error_is_returned() {
    // Given
    let store = Arc::new(InMemoryRecordStore::new());
    store.set_offline(true);
    let recorder = SleepEventRecorder::new(store.clone());

    // When
    let result = recorder.record_start(&identity("u1")).await;

    // Then
    assert!(matches!(result, Err(StoreError::Transport { .. })));
}

#[tokio::test]
async fn given_default_clock_when_recorded_then_timestamp_is_current() {
    let store = Arc::new(InMemoryRecordStore::new());
    let recorder = SleepEventRecorder::new(store);
    let before = chrono::Utc::now().timestamp_millis();

    let event = recorder.record_start(&identity("u1")).await.unwrap();

    assert_that!(event.timestamp_millis, ge(before));
}
