use crate::logger::{build_dispatch, use_colors};

use st_config::LogLevel;

use googletest::prelude::*;
use log::{Level, LevelFilter, Log, Record};
use tempfile::TempDir;

#[test]
fn given_redirected_stderr_when_colors_configured_then_colors_disabled() {
    assert_that!(use_colors(true, false), eq(false));
    assert_that!(use_colors(false, true), eq(false));
    assert_that!(use_colors(true, true), eq(true));
}

#[test]
fn given_log_file_when_records_logged_then_plain_lines_at_level_are_written() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sleep-tracker.log");
    let (_, logger) = build_dispatch(LogLevel(LevelFilter::Info), Some(&path), true)
        .unwrap()
        .into_log();

    // When
    logger.log(
        &Record::builder()
            .args(format_args!("Screen login -> register"))
            .level(Level::Info)
            .file(Some("screen_controller.rs"))
            .line(Some(7))
            .build(),
    );
    logger.log(
        &Record::builder()
            .args(format_args!("POST /v1/accounts:signUp"))
            .level(Level::Debug)
            .build(),
    );
    logger.flush();

    // Then
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_that!(
        contents,
        contains_substring("INFO] Screen login -> register [screen_controller.rs:7]")
    );
    assert_that!(contents, not(contains_substring("accounts:signUp")));
    assert_that!(contents, not(contains_substring("\u{1b}[")));
}
