use crate::prompt;
use crate::tests::spawn_with_alice;

use st_core::Identity;
use st_db::RecordPath;

use googletest::prelude::*;

async fn run_script(script: &str) -> String {
    let (handle, _) = spawn_with_alice();
    let mut output = Vec::new();

    prompt::run(&handle, script.as_bytes(), &mut output)
        .await
        .unwrap();

    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn given_full_session_script_when_run_then_screens_and_records_are_reported() {
    // Given
    let (handle, store) = spawn_with_alice();
    let script = "login a@x.com pw1\nstart\nstop\nlogout\nquit\n";
    let mut output = Vec::new();

    // When
    prompt::run(&handle, script.as_bytes(), &mut output)
        .await
        .unwrap();

    // Then
    let output = String::from_utf8(output).unwrap();
    assert_that!(output, contains_substring("screen: dashboard"));
    assert_that!(output, contains_substring("recorded sleep start at"));
    assert_that!(output, contains_substring("recorded sleep end at"));
    assert_that!(output, contains_substring("screen: login"));

    let record = store
        .get(&RecordPath::for_user(&Identity::new("u1").unwrap()))
        .await
        .unwrap();
    assert_that!(record.len(), eq(2));
}

#[tokio::test]
async fn given_wrong_password_when_run_then_error_and_prompt_stays_on_login() {
    // When
    let output = run_script("login a@x.com nope\nscreen\n").await;

    // Then
    assert_that!(output, contains_substring("error: Invalid email or password"));
    assert_that!(output, contains_substring("screen: login"));
    assert_that!(output, not(contains_substring("dashboard")));
}

#[tokio::test]
async fn given_start_before_login_when_run_then_action_rejected() {
    // When
    let output = run_script("start\n").await;

    // Then
    assert_that!(
        output,
        contains_substring("error: 'start_sleep' is not available on the login screen")
    );
}

#[tokio::test]
async fn given_bad_command_when_run_then_loop_continues() {
    // When
    let output = run_script("dance\nregister\n").await;

    // Then
    assert_that!(output, contains_substring("error: unknown command 'dance'"));
    assert_that!(output, contains_substring("screen: register"));
    assert_that!(output, contains_substring("register> "));
}

#[tokio::test]
async fn given_quit_when_run_then_later_lines_are_ignored() {
    // When
    let output = run_script("quit\nregister\n").await;

    // Then
    assert_that!(output, not(contains_substring("screen: register")));
}

#[tokio::test]
async fn given_help_when_run_then_command_list_printed() {
    // When
    let output = run_script("help\n").await;

    // Then
    assert_that!(output, contains_substring("login <email> <password>"));
    assert_that!(output, contains_substring("quit"));
}
