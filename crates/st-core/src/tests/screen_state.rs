use crate::ScreenState;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_default_when_constructed_then_login() {
    assert_that!(ScreenState::default(), eq(ScreenState::Login));
}

#[test]
fn given_each_state_when_rendered_and_parsed_then_same_state() {
    for state in [
        ScreenState::Login,
        ScreenState::Register,
        ScreenState::Dashboard,
    ] {
        let parsed = ScreenState::from_str(state.as_str()).unwrap();
        assert_that!(parsed, eq(state));
    }
}

#[test]
fn given_unknown_name_when_parsed_then_error() {
    let result = ScreenState::from_str("settings");

    assert_that!(result, err(displays_as(contains_substring("settings"))));
}
