use crate::BackendConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_backend_when_validate_then_ok() {
    assert_that!(BackendConfig::default().validate(), ok(anything()));
}

#[test]
fn given_url_without_scheme_when_validate_then_error_mentions_scheme() {
    // Given
    let config = BackendConfig {
        url: "localhost:8000".into(),
        ..Default::default()
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let msg = result.unwrap_err().to_string();
    assert_that!(msg, contains_substring("http://"));
}

#[test]
fn given_timeout_zero_when_validate_then_error() {
    let config = BackendConfig {
        timeout_secs: 0,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_over_max_when_validate_then_error() {
    let config = BackendConfig {
        timeout_secs: crate::MAX_BACKEND_TIMEOUT_SECS + 1,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_timeout_duration() {
    let config = BackendConfig {
        timeout_secs: 7,
        ..Default::default()
    };
    assert_eq!(config.timeout(), Duration::from_secs(7));
}
