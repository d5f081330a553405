use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_storage_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    let config = StorageConfig {
        path: "/etc/storage.json".into(),
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_traversal_path_when_validate_then_error() {
    let config = StorageConfig {
        path: "../outside.json".into(),
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_path_when_validate_then_error() {
    let config = StorageConfig { path: "  ".into() };
    assert_that!(config.validate(), err(anything()));
}
