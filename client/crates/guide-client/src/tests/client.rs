use crate::Client;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_that!(client.base_url.as_str(), eq("http://localhost:8000"));
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_that!(client.base_url.as_str(), eq("http://localhost:8000"));
}

#[test]
fn test_with_timeout_trims_base_url() {
    let client = Client::with_timeout("http://localhost:8000//", Duration::from_secs(5)).unwrap();
    assert_that!(client.base_url.as_str(), eq("http://localhost:8000"));
}
