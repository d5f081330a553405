use crate::assistant::assistant::failure_text;
use crate::{ClientError, NETWORK_ERROR_MESSAGE};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_string_detail_when_building_error_then_detail_is_the_message() {
    let detail = json!("Invalid credentials");

    let err = ClientError::from_detail(401, Some(&detail));

    assert!(matches!(err, ClientError::Api { status: 401, .. }));
    let message = err.user_message();
    assert_that!(message.as_str(), eq("Invalid credentials"));
}

#[test]
fn given_detail_list_when_building_error_then_entries_are_joined() {
    let detail = json!([
        { "loc": ["body", "email"], "msg": "value is not a valid email address" },
        { "loc": ["body", "password"], "msg": "field required" }
    ]);

    let err = ClientError::from_detail(422, Some(&detail));

    assert!(matches!(err, ClientError::ServerValidation { status: 422, .. }));
    let message = err.user_message();
    assert_that!(
        message.as_str(),
        eq("email: value is not a valid email address; password: field required")
    );
}

#[test]
fn given_short_loc_when_building_error_then_only_msg_is_used() {
    let detail = json!([{ "loc": ["body"], "msg": "body is empty" }]);

    let message = ClientError::from_detail(422, Some(&detail)).user_message();

    assert_that!(message.as_str(), eq("body is empty"));
}

#[test]
fn given_no_detail_when_building_error_then_status_is_reported() {
    let message = ClientError::from_detail(500, None).user_message();

    assert_that!(message.as_str(), eq("Request failed with status: 500."));
}

#[test]
fn given_invalid_body_then_network_message_is_shown() {
    let err = ClientError::invalid_body(502);

    assert!(err.is_network());
    let message = err.user_message();
    assert_that!(message.as_str(), eq(NETWORK_ERROR_MESSAGE));
    let text = failure_text(&err);
    assert_that!(text.as_str(), eq(NETWORK_ERROR_MESSAGE));
}

#[test]
fn given_api_error_when_shown_in_chat_then_prefixed_with_error() {
    let detail = json!("Search index unavailable");
    let err = ClientError::from_detail(503, Some(&detail));

    let text = failure_text(&err);

    assert_that!(text.as_str(), eq("Error: Search index unavailable"));
}

#[test]
fn given_no_detail_when_shown_in_chat_then_unknown_error() {
    let err = ClientError::from_detail(500, None);

    assert!(matches!(err, ClientError::Status { status: 500, .. }));
    let text = failure_text(&err);
    assert_that!(text.as_str(), eq("Error: Unknown error"));
}
