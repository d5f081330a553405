use crate::models::user_record::normalize_email;
use crate::{Background, CURRENT_SCHEMA_VERSION, UserRecord};

#[test]
fn given_legacy_profile_json_when_deserialize_then_fills_defaults() {
    let json = r#"{"name":"Ayesha","background":"Hobbyist"}"#;
    let user: UserRecord = serde_json::from_str(json).unwrap();

    assert_eq!(user.name.as_deref(), Some("Ayesha"));
    assert_eq!(user.background, Background::Hobbyist);
    assert!(user.email.is_none());
    assert_eq!(user.schema_version, 0);
}

#[test]
fn given_account_record_when_serialize_then_has_no_password_field() {
    let user = UserRecord::account(None, "a@b.com".into(), Background::Student);
    let json = serde_json::to_string(&user).unwrap();

    assert!(json.contains("a@b.com"));
    assert!(!json.contains("password"));
    assert_eq!(user.schema_version, CURRENT_SCHEMA_VERSION);
}

#[test]
fn given_no_name_when_display_name_then_falls_back_to_email() {
    let user = UserRecord::account(None, "a@b.com".into(), Background::Student);
    assert_eq!(user.display_name(), Some("a@b.com"));

    let named = UserRecord::account(Some("Sam".into()), "a@b.com".into(), Background::Student);
    assert_eq!(named.display_name(), Some("Sam"));
}

#[test]
fn given_mixed_case_email_when_has_email_then_matches() {
    let user = UserRecord::account(None, "Reader@Example.com".into(), Background::Student);
    assert!(user.has_email("reader@example.com "));
    assert!(!user.has_email("other@example.com"));
    assert_eq!(normalize_email(" A@B.COM "), "a@b.com");
}

#[test]
fn given_profile_record_when_has_email_then_false() {
    let user = UserRecord::profile("Sam".into(), Background::Professional);
    assert!(!user.has_email("sam@example.com"));
}

#[test]
fn given_legacy_profile_json_when_deserialized_twice_then_records_equal() {
    let json = r#"{"name":"Ayesha","background":"Student"}"#;
    let first: UserRecord = serde_json::from_str(json).unwrap();
    let second: UserRecord = serde_json::from_str(json).unwrap();

    assert_eq!(first, second);
    assert!(first.id.is_nil());
}
