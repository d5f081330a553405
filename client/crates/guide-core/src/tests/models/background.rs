use crate::Background;

use std::str::FromStr;

#[test]
fn test_background_as_str() {
    assert_eq!(Background::Student.as_str(), "Student");
    assert_eq!(Background::Professional.as_str(), "Professional");
    assert_eq!(Background::Hobbyist.as_str(), "Hobbyist");
}

#[test]
fn test_background_from_str_is_case_insensitive() {
    assert_eq!(
        Background::from_str("professional").unwrap(),
        Background::Professional
    );
    assert_eq!(
        Background::from_str("HOBBYIST").unwrap(),
        Background::Hobbyist
    );
    assert_eq!(
        Background::from_str(" Student ").unwrap(),
        Background::Student
    );
    assert!(Background::from_str("astronaut").is_err());
}

#[test]
fn test_background_default() {
    assert_eq!(Background::default(), Background::Student);
}

#[test]
fn test_background_serializes_capitalized() {
    let json = serde_json::to_string(&Background::Professional).unwrap();
    assert_eq!(json, "\"Professional\"");
}

#[test]
fn test_background_deserialize_rejects_unknown_value() {
    let result = serde_json::from_str::<Background>("\"Wizard\"");
    assert!(result.is_err());
}
