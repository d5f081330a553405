use crate::LanguageMode;

#[test]
fn test_language_mode_toggle_round_trips() {
    let mode = LanguageMode::default();
    assert_eq!(mode, LanguageMode::English);
    assert_eq!(mode.toggled(), LanguageMode::Urdu);
    assert_eq!(mode.toggled().toggled(), LanguageMode::English);
}

#[test]
fn test_language_mode_direction_and_labels() {
    assert_eq!(LanguageMode::English.direction(), "ltr");
    assert_eq!(LanguageMode::Urdu.direction(), "rtl");
    assert_eq!(LanguageMode::English.toggle_label(), "اردو");
    assert_eq!(LanguageMode::Urdu.toggle_label(), "EN");
    assert_eq!(LanguageMode::Urdu.code(), "UR");
}
