use super::*;

#[test]
fn ascii_constants_use_ascii_codes() {
    assert_eq!(Key::SPACE.code(), 32);
    assert_eq!(Key::A.code(), b'a' as u16);
    assert_eq!(Key::DIGIT_9.to_ascii(), Some(b'9'));
    assert_eq!(Key::from_ascii(b'q'), Some(Key::Q));
    assert_eq!(Key::from_ascii(0xc3), None);
}

#[test]
fn special_keys_are_outside_ascii() {
    for key in [Key::LEFT, Key::F12, Key::ESC, Key::DELETE, Key::ENTER, Key::TAB] {
        assert!(!key.is_ascii());
        assert_eq!(key.to_ascii(), None);
        assert!(!key.is_alphanumeric());
    }
}

#[test]
fn arrow_keys_are_a_contiguous_range() {
    assert!(Key::LEFT.is_arrow_key());
    assert!(Key::UP.is_arrow_key());
    assert!(Key::RIGHT.is_arrow_key());
    assert!(Key::DOWN.is_arrow_key());
    assert!(!Key::F1.is_arrow_key());
    assert!(!Key::A.is_arrow_key());
}

#[test]
fn function_keys_map_by_number() {
    assert_eq!(Key::function(1), Some(Key::F1));
    assert_eq!(Key::function(12), Some(Key::F12));
    assert_eq!(Key::function(0), None);
    assert_eq!(Key::function(13), None);
    assert!(Key::F7.is_function_key());
    assert!(!Key::ESC.is_function_key());
}

#[test]
fn numeric_and_alphanumeric_only_match_ascii() {
    assert!(Key::DIGIT_0.is_numeric());
    assert!(!Key::A.is_numeric());
    assert!(Key::A.is_alphanumeric());
    assert!(Key::from_ascii(b'Z').unwrap().is_alphanumeric());
    assert!(!Key::UNDERSCORE.is_alphanumeric());
}
