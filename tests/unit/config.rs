use super::*;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_enable_every_mode() {
    let config = ConsoleConfig::default();
    assert!(config.mouse_capture);
    assert!(config.alternate_screen);
    assert!(config.hide_cursor);
    assert_eq!(config.tab_width, 8);
}

#[test]
fn overrides_accept_common_flag_spellings() {
    let mut config = ConsoleConfig::default();
    config.apply_overrides(lookup(&[
        (ENV_MOUSE_CAPTURE, "off"),
        (ENV_ALTERNATE_SCREEN, " FALSE "),
        (ENV_HIDE_CURSOR, "0"),
        (ENV_TAB_WIDTH, "4"),
    ]));

    assert!(!config.mouse_capture);
    assert!(!config.alternate_screen);
    assert!(!config.hide_cursor);
    assert_eq!(config.tab_width, 4);
}

#[test]
fn malformed_overrides_are_ignored() {
    let mut config = ConsoleConfig::default();
    config.apply_overrides(lookup(&[
        (ENV_MOUSE_CAPTURE, "maybe"),
        (ENV_TAB_WIDTH, "0"),
    ]));
    assert_eq!(config, ConsoleConfig::default());

    config.apply_overrides(lookup(&[(ENV_TAB_WIDTH, "64")]));
    assert_eq!(config.tab_width, 8);
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let config: ConsoleConfig = serde_json::from_str(r#"{ "mouse_capture": false }"#).unwrap();
    assert!(!config.mouse_capture);
    assert!(config.alternate_screen);
    assert_eq!(config.tab_width, 8);
}

#[test]
fn effective_tab_width_is_clamped() {
    let config = ConsoleConfig {
        tab_width: 0,
        ..ConsoleConfig::default()
    };
    assert_eq!(config.effective_tab_width(), 1);
}
