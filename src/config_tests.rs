use crate::config::{Config, DEFAULT_MODEL_PATH, UiLayout};
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.ui_layout, UiLayout::Wide);
    assert_eq!(config.window_width, 1100.0);
    assert_eq!(config.window_height, 760.0);
}

#[test]
fn test_config_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("HOUSE_MODEL_PATH", "models/Housing.json"),
        ("HOUSE_UI_LAYOUT", "Compact"),
        ("HOUSE_WINDOW_WIDTH", "640"),
        ("HOUSE_WINDOW_HEIGHT", "900"),
    ]))
    .unwrap();

    assert_eq!(config.model_path, PathBuf::from("models/Housing.json"));
    assert_eq!(config.ui_layout, UiLayout::Compact);
    assert_eq!(config.window_width, 640.0);
    assert_eq!(config.window_height, 900.0);
}

#[test]
fn test_blank_model_path_falls_back() {
    let config = Config::from_lookup(lookup(&[("HOUSE_MODEL_PATH", "  ")])).unwrap();
    assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
}

#[test]
fn test_invalid_layout_rejected() {
    let err = Config::from_lookup(lookup(&[("HOUSE_UI_LAYOUT", "sidebar")])).unwrap_err();
    assert!(err.to_string().contains("HOUSE_UI_LAYOUT"));
}

#[test]
fn test_invalid_window_size_rejected() {
    let err = Config::from_lookup(lookup(&[("HOUSE_WINDOW_WIDTH", "wide")])).unwrap_err();
    assert!(err.to_string().contains("HOUSE_WINDOW_WIDTH"));

    assert!(Config::from_lookup(lookup(&[("HOUSE_WINDOW_HEIGHT", "0")])).is_err());
}

#[test]
fn test_default_matches_lookup_defaults() {
    let from_lookup = Config::from_lookup(lookup(&[])).unwrap();
    let default = Config::default();
    assert_eq!(from_lookup.model_path, default.model_path);
    assert_eq!(from_lookup.ui_layout, default.ui_layout);
}
