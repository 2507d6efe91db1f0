//! Tests for config parsing and theme loading.

use glance::theme::{self, Color, Theme};
use glance::ViewerConfig;
use std::io::Write;

#[test]
fn test_config_round_trips_through_yaml() {
    let config = ViewerConfig {
        theme: "dark".to_string(),
        zoom_factor: 1.25,
        autoscale_percentile: 0.5,
        font_size: 16.0,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: ViewerConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.theme, "dark");
    assert!((parsed.zoom_factor - 1.25).abs() < f32::EPSILON);
    assert!((parsed.autoscale_percentile - 0.5).abs() < f32::EPSILON);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let parsed: ViewerConfig = serde_yaml::from_str("zoom_factor: 2.0\n").unwrap();
    assert_eq!(parsed.theme, "dark");
    assert!((parsed.zoom_factor - 2.0).abs() < f32::EPSILON);
    assert!((parsed.autoscale_percentile - 0.1).abs() < f32::EPSILON);
}

#[test]
fn test_theme_loads_from_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "version: 1\nname: Custom\nui:\n  background: \"#000000\"\n  checkerboard_light: \"#ff0000\"\n  checkerboard_dark: \"#00ff00\""
    )
    .unwrap();

    let theme = theme::from_file(&path).unwrap();
    assert_eq!(theme.name, "Custom");
    assert_eq!(theme.checkerboard_light, Color::rgb(255, 0, 0));
    // defaulted fields
    assert_eq!(theme.checkerboard_cell_size, 8);
    assert_eq!(theme.annotation_color, Color::rgb(255, 255, 255));
}

#[test]
fn test_builtin_theme_fallback() {
    assert!(Theme::from_builtin("dark").is_ok());
    assert!(Theme::from_builtin("no-such-theme").is_err());
}
