use super::*;
use tempfile::tempdir;

#[test]
fn first_run_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("propgrid").join("settings.json");

    ensure_settings_file(&path).unwrap();
    assert_eq!(load_settings(&path), Settings::default());

    std::fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();
    ensure_settings_file(&path).unwrap();
    assert_eq!(load_settings(&path).theme.as_deref(), Some("dark"));
}

#[test]
fn missing_and_malformed_files_yield_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings(&path), Settings::default());

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn color_overrides_parse_per_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r##"{ "color_support": "256", "log_filter": "propgrid=debug",
             "colors": { "accent_fg": "#ff7043", "error_fg": "light_red" } }"##,
    )
    .unwrap();

    let settings = load_settings(&path);
    assert_eq!(settings.color_support.as_deref(), Some("256"));
    assert_eq!(settings.log_filter.as_deref(), Some("propgrid=debug"));
    assert_eq!(settings.colors.get(Token::AccentFg), Some("#ff7043"));
    assert_eq!(settings.colors.get(Token::ErrorFg), Some("light_red"));
    assert_eq!(settings.colors.get(Token::Background), None);
}

#[test]
fn unset_tokens_are_not_serialized() {
    let mut colors = ThemeSettings::default();
    colors.set(Token::FocusBg, "#26a69a");
    let json = serde_json::to_value(&colors).unwrap();
    assert_eq!(json, serde_json::json!({ "focus_bg": "#26a69a" }));
}
