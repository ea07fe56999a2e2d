use super::*;
use tempfile::tempdir;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn run(list: &[&str]) -> CliArgs {
    match parse_args(args(list)).unwrap() {
        Command::Run(cli) => cli,
        Command::Help => panic!("expected a run command"),
    }
}

#[test]
fn parse_args_takes_schema_then_object() {
    let cli = run(&["scene.schema.json", "scene.json"]);
    assert_eq!(cli.schema, PathBuf::from("scene.schema.json"));
    assert_eq!(cli.object, PathBuf::from("scene.json"));
    assert!(!cli.disabled);
    assert_eq!(cli.theme, None);
}

#[test]
fn parse_args_accepts_flags_anywhere() {
    let cli = run(&["--disabled", "a.json", "--theme", "dark", "b.json"]);
    assert!(cli.disabled);
    assert_eq!(cli.theme.as_deref(), Some("dark"));
    assert_eq!(cli.object, PathBuf::from("b.json"));

    let cli = run(&["a.json", "b.json", "--theme=sunset"]);
    assert_eq!(cli.theme.as_deref(), Some("sunset"));
}

#[test]
fn parse_args_rejects_bad_input() {
    assert!(parse_args(args(&["only.json"])).is_err());
    assert!(parse_args(args(&["a", "b", "c"])).is_err());
    assert!(parse_args(args(&["a", "b", "--theme"])).is_err());
    assert!(parse_args(args(&["a", "b", "--theme="])).is_err());
    assert!(parse_args(args(&["a", "b", "--verbose"])).is_err());
}

#[test]
fn parse_args_help_wins() {
    assert_eq!(parse_args(args(&["a", "--help"])).unwrap(), Command::Help);
    assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
}

#[test]
fn pick_theme_prefers_cli_then_settings_then_last() {
    let available: Vec<String> = BUILTIN_NAMES.iter().map(|n| n.to_string()).collect();
    assert_eq!(pick_theme(Some("dark"), Some("light"), "arctic", &available), "dark");
    assert_eq!(pick_theme(None, Some("light"), "arctic", &available), "light");
    assert_eq!(pick_theme(Some("neon"), None, "arctic", &available), "arctic");
    assert_eq!(pick_theme(None, None, "gone", &available), DEFAULT_PRESET);
}

#[test]
fn missing_object_files_start_empty() {
    let dir = tempdir().unwrap();
    let object = read_object(&dir.path().join("missing.json")).unwrap();
    assert_eq!(object, serde_json::json!({}));
}

#[test]
fn malformed_object_files_are_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert_eq!(read_object(&path).unwrap_err().kind(), io::ErrorKind::InvalidData);
}

#[test]
fn written_objects_read_back_in_key_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let object = serde_json::json!({ "zoom": 2, "alpha": [1, 2], "name": "cam" });
    write_object(&path, &object).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.find("zoom").unwrap() < text.find("alpha").unwrap());
    assert_eq!(read_object(&path).unwrap(), object);
}

#[test]
fn builtin_themes_resolve_without_a_store() {
    let themes = load_themes(None, &Settings::default(), TerminalColorSupport::TrueColor);
    assert_eq!(themes.len(), BUILTIN_NAMES.len());
    assert_eq!(themes[0].0, "light");
    assert_ne!(themes[0].1, themes[1].1);
}
