use super::*;
use crate::services::presets::builtin;
use crate::ui::core::theme::Token;

#[test]
fn hex_and_named_colors_parse() {
    assert_eq!(parse_color("#26a69a"), Some(Color::Rgb(0x26, 0xa6, 0x9a)));
    assert_eq!(parse_color(" #FFF "), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_color("dark-gray"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("Light_Cyan"), Some(Color::Indexed(14)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn bad_colors_are_rejected() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("#ffé"), None);
    assert_eq!(parse_color("chartreuse"), None);
}

#[test]
fn overrides_apply_after_the_preset() {
    let preset = builtin("slate").unwrap();
    let mut overrides = ThemeSettings::default();
    overrides.set(Token::AccentFg, "red");
    overrides.set(Token::ErrorFg, "not a color");

    let theme = resolve_theme(Some(&preset), &overrides, TerminalColorSupport::TrueColor);
    assert_eq!(theme.accent_fg, Color::Indexed(1));
    assert_eq!(theme.background, Color::Rgb(0x1b, 0x1e, 0x24));
    assert_eq!(theme.error_fg, Color::Rgb(0xf4, 0x43, 0x36));
}

#[test]
fn no_preset_keeps_the_default_theme() {
    let theme = resolve_theme(None, &ThemeSettings::default(), TerminalColorSupport::TrueColor);
    assert_eq!(theme, Theme::default());
}

#[test]
fn limited_terminals_get_indexed_colors() {
    let preset = builtin("sunset").unwrap();
    let theme = resolve_theme(Some(&preset), &ThemeSettings::default(), TerminalColorSupport::Ansi16);
    for token in ALL_TOKENS {
        assert!(
            matches!(theme.color(token), Color::Indexed(i) if i < 16) || theme.color(token) == Color::Reset,
            "{token:?} left as {:?}",
            theme.color(token)
        );
    }
}
