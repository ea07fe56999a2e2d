use crate::services::settings::ThemeSettings;
use crate::ui::core::color_support::TerminalColorSupport;
use crate::ui::core::style::Color;
use crate::ui::core::theme::{Theme, ALL_TOKENS};
use crate::ui::core::theme_adapter::adapt_theme;

/// Overwrites every token `settings` sets with a color that parses. Unparseable
/// values are logged and skipped.
pub fn apply_settings(theme: &mut Theme, settings: &ThemeSettings) {
    for token in ALL_TOKENS {
        let Some(raw) = settings.get(token) else {
            continue;
        };
        match parse_color(raw) {
            Some(color) => theme.set(token, color),
            None => tracing::warn!(?token, value = raw, "ignoring unknown color"),
        }
    }
}

/// Default theme, then the preset, then the user's overrides, then mapped to
/// what the terminal can show.
pub fn resolve_theme(
    preset: Option<&ThemeSettings>,
    overrides: &ThemeSettings,
    support: TerminalColorSupport,
) -> Theme {
    let mut theme = Theme::default();
    if let Some(preset) = preset {
        apply_settings(&mut theme, preset);
    }
    apply_settings(&mut theme, overrides);
    adapt_theme(&theme, support)
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex(hex);
    }

    let c = match v.to_ascii_lowercase().replace('-', "_").as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

/// `RRGGBB` or the short `RGB` form.
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
