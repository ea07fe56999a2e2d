//! Fits theme colors to what the terminal can show.

use crate::ui::core::color_support::TerminalColorSupport;
use crate::ui::core::style::Color;
use crate::ui::core::theme::{Theme, ALL_TOKENS};

type Rgb = (u8, u8, u8);

/// xterm defaults for the 16 base colors.
const BASE16: [Rgb; 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

pub fn adapt_theme(theme: &Theme, support: TerminalColorSupport) -> Theme {
    let mut adapted = theme.clone();
    if support != TerminalColorSupport::TrueColor {
        for token in ALL_TOKENS {
            adapted.set(token, map_color_to_support(theme.color(token), support));
        }
    }
    adapted
}

pub fn map_color_to_support(color: Color, support: TerminalColorSupport) -> Color {
    let Some(rgb) = color_to_rgb(color) else {
        return color;
    };
    match (support, color) {
        (TerminalColorSupport::TrueColor, _) => color,
        (TerminalColorSupport::Ansi256, Color::Indexed(_)) => color,
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i < 16 => color,
        // The base 16 are left out: terminals repaint them freely.
        (TerminalColorSupport::Ansi256, _) => Color::Indexed(nearest(16..=255, rgb)),
        (TerminalColorSupport::Ansi16, _) => Color::Indexed(nearest(0..=15, rgb)),
    }
}

/// `None` for `Reset`, which has no fixed value.
pub fn color_to_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Reset => None,
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Indexed(i) => Some(xterm_rgb(i)),
    }
}

fn xterm_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => BASE16[usize::from(index)],
        16..=231 => {
            let i = usize::from(index - 16);
            (CUBE_LEVELS[i / 36], CUBE_LEVELS[i / 6 % 6], CUBE_LEVELS[i % 6])
        }
        _ => {
            let level = 8 + (index - 232) * 10;
            (level, level, level)
        }
    }
}

fn nearest(candidates: std::ops::RangeInclusive<u8>, target: Rgb) -> u8 {
    let start = *candidates.start();
    candidates
        .min_by_key(|&i| distance(xterm_rgb(i), target))
        .unwrap_or(start)
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme_adapter.rs"]
mod tests;
