#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

/// Overrides detection, e.g. `PROPGRID_COLOR_SUPPORT=256`.
pub const COLOR_SUPPORT_ENV: &str = "PROPGRID_COLOR_SUPPORT";

/// Parses an explicit override such as `truecolor`, `256` or `basic`.
pub fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

/// Guesses from `COLORTERM` and `TERM`.
pub fn detect_terminal_color_support() -> TerminalColorSupport {
    let var = |key: &str| std::env::var(key).unwrap_or_default();
    support_from_env(&var("COLORTERM"), &var("TERM"))
}

fn support_from_env(colorterm: &str, term: &str) -> TerminalColorSupport {
    let colorterm = colorterm.to_ascii_lowercase();
    let term = term.to_ascii_lowercase();
    let direct = ["truecolor", "24bit", "direct"]
        .iter()
        .any(|hint| colorterm.contains(hint) || term.contains(hint));

    if direct {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/color_support.rs"]
mod tests;
