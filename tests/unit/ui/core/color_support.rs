use super::*;

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!(parse_color_support(" TrueColor "), Some(TerminalColorSupport::TrueColor));
    assert_eq!(parse_color_support("24bit"), Some(TerminalColorSupport::TrueColor));
    assert_eq!(parse_color_support("256"), Some(TerminalColorSupport::Ansi256));
    assert_eq!(parse_color_support("basic"), Some(TerminalColorSupport::Ansi16));
    assert_eq!(parse_color_support("lots"), None);
}

#[test]
fn colorterm_hints_mean_truecolor() {
    assert_eq!(support_from_env("truecolor", "xterm"), TerminalColorSupport::TrueColor);
    assert_eq!(support_from_env("", "xterm-direct"), TerminalColorSupport::TrueColor);
    assert_eq!(support_from_env("24BIT", "vt100"), TerminalColorSupport::TrueColor);
}

#[test]
fn term_decides_between_256_and_16() {
    assert_eq!(support_from_env("", "xterm-256color"), TerminalColorSupport::Ansi256);
    assert_eq!(support_from_env("", "vt100"), TerminalColorSupport::Ansi16);
    assert_eq!(support_from_env("", ""), TerminalColorSupport::Ansi16);
}
