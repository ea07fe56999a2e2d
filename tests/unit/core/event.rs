use super::*;

#[test]
fn modifiers_combine_and_contain() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn ctrl_chords_match_case_insensitively() {
    let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(key.is_ctrl('s'));
    assert!(!KeyEvent::plain(KeyCode::Char('s')).is_ctrl('s'));
}

#[test]
fn only_unmodified_chars_type() {
    assert_eq!(KeyEvent::plain(KeyCode::Char('7')).typed_char(), Some('7'));
    let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
    assert_eq!(shifted.typed_char(), Some('A'));
    assert_eq!(KeyEvent::ctrl('a').typed_char(), None);
    assert_eq!(KeyEvent::plain(KeyCode::Enter).typed_char(), None);
}
