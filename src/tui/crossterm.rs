use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Converts a terminal event. Key releases, focus changes and horizontal
/// scrolling have no meaning in the editor and map to `None`.
pub fn into_input_event(event: crossterm::event::Event) -> Option<InputEvent> {
    match event {
        crossterm::event::Event::Key(key) => into_key_event(key).map(InputEvent::Key),
        crossterm::event::Event::Mouse(mouse) => into_mouse_event(mouse).map(InputEvent::Mouse),
        crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::FocusGained | crossterm::event::Event::FocusLost => None,
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    Some(KeyEvent { code, modifiers })
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    use crossterm::event::KeyCode as C;
    match code {
        C::Char(ch) => KeyCode::Char(ch),
        C::Enter => KeyCode::Enter,
        C::Tab => KeyCode::Tab,
        C::BackTab => KeyCode::BackTab,
        C::Esc => KeyCode::Esc,
        C::Backspace => KeyCode::Backspace,
        C::Delete => KeyCode::Delete,
        C::Up => KeyCode::Up,
        C::Down => KeyCode::Down,
        C::Left => KeyCode::Left,
        C::Right => KeyCode::Right,
        C::Home => KeyCode::Home,
        C::End => KeyCode::End,
        C::PageUp => KeyCode::PageUp,
        C::PageDown => KeyCode::PageDown,
        C::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl+Space as NUL.
        C::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

pub fn into_mouse_event(event: crossterm::event::MouseEvent) -> Option<MouseEvent> {
    Some(MouseEvent {
        kind: into_mouse_event_kind(event.kind)?,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    })
}

fn into_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

fn into_mouse_event_kind(kind: crossterm::event::MouseEventKind) -> Option<MouseEventKind> {
    use crossterm::event::MouseEventKind as K;
    Some(match kind {
        K::Down(button) => MouseEventKind::Down(into_mouse_button(button)),
        K::Up(button) => MouseEventKind::Up(into_mouse_button(button)),
        K::Drag(button) => MouseEventKind::Drag(into_mouse_button(button)),
        K::Moved => MouseEventKind::Moved,
        K::ScrollUp => MouseEventKind::ScrollUp,
        K::ScrollDown => MouseEventKind::ScrollDown,
        K::ScrollLeft | K::ScrollRight => return None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
