//! Shared building blocks that do not depend on the terminal.

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
