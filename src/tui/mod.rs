//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `grid`, `ui` and `app` so those stay usable and testable
//! without a terminal.

pub mod crossterm;
pub mod terminal_guard;
