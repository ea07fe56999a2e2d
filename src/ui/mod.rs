//! Terminal-agnostic UI layer.
//!
//! Widgets paint into a `Painter` and register hit-test nodes in a `UiTree`;
//! a backend turns the paint list into cells. Only `backend::terminal` knows
//! about `ratatui`.

pub mod backend;
pub mod core;
pub mod widgets;
