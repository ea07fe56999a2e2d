//! Rendering backends.
//!
//! Widgets only produce `PaintCmd`s; a backend turns them into cells through
//! `raster`. The terminal backend needs the `tui` feature, the headless one is
//! always there.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub mod raster;
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}
