//! Terminal backend over `ratatui`. The only module that names ratatui types.

use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::{Frame, Terminal};

use crate::ui::backend::raster::{self, Surface};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

impl From<Color> for RColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Reset => RColor::Reset,
            Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
            Color::Indexed(i) => RColor::Indexed(i),
        }
    }
}

impl From<Mod> for RModifier {
    fn from(m: Mod) -> Self {
        [
            (Mod::BOLD, RModifier::BOLD),
            (Mod::DIM, RModifier::DIM),
            (Mod::UNDERLINE, RModifier::UNDERLINED),
            (Mod::REVERSE, RModifier::REVERSED),
        ]
        .into_iter()
        .filter(|(ours, _)| m.contains(*ours))
        .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
    }
}

impl From<Style> for RStyle {
    fn from(s: Style) -> Self {
        let mut out = RStyle::default().add_modifier(s.mods.into());
        if let Some(fg) = s.fg {
            out = out.fg(fg.into());
        }
        if let Some(bg) = s.bg {
            out = out.bg(bg.into());
        }
        out
    }
}

/// ratatui's `set_style` patches, so unset colors keep what the cell had.
impl Surface for Buffer {
    fn bounds(&self) -> Rect {
        self.area.into()
    }

    fn put(&mut self, pos: Pos, symbol: &str, style: Style) {
        if let Some(cell) = self.cell_mut((pos.x, pos.y)) {
            cell.set_symbol(symbol).set_style(RStyle::from(style));
        }
    }

    fn restyle(&mut self, pos: Pos, style: Style) {
        if let Some(cell) = self.cell_mut((pos.x, pos.y)) {
            cell.set_style(RStyle::from(style));
        }
    }
}

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame, cursor: None }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, _area: Rect, cmds: &[PaintCmd]) {
        raster::replay(self.frame.buffer_mut(), cmds);
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        // Frames that never place the cursor get it hidden by ratatui.
        if let Some(pos) = self.cursor {
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

/// Owns the real terminal; callers only see `dyn Backend` and `Rect`.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area = Rect::from(frame.area());
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
