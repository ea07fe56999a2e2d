//! Frame paint list. Widgets record what to draw; backends replay it.

use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blanks every cell and sets its style.
    FillRect { rect: Rect, style: Style },
    /// Restyles cells without touching their symbols.
    StyleRect { rect: Rect, style: Style },
    HLine { pos: Pos, len: u16, ch: char, style: Style },
    Text { pos: Pos, text: String, style: Style, clip: Option<Rect> },
    Border { rect: Rect, style: Style, kind: BorderKind },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.push(PaintCmd::FillRect { rect, style });
    }

    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.push(PaintCmd::StyleRect { rect, style });
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        self.push(PaintCmd::HLine { pos, len, ch, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.push_text(pos, text.into(), style, None);
    }

    /// Text starting at the top-left of `clip` that never draws outside it.
    pub fn text_in(&mut self, clip: Rect, text: impl Into<String>, style: Style) {
        self.push_text(Pos::new(clip.x, clip.y), text.into(), style, Some(clip));
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.push(PaintCmd::Border { rect, style, kind });
    }

    fn push_text(&mut self, pos: Pos, text: String, style: Style, clip: Option<Rect>) {
        if text.is_empty() {
            return;
        }
        self.push(PaintCmd::Text { pos, text, style, clip });
    }

    fn push(&mut self, cmd: PaintCmd) {
        self.cmds.push(cmd);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
