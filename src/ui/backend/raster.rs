//! Rasterizes paint commands onto a cell grid.
//!
//! Both backends go through here, so the headless buffer shows exactly what
//! the terminal would. A `Surface` only has to store one grapheme and one style
//! per cell; clipping, wide glyphs and borders are handled once.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;

pub trait Surface {
    /// Cells that exist. Nothing outside is ever written.
    fn bounds(&self) -> Rect;

    fn put(&mut self, pos: Pos, symbol: &str, style: Style);

    /// Changes the style of a cell, keeping its symbol.
    fn restyle(&mut self, pos: Pos, style: Style);
}

pub fn replay<S: Surface + ?Sized>(surface: &mut S, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => {
                for_each_cell(surface, *rect, |s, p| s.put(p, " ", *style));
            }
            PaintCmd::StyleRect { rect, style } => {
                for_each_cell(surface, *rect, |s, p| s.restyle(p, *style));
            }
            PaintCmd::HLine { pos, len, ch, style } => {
                let mut utf8 = [0u8; 4];
                let symbol: &str = ch.encode_utf8(&mut utf8);
                let run = Rect::new(pos.x, pos.y, *len, 1);
                for_each_cell(surface, run, |s, p| s.put(p, symbol, *style));
            }
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => put_text(surface, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => put_border(surface, *rect, *style, *kind),
        }
    }
}

fn for_each_cell<S, F>(surface: &mut S, rect: Rect, mut f: F)
where
    S: Surface + ?Sized,
    F: FnMut(&mut S, Pos),
{
    let rect = rect.intersect(surface.bounds());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            f(surface, Pos::new(x, y));
        }
    }
}

/// Writes `text` grapheme by grapheme from `pos`, never past `clip`. A wide
/// glyph that would straddle the right edge ends the run; the cells it covers
/// after the first are blanked.
pub fn put_text<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Option<Rect>,
) {
    let bounds = surface.bounds();
    let clip = clip.unwrap_or(bounds).intersect(bounds);
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let mut x = pos.x;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width().min(u16::MAX as usize) as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            surface.put(Pos::new(x, pos.y), grapheme, style);
            for dx in 1..w {
                surface.put(Pos::new(x + dx, pos.y), " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn put_border<S: Surface + ?Sized>(surface: &mut S, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(surface.bounds());
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let [tl, tr, bl, br, horizontal, vertical] = match kind {
        BorderKind::Plain => ["┌", "┐", "└", "┘", "─", "│"],
    };
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    for x in left + 1..right {
        surface.put(Pos::new(x, top), horizontal, style);
        surface.put(Pos::new(x, bottom), horizontal, style);
    }
    for y in top + 1..bottom {
        surface.put(Pos::new(left, y), vertical, style);
        surface.put(Pos::new(right, y), vertical, style);
    }
    surface.put(Pos::new(left, top), tl, style);
    surface.put(Pos::new(right, top), tr, style);
    surface.put(Pos::new(left, bottom), bl, style);
    surface.put(Pos::new(right, bottom), br, style);
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/raster.rs"]
mod tests;
