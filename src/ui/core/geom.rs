//! Cell-space geometry: positions, rectangles and the few splits the grid and
//! status line need. All arithmetic saturates; an empty rect contains nothing.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Margins taken off each edge by `Rect::inset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub const fn left(v: u16) -> Self {
        Self {
            left: v,
            ..Self::all(0)
        }
    }
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// First column past the right edge.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        !self.is_empty()
            && (self.x..self.right()).contains(&p.x)
            && (self.y..self.bottom()).contains(&p.y)
    }

    /// The one-line strip `offset` rows below the top, empty once past the bottom.
    pub fn line(&self, offset: u16) -> Rect {
        match offset < self.h {
            true => Rect::new(self.x, self.y.saturating_add(offset), self.w, 1),
            false => Rect::new(self.x, self.bottom(), self.w, 0),
        }
    }

    pub fn inset(self, by: Insets) -> Rect {
        Rect::new(
            self.x.saturating_add(by.left),
            self.y.saturating_add(by.top),
            self.w.saturating_sub(by.left.saturating_add(by.right)),
            self.h.saturating_sub(by.top.saturating_add(by.bottom)),
        )
    }

    /// Overlap of both rects; zero-sized when they do not meet.
    pub fn intersect(self, other: Rect) -> Rect {
        let (left, top) = (self.x.max(other.x), self.y.max(other.y));
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// `(rest, bottom)` with the bottom strip `h` rows tall.
    pub fn split_bottom(self, h: u16) -> (Rect, Rect) {
        let h = h.min(self.h);
        let rest = Rect { h: self.h - h, ..self };
        (rest, Rect::new(self.x, rest.bottom(), self.w, h))
    }

    /// `(left, rest)` with the left part `w` columns wide.
    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let w = w.min(self.w);
        let left = Rect { w, ..self };
        (left, Rect::new(left.right(), self.y, self.w - w, self.h))
    }

    /// Left part holding `percent` of the width, and the remainder.
    pub fn split_percent(self, percent: u16) -> (Rect, Rect) {
        let w = u32::from(self.w) * u32::from(percent.min(100)) / 100;
        self.split_left(w as u16)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
