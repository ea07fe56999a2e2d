use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// The terminal's own default.
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

/// Text attributes as a bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(0b0001);
    pub const DIM: Self = Self(0b0010);
    pub const UNDERLINE: Self = Self(0b0100);
    pub const REVERSE: Self = Self(0b1000);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A cell style. Unset colors leave whatever is underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(self, color: Color) -> Self {
        Self { fg: Some(color), ..self }
    }

    pub fn bg(self, color: Color) -> Self {
        Self { bg: Some(color), ..self }
    }

    pub fn add_mod(self, mods: Mod) -> Self {
        Self { mods: self.mods | mods, ..self }
    }

    /// `over` drawn on top of `self`.
    pub fn patch(self, over: Style) -> Self {
        Self {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            mods: self.mods | over.mods,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
