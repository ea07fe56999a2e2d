use crate::ui::core::style::Color;

/// Semantic color tokens used by the grid widgets.
///
/// Widgets ask for tokens, never for concrete colors, so presets can restyle
/// everything from one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Background,
    Foreground,
    HeaderFg,
    LabelFg,
    MutedFg,
    AccentFg,
    ErrorFg,
    FocusBg,
    FocusFg,
    Separator,
    StatusBg,
    StatusFg,
    PopupBorder,
    PopupBg,
    PopupSelectedBg,
    PopupSelectedFg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub header_fg: Color,
    pub label_fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub focus_bg: Color,
    pub focus_fg: Color,
    pub separator: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub popup_border: Color,
    pub popup_bg: Color,
    pub popup_selected_bg: Color,
    pub popup_selected_fg: Color,
}

impl Theme {
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::Background => self.background,
            Token::Foreground => self.foreground,
            Token::HeaderFg => self.header_fg,
            Token::LabelFg => self.label_fg,
            Token::MutedFg => self.muted_fg,
            Token::AccentFg => self.accent_fg,
            Token::ErrorFg => self.error_fg,
            Token::FocusBg => self.focus_bg,
            Token::FocusFg => self.focus_fg,
            Token::Separator => self.separator,
            Token::StatusBg => self.status_bg,
            Token::StatusFg => self.status_fg,
            Token::PopupBorder => self.popup_border,
            Token::PopupBg => self.popup_bg,
            Token::PopupSelectedBg => self.popup_selected_bg,
            Token::PopupSelectedFg => self.popup_selected_fg,
        }
    }

    pub fn set(&mut self, token: Token, color: Color) {
        let slot = match token {
            Token::Background => &mut self.background,
            Token::Foreground => &mut self.foreground,
            Token::HeaderFg => &mut self.header_fg,
            Token::LabelFg => &mut self.label_fg,
            Token::MutedFg => &mut self.muted_fg,
            Token::AccentFg => &mut self.accent_fg,
            Token::ErrorFg => &mut self.error_fg,
            Token::FocusBg => &mut self.focus_bg,
            Token::FocusFg => &mut self.focus_fg,
            Token::Separator => &mut self.separator,
            Token::StatusBg => &mut self.status_bg,
            Token::StatusFg => &mut self.status_fg,
            Token::PopupBorder => &mut self.popup_border,
            Token::PopupBg => &mut self.popup_bg,
            Token::PopupSelectedBg => &mut self.popup_selected_bg,
            Token::PopupSelectedFg => &mut self.popup_selected_fg,
        };
        *slot = color;
    }
}

pub const ALL_TOKENS: [Token; 16] = [
    Token::Background,
    Token::Foreground,
    Token::HeaderFg,
    Token::LabelFg,
    Token::MutedFg,
    Token::AccentFg,
    Token::ErrorFg,
    Token::FocusBg,
    Token::FocusFg,
    Token::Separator,
    Token::StatusBg,
    Token::StatusFg,
    Token::PopupBorder,
    Token::PopupBg,
    Token::PopupSelectedBg,
    Token::PopupSelectedFg,
];

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Indexed(15),        // White
            header_fg: Color::Indexed(6),          // Cyan
            label_fg: Color::Indexed(7),           // Gray
            muted_fg: Color::Indexed(8),           // DarkGray
            accent_fg: Color::Indexed(3),          // Yellow
            error_fg: Color::Indexed(1),           // Red
            focus_bg: Color::Indexed(8),           // DarkGray
            focus_fg: Color::Indexed(15),          // White
            separator: Color::Indexed(8),          // DarkGray
            status_bg: Color::Indexed(8),          // DarkGray
            status_fg: Color::Indexed(15),         // White
            popup_border: Color::Indexed(6),       // Cyan
            popup_bg: Color::Reset,
            popup_selected_bg: Color::Indexed(8),  // DarkGray
            popup_selected_fg: Color::Indexed(15), // White
        }
    }
}
