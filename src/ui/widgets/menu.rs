use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::Token;
use crate::ui::core::tree::{Node, NodeKind};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

use super::fit_width;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// `Some` renders a checkbox (multi choice), `None` a plain entry.
    pub checked: Option<bool>,
}

impl MenuItem {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: None,
        }
    }

    pub fn check(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked: Some(checked),
        }
    }

    fn text(&self) -> String {
        match self.checked {
            Some(true) => format!("[x] {}", self.label),
            Some(false) => format!("[ ] {}", self.label),
            None => self.label.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MenuStyles {
    pub base: Style,
    pub border: Option<Style>,
    pub selected: Style,
}

impl MenuStyles {
    pub fn from_theme(theme: &crate::ui::core::theme::Theme) -> Self {
        Self {
            base: Style::default()
                .fg(theme.color(Token::Foreground))
                .bg(theme.color(Token::PopupBg)),
            border: Some(Style::default().fg(theme.color(Token::PopupBorder))),
            selected: Style::default()
                .fg(theme.color(Token::PopupSelectedFg))
                .bg(theme.color(Token::PopupSelectedBg)),
        }
    }
}

/// Popup list anchored at a point, kept on screen. Used for choice fields.
pub struct Menu<'a> {
    pub id_base: IdPath,
    pub menu_id: u32,
    pub layer: u8,
    pub anchor: Pos,
    pub items: &'a [MenuItem],
    pub selected: usize,
    pub styles: MenuStyles,
}

impl Menu<'_> {
    /// Popup rect for `screen`, or `None` when there is nothing to show.
    pub fn popup_rect(&self, screen: Rect) -> Option<Rect> {
        if self.items.is_empty() || screen.w < 3 || screen.h < 3 {
            return None;
        }
        let border = u16::from(self.styles.border.is_some()) * 2;
        let label_w = self
            .items
            .iter()
            .map(|item| item.text().width())
            .max()
            .unwrap_or(0);

        let inner_w = label_w.saturating_add(2).min(u16::MAX as usize) as u16;
        let inner_h = self.items.len().min(u16::MAX as usize) as u16;
        let width = inner_w.saturating_add(border).min(screen.w);
        let height = inner_h.saturating_add(border).min(screen.h);

        let mut x = self.anchor.x.max(screen.x);
        let mut y = self.anchor.y.max(screen.y);
        if x.saturating_add(width) > screen.right() {
            x = screen.right().saturating_sub(width);
        }
        if y.saturating_add(height) > screen.bottom() {
            y = screen.bottom().saturating_sub(height);
        }
        Some(Rect::new(x, y, width, height))
    }
}

impl Widget for Menu<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let screen = ui.rect;
        let Some(popup) = self.popup_rect(screen) else {
            return;
        };

        // Screen-wide overlay: clicks outside the popup close it.
        ui.tree.push(
            Node::new(
                self.id_base.push_str("overlay").finish(),
                screen,
                NodeKind::Unknown,
            )
            .on_layer(self.layer),
        );

        ui.painter.fill_rect(popup, self.styles.base);
        let inner = match self.styles.border {
            Some(border) => {
                ui.painter.border(popup, border, BorderKind::Plain);
                popup.inset(Insets::all(1))
            }
            None => popup,
        };
        if inner.is_empty() {
            return;
        }

        let selected = self.selected.min(self.items.len().saturating_sub(1));
        // Keep the selection visible when the list is taller than the popup.
        let first = selected.saturating_sub(inner.h.saturating_sub(1) as usize);
        for (line, (idx, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(first)
            .take(inner.h as usize)
            .enumerate()
        {
            let row = inner.line(line as u16);
            ui.tree.push(
                Node::new(
                    self.id_base.push_str("item").push_index(idx).finish(),
                    row,
                    NodeKind::MenuItem { menu_id: self.menu_id, index: idx },
                )
                .on_layer(self.layer),
            );

            let is_selected = idx == selected;
            let style = if is_selected {
                self.styles.selected
            } else {
                self.styles.base
            };
            let prefix = if is_selected { "▸ " } else { "  " };
            let text = fit_width(&format!("{prefix}{}", item.text()), row.w as usize);
            ui.painter.text_in(row, text, style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/menu.rs"]
mod tests;
