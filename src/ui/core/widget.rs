use super::geom::Rect;
use super::painter::Painter;
use super::theme::Theme;
use super::tree::UiTree;

/// Drawing context handed to widgets: the area they own, the frame's paint list,
/// the hit-test tree and the active theme.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
    pub theme: &'a Theme,
}

impl<'a> Ui<'a> {
    pub fn new(
        rect: Rect,
        painter: &'a mut Painter,
        tree: &'a mut UiTree,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rect,
            painter,
            tree,
            theme,
        }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: &mut *self.painter,
            tree: &mut *self.tree,
            theme: self.theme,
        };
        f(&mut child)
    }

    pub fn take_bottom(&mut self, h: u16) -> Rect {
        let (rest, bottom) = self.rect.split_bottom(h);
        self.rect = rest;
        bottom
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}
