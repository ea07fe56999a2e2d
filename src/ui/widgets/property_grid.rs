//! Paints a `RenderedTree`: one line per section header or field, plus one line
//! under any field that carries a validation error.

use unicode_width::UnicodeWidthStr;

use crate::grid::control::Control;
use crate::grid::tree::{FieldRow, RenderedTree, Row, SectionRow};
use crate::grid::value;
use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::tree::{Node, NodeKind};
use crate::ui::core::widget::{Ui, Widget};

use super::fit_width;

const INDENT: u16 = 2;
const LABEL_PERCENT: u16 = 40;

pub fn row_height(row: &Row) -> u16 {
    match row {
        Row::Field(f) if f.error.is_some() => 2,
        _ => 1,
    }
}

/// First visible row such that `focus` is fully on screen, moving `scroll` as
/// little as possible.
pub fn scroll_to_focus(tree: &RenderedTree, focus: usize, scroll: usize, height: u16) -> usize {
    if focus < scroll {
        return focus;
    }
    let mut first = scroll;
    while first < focus {
        let used: u16 = tree.rows()[first..=focus.min(tree.len().saturating_sub(1))]
            .iter()
            .map(row_height)
            .fold(0u16, u16::saturating_add);
        if used <= height {
            break;
        }
        first += 1;
    }
    first
}

pub struct PropertyGridView<'a> {
    pub tree: &'a RenderedTree,
    pub id_base: IdPath,
    pub focus: Option<usize>,
    pub scroll: usize,
    /// Active slot of a focused value pair, or handle of a focused slider.
    pub slot: usize,
    /// Text being typed into the focused field, shown instead of its value.
    pub input: Option<&'a str>,
    /// Set by `ui` when the focused field is being typed into.
    pub cursor: Option<Pos>,
}

impl<'a> PropertyGridView<'a> {
    pub fn new(tree: &'a RenderedTree) -> Self {
        Self {
            tree,
            id_base: IdPath::root("propgrid.view"),
            focus: None,
            scroll: 0,
            slot: 0,
            input: None,
            cursor: None,
        }
    }

    fn section(&mut self, ui: &mut Ui, idx: usize, row: &SectionRow, line: Rect) {
        let theme = ui.theme;
        let mut style = Style::default()
            .fg(theme.color(Token::HeaderFg))
            .add_mod(Mod::BOLD);
        if row.disabled {
            style = Style::default().fg(theme.color(Token::MutedFg));
        }
        let marker = if row.open { "▾ " } else { "▸ " };
        let area = line.inset(Insets::left(indent(row.depth)));
        ui.painter
            .text_in(area, format!("{marker}{}", row.title), style);

        let id = self.id_base.push_str("section").push_index(idx).finish();
        ui.tree.push(Node::new(id, line, NodeKind::SectionHeader { row: idx }));
    }

    fn field(&mut self, ui: &mut Ui, idx: usize, row: &FieldRow, line: Rect) {
        let theme = ui.theme;
        let focused = self.focus == Some(idx);
        let muted = Style::default().fg(theme.color(Token::MutedFg));
        let (label_style, value_style) = if row.disabled {
            (muted, muted)
        } else {
            (
                Style::default().fg(theme.color(Token::LabelFg)),
                Style::default().fg(theme.color(Token::Foreground)),
            )
        };

        let id = self.id_base.push_str("field").push_index(idx).finish();
        ui.tree.push(Node::new(id, line, NodeKind::FieldRow { row: idx }));

        let (label_area, control_area) = line.split_percent(LABEL_PERCENT);
        let label_area = label_area.inset(Insets::left(indent(row.depth)));
        ui.painter.text_in(label_area, row.label.clone(), label_style);

        let control_area = control_area.inset(Insets::left(1));
        let input = if focused && !row.disabled {
            self.input
        } else {
            None
        };
        match &row.control {
            Control::Toggle { on } => {
                let mark = if *on { "[x]" } else { "[ ]" };
                let style = if *on && !row.disabled {
                    value_style.fg(theme.color(Token::AccentFg))
                } else {
                    value_style
                };
                let toggle = Rect::new(control_area.x, control_area.y, 3.min(control_area.w), 1);
                ui.painter.text_in(toggle, mark, style);
                let id = self.id_base.push_str("toggle").push_index(idx).finish();
                ui.tree.push(Node::new(id, toggle, NodeKind::Toggle { row: idx }));
            }
            Control::Number { text } | Control::Text { text } => {
                let shown = input.unwrap_or(text.as_str());
                ui.painter.text_in(control_area, shown.to_string(), value_style);
                if input.is_some() {
                    self.place_cursor(control_area, shown);
                }
            }
            Control::Select { .. } | Control::MultiSelect { .. } => {
                let summary = row.control.summary();
                let (shown, style) = if summary.is_empty() {
                    ("(none)".to_string(), muted)
                } else {
                    (summary, value_style)
                };
                ui.painter.text_in(control_area, format!("{shown} ▾"), style);
            }
            Control::ValuePair { pair } => {
                self.value_pair(ui, idx, pair, input, focused, control_area, value_style);
            }
            Control::SliderPair { bounds, range } => {
                let handle = if focused { Some(self.slot.min(1)) } else { None };
                let (text, marks) = slider_text(bounds.min, bounds.max, *range, control_area.w);
                ui.painter.text_in(control_area, text, value_style);
                if let (Some(h), false) = (handle, row.disabled) {
                    let x = control_area.x.saturating_add(marks[h]);
                    ui.painter.style_rect(
                        Rect::new(x, control_area.y, 1, 1).intersect(control_area),
                        Style::default().fg(theme.color(Token::AccentFg)).add_mod(Mod::BOLD),
                    );
                }
            }
            Control::Unsupported { .. } => {
                ui.painter
                    .text_in(control_area, "Unsupported", muted.add_mod(Mod::DIM));
            }
        }

        if focused {
            ui.painter.style_rect(line, focus_style(theme));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn value_pair(
        &mut self,
        ui: &mut Ui,
        idx: usize,
        pair: &[serde_json::Value; 2],
        input: Option<&str>,
        focused: bool,
        area: Rect,
        style: Style,
    ) {
        let slot_w = area.w.saturating_sub(3) / 2;
        let slots = [
            Rect::new(area.x, area.y, slot_w, 1),
            Rect::new(area.x.saturating_add(slot_w + 3), area.y, slot_w, 1),
        ];
        ui.painter.text_in(
            Rect::new(area.x.saturating_add(slot_w), area.y, 3, 1).intersect(area),
            " – ",
            style,
        );
        for (slot, rect) in slots.iter().enumerate() {
            let active = focused && self.slot.min(1) == slot;
            let text = match input {
                Some(typed) if active => typed.to_string(),
                _ => value::display_text(&pair[slot]),
            };
            let slot_style = if active {
                style.add_mod(Mod::UNDERLINE)
            } else {
                style
            };
            ui.painter.text_in(*rect, text.clone(), slot_style);
            if active && input.is_some() {
                self.place_cursor(*rect, &text);
            }
            let id = self.id_base.push_str("slot").push_index(idx).push_index(slot).finish();
            ui.tree.push(Node::new(id, *rect, NodeKind::PairSlot { row: idx, slot }));
        }
    }

    fn place_cursor(&mut self, area: Rect, text: &str) {
        let w = (text.width().min(u16::MAX as usize) as u16).min(area.w.saturating_sub(1));
        self.cursor = Some(Pos::new(area.x.saturating_add(w), area.y));
    }
}

impl Widget for PropertyGridView<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }
        ui.painter.fill_rect(
            area,
            Style::default()
                .fg(ui.theme.color(Token::Foreground))
                .bg(ui.theme.color(Token::Background)),
        );

        let tree = self.tree;
        let mut y = 0u16;
        for (idx, row) in tree.rows().iter().enumerate().skip(self.scroll) {
            if y >= area.h {
                break;
            }
            let line = area.line(y);
            match row {
                Row::Section(section) => self.section(ui, idx, section, line),
                Row::Field(field) => {
                    self.field(ui, idx, field, line);
                    if let Some(error) = &field.error {
                        let err_line = area.line(y + 1);
                        if !err_line.is_empty() {
                            let (_, control) = err_line.split_percent(LABEL_PERCENT);
                            ui.painter.text_in(
                                control.inset(Insets::left(1)),
                                error.clone(),
                                Style::default().fg(ui.theme.color(Token::ErrorFg)),
                            );
                        }
                    }
                }
            }
            y = y.saturating_add(row_height(row));
        }
    }
}

fn indent(depth: usize) -> u16 {
    (depth.min(u16::MAX as usize / INDENT as usize) as u16) * INDENT
}

fn focus_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.color(Token::FocusBg))
        .fg(theme.color(Token::FocusFg))
}

/// Renders `lo ──●━━━●── hi` into `width` columns. Returns the text and the
/// column of each handle relative to the start.
fn slider_text(min: f64, max: f64, range: [f64; 2], width: u16) -> (String, [u16; 2]) {
    let lo = fmt_num(range[0]);
    let hi = fmt_num(range[1]);
    let labels_w = (lo.width() + hi.width() + 2) as u16;
    let track_w = width.saturating_sub(labels_w);
    if track_w < 2 {
        return (fit_width(&format!("{lo} .. {hi}"), width as usize), [0, 0]);
    }

    let span = max - min;
    let col = |v: f64| -> u16 {
        if span <= 0.0 || !v.is_finite() {
            return 0;
        }
        let t = ((v - min) / span).clamp(0.0, 1.0);
        (t * f64::from(track_w - 1)).round() as u16
    };
    let a = col(range[0]);
    let b = col(range[1]).max(a);

    let mut track = String::new();
    for i in 0..track_w {
        track.push(if i == a || i == b {
            '●'
        } else if i > a && i < b {
            '━'
        } else {
            '─'
        });
    }
    let offset = lo.width() as u16 + 1;
    (format!("{lo} {track} {hi}"), [offset + a, offset + b])
}

fn fmt_num(v: f64) -> String {
    value::display_text(&value::number_value(v))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/property_grid.rs"]
mod tests;
