//! Interactive host around `PropertyGrid`: focus, typing buffers, choice menus,
//! key and mouse handling, and the status line.
//!
//! The editor owns the edited object. It never touches the filesystem; saving,
//! reloading and theme persistence are requested through `EventResult`.

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::core::event::{InputEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::grid::control::{nudge_slider, Control};
use crate::grid::value::display_text;
use crate::grid::{Edit, FieldRow, PropertyGrid, RenderedTree, Row, Schema};
use crate::services::presets::display_name;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::{Theme, Token};
use crate::ui::core::tree::{NodeKind, UiTree};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::menu::{Menu, MenuItem, MenuStyles};
use crate::ui::widgets::property_grid::{scroll_to_focus, PropertyGridView};

const MENU_LAYER: u8 = 10;
const MENU_ID: u32 = 1;
const LABEL_PERCENT: u32 = 40;
const KEY_HINT: &str = "^S save  ^T theme  ^D lock  F5 reload  ^Q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
    /// Write the object back to its file.
    Save,
    /// Re-read the schema file and pass it to `set_schema`.
    Reload,
    /// The active theme preset changed to this name.
    ThemeChanged(String),
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

#[derive(Debug, Clone, Copy)]
struct ChoiceMenu {
    row: usize,
    selected: usize,
}

pub struct GridEditor {
    grid: PropertyGrid,
    object: Value,
    rendered: RenderedTree,
    title: String,
    focus: usize,
    scroll: usize,
    /// Pair slot or slider handle of the focused field.
    slot: usize,
    /// Text typed into the focused field since it got focus.
    input: Option<String>,
    menu: Option<ChoiceMenu>,
    theme: Theme,
    themes: Vec<(String, Theme)>,
    theme_index: usize,
    viewport: u16,
    hits: UiTree,
    dirty: bool,
    message: Option<String>,
}

impl GridEditor {
    pub fn new(schema: impl Into<Schema>, object: Value) -> Self {
        let mut grid = PropertyGrid::new(schema);
        let rendered = grid.render(&object);
        Self {
            grid,
            object,
            rendered,
            title: String::new(),
            focus: 0,
            scroll: 0,
            slot: 0,
            input: None,
            menu: None,
            theme: Theme::default(),
            themes: Vec::new(),
            theme_index: 0,
            viewport: 0,
            hits: UiTree::new(),
            dirty: false,
            message: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn object(&self) -> &Value {
        &self.object
    }

    pub fn grid(&self) -> &PropertyGrid {
        &self.grid
    }

    pub fn rendered(&self) -> &RenderedTree {
        &self.rendered
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_row(&self) -> Option<&Row> {
        self.rendered.get(self.focus)
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Presets for Ctrl+T, in cycling order, with `current` active.
    pub fn set_themes(&mut self, themes: Vec<(String, Theme)>, current: &str) {
        self.theme_index = themes.iter().position(|(n, _)| n == current).unwrap_or(0);
        if let Some((_, theme)) = themes.get(self.theme_index) {
            self.theme = theme.clone();
        }
        self.themes = themes;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn mark_saved(&mut self, message: impl Into<String>) {
        self.dirty = false;
        self.message = Some(message.into());
    }

    /// Swaps in a reloaded schema. Values and the open state of sections that
    /// kept their title and position survive.
    pub fn set_schema(&mut self, schema: impl Into<Schema>) {
        self.grid.set_schema(schema);
        self.input = None;
        self.menu = None;
        self.refresh();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.grid.set_disabled(disabled);
        self.input = None;
        self.menu = None;
        self.refresh();
    }

    pub fn status_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        if self.dirty {
            parts.push("● modified".to_string());
        }
        let errors = self.grid.state().error_count();
        if errors > 0 {
            parts.push(format!("{errors} invalid"));
        }
        if self.grid.is_disabled() {
            parts.push("locked".to_string());
        }
        if let Some(message) = &self.message {
            parts.push(message.clone());
        }
        parts.join("  │  ")
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(*key),
            InputEvent::Mouse(mouse) => self.handle_mouse(*mouse),
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::Paste(text) => self.paste(text),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if key.is_ctrl('q') {
            return EventResult::Quit;
        }
        if key.is_ctrl('s') {
            return EventResult::Save;
        }
        if key.is_ctrl('d') {
            let locked = !self.grid.is_disabled();
            self.set_disabled(locked);
            let message = if locked { "Editing locked" } else { "Editing unlocked" };
            self.message = Some(message.to_string());
            return EventResult::Consumed;
        }
        if key.is_ctrl('t') {
            return self.cycle_theme();
        }
        if key.code == KeyCode::F(5) {
            return EventResult::Reload;
        }
        if self.menu.is_some() {
            return self.menu_key(key);
        }

        let page = self.viewport.saturating_sub(1).max(1) as isize;
        match key.code {
            KeyCode::Up => return self.move_focus(-1),
            KeyCode::Down => return self.move_focus(1),
            KeyCode::PageUp => return self.move_focus(-page),
            KeyCode::PageDown => return self.move_focus(page),
            KeyCode::Home => return self.move_focus(isize::MIN / 2),
            KeyCode::End => return self.move_focus(isize::MAX / 2),
            _ => {}
        }

        match self.rendered.get(self.focus).cloned() {
            Some(Row::Section(section)) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.toggle_section_at(self.focus),
                KeyCode::Left if section.open => self.toggle_section_at(self.focus),
                KeyCode::Right if !section.open => self.toggle_section_at(self.focus),
                KeyCode::Left | KeyCode::Right => EventResult::Consumed,
                KeyCode::Esc | KeyCode::Char('q') => EventResult::Quit,
                _ => EventResult::Ignored,
            },
            Some(Row::Field(field)) => self.field_key(&field, key),
            None => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => EventResult::Quit,
                _ => EventResult::Ignored,
            },
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp if self.menu.is_none() => return self.move_focus(-1),
            MouseEventKind::ScrollDown if self.menu.is_none() => return self.move_focus(1),
            _ => return EventResult::Ignored,
        }

        let pos = Pos::new(mouse.column, mouse.row);
        let Some(node) = self.hits.hit_test(pos).copied() else {
            return EventResult::Ignored;
        };
        match node.kind {
            NodeKind::MenuItem { index, .. } => self.activate_menu(index, false),
            _ if self.menu.is_some() => {
                self.menu = None;
                EventResult::Consumed
            }
            NodeKind::SectionHeader { row } => {
                self.set_focus(row);
                self.toggle_section_at(row)
            }
            NodeKind::Toggle { row } => {
                self.set_focus(row);
                match self.rendered.get(row).and_then(Row::as_field).cloned() {
                    Some(field) => match field.control {
                        Control::Toggle { on } => self.apply(&field, Edit::Toggle(!on)),
                        _ => EventResult::Consumed,
                    },
                    None => EventResult::Consumed,
                }
            }
            NodeKind::PairSlot { row, slot } => {
                self.set_focus(row);
                if self.slot != slot {
                    self.slot = slot;
                    self.input = None;
                }
                EventResult::Consumed
            }
            NodeKind::FieldRow { row } => {
                self.set_focus(row);
                EventResult::Consumed
            }
            NodeKind::Unknown => EventResult::Ignored,
        }
    }

    /// Paints the grid, the status line and any open menu into `painter`, and
    /// records hit-test nodes for the next mouse event. Returns where the text
    /// cursor belongs, if a field is being typed into.
    pub fn paint(&mut self, screen: Rect, painter: &mut Painter) -> Option<Pos> {
        painter.clear();
        let mut hits = std::mem::take(&mut self.hits);
        hits.clear();

        let status_text = self.status_text();
        let menu_items = self.menu_items();
        let mut cursor = None;
        {
            let mut ui = Ui::new(screen, painter, &mut hits, &self.theme);
            let status = ui.take_bottom(1);
            let grid_area = ui.rect;
            self.viewport = grid_area.h;

            let mut view = PropertyGridView::new(&self.rendered);
            if !self.rendered.is_empty() {
                self.scroll = scroll_to_focus(&self.rendered, self.focus, self.scroll, grid_area.h);
                view.focus = Some(self.focus);
            }
            view.scroll = self.scroll;
            view.slot = self.slot;
            view.input = self.input.as_deref();
            view.ui(&mut ui);
            cursor = view.cursor;

            paint_status(&mut ui, status, &status_text);

            if let Some(menu) = self.menu {
                let anchor = menu_anchor(&*ui.tree, menu.row)
                    .unwrap_or(Pos::new(grid_area.x, grid_area.y));
                let mut popup = Menu {
                    id_base: IdPath::root("propgrid.menu"),
                    menu_id: MENU_ID,
                    layer: MENU_LAYER,
                    anchor,
                    items: &menu_items,
                    selected: menu.selected,
                    styles: MenuStyles::from_theme(&self.theme),
                };
                ui.with_rect(screen, |ui| popup.ui(ui));
                cursor = None;
            }
        }
        self.hits = hits;
        cursor
    }

    fn refresh(&mut self) {
        self.rendered = self.grid.render(&self.object);
        let last = self.rendered.len().saturating_sub(1);
        if self.focus > last {
            self.set_focus(last);
        }
        if let Some(menu) = self.menu {
            let still_choice = matches!(
                self.rendered.get(menu.row).and_then(Row::as_field).map(|f| &f.control),
                Some(Control::Select { .. } | Control::MultiSelect { .. })
            );
            if !still_choice {
                self.menu = None;
            }
        }
    }

    fn set_focus(&mut self, row: usize) {
        if row != self.focus {
            self.focus = row;
            self.slot = 0;
            self.input = None;
        }
    }

    fn move_focus(&mut self, delta: isize) -> EventResult {
        if self.rendered.is_empty() {
            return EventResult::Ignored;
        }
        let last = self.rendered.len() - 1;
        let next = (self.focus as isize).saturating_add(delta).clamp(0, last as isize) as usize;
        self.set_focus(next);
        EventResult::Consumed
    }

    fn toggle_section_at(&mut self, row: usize) -> EventResult {
        let Some(section) = self.rendered.get(row).and_then(Row::as_section) else {
            return EventResult::Ignored;
        };
        self.grid.toggle_section(section.id);
        self.refresh();
        EventResult::Consumed
    }

    fn field_key(&mut self, row: &FieldRow, key: KeyEvent) -> EventResult {
        let typeable = matches!(
            row.control,
            Control::Number { .. } | Control::Text { .. } | Control::ValuePair { .. }
        );
        if key.code == KeyCode::Esc {
            if self.input.take().is_some() {
                return EventResult::Consumed;
            }
            return EventResult::Quit;
        }
        if (!typeable || row.disabled) && key.typed_char() == Some('q') {
            return EventResult::Quit;
        }
        if row.disabled {
            return EventResult::Ignored;
        }

        match (&row.control, key.code) {
            (Control::Toggle { on }, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.apply(row, Edit::Toggle(!on))
            }
            (Control::Select { .. }, KeyCode::Left | KeyCode::Right) => {
                let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                match row.control.cycled_choice(delta) {
                    Some(index) => self.apply(row, Edit::Choose(index)),
                    None => EventResult::Consumed,
                }
            }
            (
                Control::Select { .. } | Control::MultiSelect { .. },
                KeyCode::Enter | KeyCode::Char(' '),
            ) => self.open_menu(row),
            (
                Control::ValuePair { .. } | Control::SliderPair { .. },
                KeyCode::Tab | KeyCode::BackTab,
            ) => {
                self.slot = 1 - self.slot.min(1);
                self.input = None;
                EventResult::Consumed
            }
            (Control::SliderPair { bounds, range }, KeyCode::Left | KeyCode::Right) => {
                let steps = if key.code == KeyCode::Left { -1 } else { 1 };
                let next = nudge_slider(*range, self.slot, steps, bounds);
                if next == *range {
                    return EventResult::Consumed;
                }
                self.apply(row, Edit::SliderRange(next))
            }
            (Control::Number { text } | Control::Text { text }, _) => {
                let current = text.clone();
                self.type_key(row, current, key)
            }
            (Control::ValuePair { pair }, _) => {
                let current = display_text(&pair[self.slot.min(1)]);
                self.type_key(row, current, key)
            }
            _ => EventResult::Ignored,
        }
    }

    fn type_key(&mut self, row: &FieldRow, current: String, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                self.input = None;
                EventResult::Consumed
            }
            KeyCode::Backspace => {
                let mut buf = self.input.take().unwrap_or(current);
                buf.pop();
                self.commit_text(row, buf)
            }
            _ => match key.typed_char() {
                Some(ch) => {
                    let mut buf = self.input.take().unwrap_or(current);
                    buf.push(ch);
                    self.commit_text(row, buf)
                }
                None => EventResult::Ignored,
            },
        }
    }

    fn paste(&mut self, text: &str) -> EventResult {
        if self.menu.is_some() {
            return EventResult::Ignored;
        }
        let Some(row) = self.rendered.get(self.focus).and_then(Row::as_field).cloned() else {
            return EventResult::Ignored;
        };
        if row.disabled {
            return EventResult::Ignored;
        }
        let current = match &row.control {
            Control::Number { text } | Control::Text { text } => text.clone(),
            Control::ValuePair { pair } => display_text(&pair[self.slot.min(1)]),
            _ => return EventResult::Ignored,
        };
        let mut buf = self.input.take().unwrap_or(current);
        buf.extend(text.chars().filter(|c| !c.is_control()));
        self.commit_text(&row, buf)
    }

    /// Commits the typed buffer. Text that is not a number yet (a lone `-`)
    /// stays in the buffer without touching the object.
    fn commit_text(&mut self, row: &FieldRow, buf: String) -> EventResult {
        let edit = match row.control {
            Control::Number { .. } => Edit::Number(buf.clone()),
            Control::Text { .. } => Edit::Text(buf.clone()),
            Control::ValuePair { .. } => Edit::PairComponent {
                index: self.slot.min(1),
                input: buf.clone(),
            },
            _ => return EventResult::Ignored,
        };
        self.input = Some(buf);
        self.apply(row, edit)
    }

    fn apply(&mut self, row: &FieldRow, edit: Edit) -> EventResult {
        let mut changed = false;
        self.grid
            .edit(row, edit, &mut self.object, &mut |_| changed = true);
        if changed {
            self.dirty = true;
            self.message = None;
        }
        self.refresh();
        EventResult::Consumed
    }

    fn open_menu(&mut self, row: &FieldRow) -> EventResult {
        let selected = match &row.control {
            Control::Select { options, selected } if !options.is_empty() => selected.unwrap_or(0),
            Control::MultiSelect { options, .. } if !options.is_empty() => 0,
            _ => return EventResult::Consumed,
        };
        self.menu = Some(ChoiceMenu {
            row: self.focus,
            selected,
        });
        EventResult::Consumed
    }

    fn menu_items(&self) -> Vec<MenuItem> {
        let Some(menu) = self.menu else {
            return Vec::new();
        };
        match self.rendered.get(menu.row).and_then(Row::as_field).map(|f| &f.control) {
            Some(Control::Select { options, .. }) => {
                options.iter().map(|o| MenuItem::plain(o.label.clone())).collect()
            }
            Some(Control::MultiSelect { options, selected }) => options
                .iter()
                .map(|o| MenuItem::check(o.label.clone(), selected.contains(&o.value)))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn menu_key(&mut self, key: KeyEvent) -> EventResult {
        let len = self.menu_items().len();
        let Some(menu) = self.menu.as_mut() else {
            return EventResult::Ignored;
        };
        if len == 0 {
            self.menu = None;
            return EventResult::Consumed;
        }
        match key.code {
            KeyCode::Up => menu.selected = (menu.selected + len - 1) % len,
            KeyCode::Down => menu.selected = (menu.selected + 1) % len,
            KeyCode::Home => menu.selected = 0,
            KeyCode::End => menu.selected = len - 1,
            KeyCode::Esc => self.menu = None,
            KeyCode::Enter => {
                let index = menu.selected;
                return self.activate_menu(index, true);
            }
            KeyCode::Char(' ') => {
                let index = menu.selected;
                return self.activate_menu(index, false);
            }
            _ => {}
        }
        EventResult::Consumed
    }

    /// Picks entry `index`. Single choices commit and close; multi choices
    /// flip the entry, or close when `close_multi` is set.
    fn activate_menu(&mut self, index: usize, close_multi: bool) -> EventResult {
        let Some(menu) = self.menu else {
            return EventResult::Ignored;
        };
        let Some(row) = self.rendered.get(menu.row).and_then(Row::as_field).cloned() else {
            self.menu = None;
            return EventResult::Consumed;
        };
        match &row.control {
            Control::Select { .. } => {
                self.menu = None;
                self.apply(&row, Edit::Choose(index))
            }
            Control::MultiSelect { .. } if close_multi => {
                self.menu = None;
                EventResult::Consumed
            }
            Control::MultiSelect { .. } => {
                if let Some(m) = self.menu.as_mut() {
                    m.selected = index;
                }
                match row.control.toggled_selection(index) {
                    Some(next) => self.apply(&row, Edit::ChooseMany(next)),
                    None => EventResult::Consumed,
                }
            }
            _ => {
                self.menu = None;
                EventResult::Consumed
            }
        }
    }

    fn cycle_theme(&mut self) -> EventResult {
        if self.themes.is_empty() {
            return EventResult::Ignored;
        }
        self.theme_index = (self.theme_index + 1) % self.themes.len();
        let (name, theme) = &self.themes[self.theme_index];
        self.theme = theme.clone();
        let name = name.clone();
        self.message = Some(format!("Theme: {}", display_name(&name)));
        EventResult::ThemeChanged(name)
    }
}

fn menu_anchor(tree: &UiTree, row: usize) -> Option<Pos> {
    let node = tree
        .nodes()
        .iter()
        .find(|n| n.kind == NodeKind::FieldRow { row })?;
    let split = (u32::from(node.rect.w) * LABEL_PERCENT / 100) as u16;
    Some(Pos::new(
        node.rect.x.saturating_add(split).saturating_add(1),
        node.rect.y.saturating_add(1),
    ))
}

fn paint_status(ui: &mut Ui, rect: Rect, text: &str) {
    if rect.is_empty() {
        return;
    }
    let style = Style::default()
        .fg(ui.theme.color(Token::StatusFg))
        .bg(ui.theme.color(Token::StatusBg));
    ui.painter.fill_rect(rect, style);
    ui.painter.text_in(rect, format!(" {text}"), style);

    let hint_w = KEY_HINT.width() as u16;
    let used = text.width() as u16 + 1;
    if rect.w > used.saturating_add(hint_w).saturating_add(4) {
        let pos = Pos::new(rect.right() - hint_w - 1, rect.y);
        ui.painter.text(pos, KEY_HINT, style.add_mod(Mod::DIM));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/editor.rs"]
mod tests;
