//! Section tree walk, effective disablement and per-node UI state.
//!
//! Node identity is the hashed path from the root (`IdPath`): root index and title for
//! sections, child index and title below that, and the key for fields. `GridState`
//! holds the open flag of every mounted section and the validation error of every
//! mounted field. A node is mounted while all of its ancestors are open; state of
//! nodes that stop being mounted is dropped at the end of the walk.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::control::{build_control, Control};
use super::field::{get_display_value, FieldKind};
use super::schema::{Schema, Section};
use crate::ui::core::id::{Id, IdPath};

const ID_NAMESPACE: &str = "propgrid";

/// `global || ancestor || section.disabled`.
pub fn effective_disabled(section: &Section, ancestor_disabled: bool, global_disabled: bool) -> bool {
    global_disabled || ancestor_disabled || section.disabled
}

pub fn root_path(index: usize, title: &str) -> IdPath {
    IdPath::root(ID_NAMESPACE)
        .push_u64(index as u64)
        .push_str(title)
}

pub fn child_path(parent: IdPath, index: usize, title: &str) -> IdPath {
    parent.push_str("child").push_u64(index as u64).push_str(title)
}

pub fn field_id(section: IdPath, key: &str) -> Id {
    section.push_str("field").push_str(key).finish()
}

#[derive(Debug, Default)]
pub struct GridState {
    open: HashMap<Id, bool>,
    errors: HashMap<Id, String>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: Id) -> Option<bool> {
        self.open.get(&id).copied()
    }

    /// Seeds the open flag on first sight; later calls keep the existing value.
    pub fn open_or_seed(&mut self, id: Id, collapsed: bool) -> bool {
        *self.open.entry(id).or_insert(!collapsed)
    }

    /// Flips a mounted section. Returns the new state, `None` for unknown ids.
    pub fn toggle(&mut self, id: Id) -> Option<bool> {
        let open = self.open.get_mut(&id)?;
        *open = !*open;
        Some(*open)
    }

    pub fn error(&self, id: Id) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }

    pub fn set_error(&mut self, id: Id, error: Option<String>) {
        match error {
            Some(msg) => {
                self.errors.insert(id, msg);
            }
            None => {
                self.errors.remove(&id);
            }
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.open.clear();
        self.errors.clear();
    }

    fn retain_mounted(&mut self, mounted: &HashSet<Id>) {
        let before = self.open.len() + self.errors.len();
        self.open.retain(|id, _| mounted.contains(id));
        self.errors.retain(|id, _| mounted.contains(id));
        let dropped = before - (self.open.len() + self.errors.len());
        if dropped > 0 {
            tracing::debug!(dropped, "discarded state of unmounted nodes");
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionRow {
    pub id: Id,
    pub path: Vec<usize>,
    pub title: String,
    pub depth: usize,
    pub open: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldRow {
    pub id: Id,
    /// Index path of the owning section.
    pub section: Vec<usize>,
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub depth: usize,
    pub control: Control,
    pub disabled: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Row {
    Section(SectionRow),
    Field(FieldRow),
}

impl Row {
    pub fn id(&self) -> Id {
        match self {
            Row::Section(s) => s.id,
            Row::Field(f) => f.id,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Row::Section(s) => s.depth,
            Row::Field(f) => f.depth,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            Row::Section(s) => s.disabled,
            Row::Field(f) => f.disabled,
        }
    }

    pub fn as_field(&self) -> Option<&FieldRow> {
        match self {
            Row::Field(f) => Some(f),
            Row::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&SectionRow> {
        match self {
            Row::Section(s) => Some(s),
            Row::Field(_) => None,
        }
    }
}

/// Depth-first flattening of everything currently mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedTree {
    rows: Vec<Row>,
}

impl RenderedTree {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldRow> {
        self.rows.iter().filter_map(Row::as_field)
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionRow> {
        self.rows.iter().filter_map(Row::as_section)
    }

    pub fn field(&self, id: Id) -> Option<&FieldRow> {
        self.fields().find(|f| f.id == id)
    }

    pub fn section(&self, id: Id) -> Option<&SectionRow> {
        self.sections().find(|s| s.id == id)
    }

    /// First mounted field with `key` under the section titled `section`.
    pub fn find_field(&self, section: &str, key: &str) -> Option<&FieldRow> {
        let sections: Vec<&SectionRow> = self.sections().collect();
        self.fields().find(|f| {
            f.key == key
                && sections
                    .iter()
                    .any(|s| s.path == f.section && s.title == section)
        })
    }

    pub fn find_section(&self, title: &str) -> Option<&SectionRow> {
        self.sections().find(|s| s.title == title)
    }
}

/// Walks `schema` against `object`, seeding and pruning `state`.
pub fn render_grid(
    schema: &Schema,
    object: &Value,
    state: &mut GridState,
    global_disabled: bool,
) -> RenderedTree {
    let mut walker = Walker {
        object,
        state,
        global_disabled,
        rows: Vec::new(),
        mounted: HashSet::new(),
    };
    for (idx, root) in schema.roots().iter().enumerate() {
        let mut path = vec![idx];
        walker.section(root, root_path(idx, &root.title), &mut path, 0, false);
    }

    let Walker { rows, mounted, state, .. } = walker;
    state.retain_mounted(&mounted);
    RenderedTree { rows }
}

struct Walker<'a> {
    object: &'a Value,
    state: &'a mut GridState,
    global_disabled: bool,
    rows: Vec<Row>,
    mounted: HashSet<Id>,
}

impl Walker<'_> {
    fn section(
        &mut self,
        section: &Section,
        id_path: IdPath,
        path: &mut Vec<usize>,
        depth: usize,
        ancestor_disabled: bool,
    ) {
        let id = id_path.finish();
        let disabled = effective_disabled(section, ancestor_disabled, self.global_disabled);
        let open = self.state.open_or_seed(id, section.collapsed);
        self.mounted.insert(id);

        self.rows.push(Row::Section(SectionRow {
            id,
            path: path.clone(),
            title: section.title.clone(),
            depth,
            open,
            disabled,
        }));

        if !open {
            return;
        }

        for (key, field) in section.fields() {
            let fid = field_id(id_path, key);
            self.mounted.insert(fid);
            let control = match &field.kind {
                FieldKind::Unknown(tag) => Control::Unsupported { tag: tag.clone() },
                _ => build_control(field, &get_display_value(field, self.object, key)),
            };
            self.rows.push(Row::Field(FieldRow {
                id: fid,
                section: path.clone(),
                key: key.to_string(),
                label: field.label.clone(),
                kind: field.kind.clone(),
                depth: depth + 1,
                control,
                disabled: disabled || field.disabled,
                error: self.state.error(fid).map(str::to_string),
            }));
        }

        for (idx, child) in section.children.iter().enumerate() {
            path.push(idx);
            self.section(child, child_path(id_path, idx, &child.title), path, depth + 1, disabled);
            path.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/tree.rs"]
mod tests;
