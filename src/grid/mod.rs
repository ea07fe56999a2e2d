//! Schema-driven property grid.
//!
//! The grid never owns the edited object. `render` reads it to build a
//! `RenderedTree`; `edit` turns one user interaction into a commit on the
//! caller's object and notifies the caller exactly once.

pub mod control;
pub mod field;
pub mod loader;
pub mod schema;
pub mod tree;
pub mod value;

pub use control::{Control, Edit};
pub use field::{
    commit, get_display_value, kind_of, Accessor, Bounds, ChoiceOption, Committed,
    DisplayTransform, Field, FieldKind, Validator,
};
pub use loader::{load_schema, parse_schema, SchemaError};
pub use schema::{Schema, Section};
pub use tree::{
    effective_disabled, render_grid, FieldRow, GridState, RenderedTree, Row, SectionRow,
};

use serde_json::Value;

use crate::ui::core::id::Id;

pub struct PropertyGrid {
    schema: Schema,
    state: GridState,
    disabled: bool,
    revision: u64,
}

impl PropertyGrid {
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self {
            schema: schema.into(),
            state: GridState::new(),
            disabled: false,
            revision: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Swaps the schema. Nodes whose identity survives keep their state; the rest
    /// is dropped on the next render.
    pub fn set_schema(&mut self, schema: impl Into<Schema>) {
        self.schema = schema.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Number of commits so far. Bumped once per successful `edit`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render(&mut self, object: &Value) -> RenderedTree {
        render_grid(&self.schema, object, &mut self.state, self.disabled)
    }

    pub fn toggle_section(&mut self, id: Id) -> Option<bool> {
        let open = self.state.toggle(id);
        if open.is_none() {
            tracing::debug!(id = id.0, "toggle on a section that is not mounted");
        }
        open
    }

    /// Applies `edit` to the field behind `row` and commits it into `object`.
    ///
    /// Returns `None` and leaves `object` alone when the field is disabled, no
    /// longer mounted, of unknown kind, or `edit` does not fit its kind.
    pub fn edit(
        &mut self,
        row: &FieldRow,
        edit: Edit,
        object: &mut Value,
        on_change: &mut dyn FnMut(&Value),
    ) -> Option<Committed> {
        let Some((field, disabled)) = self.resolve(row) else {
            tracing::debug!(key = %row.key, "edit on a field that is not mounted");
            return None;
        };
        if disabled {
            tracing::debug!(key = %row.key, "edit on a disabled field ignored");
            return None;
        }
        if !field.kind.is_supported() {
            return None;
        }

        let display = get_display_value(field, object, &row.key);
        let ui_value = control::ui_value_for(field, &display, edit)?;
        let committed = commit(field, object, &row.key, ui_value);

        if let Some(error) = &committed.error {
            tracing::debug!(key = %row.key, %error, "validation failed");
        }
        self.state.set_error(row.id, committed.error.clone());
        self.revision += 1;
        on_change(object);
        Some(committed)
    }

    /// Finds the live field for `row` and its effective disabled flag.
    ///
    /// The row must still match the schema by identity and every section on its
    /// path must be open.
    fn resolve(&self, row: &FieldRow) -> Option<(&Field, bool)> {
        let (first, rest) = row.section.split_first()?;
        let mut section = self.schema.roots().get(*first)?;
        let mut id_path = tree::root_path(*first, &section.title);
        let mut disabled = effective_disabled(section, false, self.disabled);
        if self.state.is_open(id_path.finish()) != Some(true) {
            return None;
        }
        for idx in rest {
            section = section.children.get(*idx)?;
            id_path = tree::child_path(id_path, *idx, &section.title);
            disabled = effective_disabled(section, disabled, self.disabled);
            if self.state.is_open(id_path.finish()) != Some(true) {
                return None;
            }
        }
        if tree::field_id(id_path, &row.key) != row.id {
            return None;
        }
        let field = section.get_field(&row.key)?;
        Some((field, disabled || field.disabled))
    }
}

impl Default for PropertyGrid {
    fn default() -> Self {
        Self::new(Schema::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/grid.rs"]
mod tests;
