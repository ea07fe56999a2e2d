use super::field::Field;

/// A named, collapsible, independently disablable group of fields and nested sections.
#[derive(Clone, Debug, Default)]
pub struct Section {
    pub title: String,
    fields: Vec<(String, Field)>,
    pub children: Vec<Section>,
    pub collapsed: bool,
    pub disabled: bool,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Adds a field. Keys are unique within the section: re-adding a key replaces the
    /// field in place and keeps its display position.
    pub fn field(mut self, key: impl Into<String>, field: Field) -> Self {
        self.insert_field(key, field);
        self
    }

    pub fn child(mut self, child: Section) -> Self {
        self.children.push(child);
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn insert_field(&mut self, key: impl Into<String>, field: Field) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((key, field)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn get_field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// One root section or an ordered sequence of them.
#[derive(Clone, Debug)]
pub enum Schema {
    Single(Section),
    Many(Vec<Section>),
}

impl Schema {
    pub fn roots(&self) -> &[Section] {
        match self {
            Schema::Single(section) => std::slice::from_ref(section),
            Schema::Many(sections) => sections,
        }
    }

    /// Resolves a section by its index path (root index, then child indices).
    pub fn section_at(&self, path: &[usize]) -> Option<&Section> {
        let (first, rest) = path.split_first()?;
        let mut cur = self.roots().get(*first)?;
        for idx in rest {
            cur = cur.children.get(*idx)?;
        }
        Some(cur)
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::Many(Vec::new())
    }
}

impl From<Section> for Schema {
    fn from(section: Section) -> Self {
        Schema::Single(section)
    }
}

impl From<Vec<Section>> for Schema {
    fn from(sections: Vec<Section>) -> Self {
        Schema::Many(sections)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/schema.rs"]
mod tests;
