//! Field model: how a single value is read, shown, parsed back, written and validated.
//!
//! Nothing in here knows about rendering. The three optional capabilities of a field
//! (`Accessor`, `DisplayTransform`, `Validator`) are explicit records holding closures;
//! a field without them reads and writes `object[key]` verbatim.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value;

/// Canonical editing behavior of a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Boolean,
    Number,
    Text,
    SingleChoice,
    MultiChoice,
    /// Two free-form numeric inputs, `[min, max]`.
    ValuePair,
    /// Dual-handle slider, `[min, max]`.
    SliderPair,
    /// A declared type this build does not know. Rendered as an inert placeholder.
    Unknown(String),
}

impl FieldKind {
    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unknown(_))
    }

    /// Canonical tag, the first spelling of the alias table.
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Number => "number",
            FieldKind::Text => "string",
            FieldKind::SingleChoice => "single-select",
            FieldKind::MultiChoice => "multi-select",
            FieldKind::ValuePair => "valueRange",
            FieldKind::SliderPair => "sliderRange",
            FieldKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Resolves a declared type spelling to its canonical kind.
///
/// The table is fixed. `range` is the two-box pair, never the slider.
pub fn kind_of(declared: &str) -> FieldKind {
    match declared.trim() {
        "boolean" | "bool" => FieldKind::Boolean,
        "number" => FieldKind::Number,
        "string" | "text" => FieldKind::Text,
        "select" | "single-select" | "singleSelect" => FieldKind::SingleChoice,
        "multi-select" | "multiSelect" => FieldKind::MultiChoice,
        "valueRange" | "range" => FieldKind::ValuePair,
        "sliderRange" | "rangeSlider" => FieldKind::SliderPair,
        other => FieldKind::Unknown(other.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: Value,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Normalizes raw option entries into `{value, label}` records, preserving order.
///
/// Scalars become `{value: v, label: String(v)}`. Maps carrying a `value` pass
/// through; a missing `label` falls back to the stringified value.
pub fn normalize_options(raw: &[Value]) -> Vec<ChoiceOption> {
    raw.iter()
        .map(|entry| match entry {
            Value::Object(map) if map.contains_key("value") => {
                let value = map.get("value").cloned().unwrap_or(Value::Null);
                let label = match map.get("label") {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) if !other.is_null() => value::label_text(other),
                    _ => value::label_text(&value),
                };
                ChoiceOption { value, label }
            }
            scalar => ChoiceOption {
                value: scalar.clone(),
                label: value::label_text(scalar),
            },
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max, step: 1.0 }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        if step > 0.0 && step.is_finite() {
            self.step = step;
        }
        self
    }

    pub fn clamp(&self, v: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        v.clamp(lo, hi)
    }

    /// Snaps `v` onto the step grid anchored at `min`.
    pub fn snap(&self, v: f64) -> f64 {
        let steps = ((v - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Keep decimal steps (0.01) from accumulating binary noise.
        (snapped * 1e9).round() / 1e9
    }

    /// `[min, max]` as JSON numbers, the default for pair-shaped fields.
    pub fn default_pair(&self) -> [Value; 2] {
        [value::number_value(self.min), value::number_value(self.max)]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

type ReadFn = dyn Fn(&Value) -> Value;
type WriteFn = dyn Fn(&mut Value, Value);
type TransformFn = dyn Fn(&Value, &Value) -> Value;
type ValidateFn = dyn Fn(&Value, &Value) -> Option<String>;

/// Explicit read/write pair overriding `object[key]` access.
#[derive(Clone)]
pub struct Accessor {
    read: Rc<ReadFn>,
    write: Rc<WriteFn>,
    pointer: Option<String>,
}

impl Accessor {
    pub fn new(
        read: impl Fn(&Value) -> Value + 'static,
        write: impl Fn(&mut Value, Value) + 'static,
    ) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
            pointer: None,
        }
    }

    /// Accessor bound to a JSON-pointer path such as `/camera/fovRange`.
    pub fn pointer(path: impl Into<String>) -> Self {
        let path = path.into();
        let read_path = path.clone();
        let write_path = path.clone();
        Self {
            read: Rc::new(move |obj: &Value| value::read_pointer(obj, &read_path)),
            write: Rc::new(move |obj: &mut Value, v: Value| {
                if !value::write_pointer(obj, &write_path, v) {
                    tracing::debug!(path = %write_path, "pointer write did not resolve");
                }
            }),
            pointer: Some(path),
        }
    }

    pub fn read(&self, object: &Value) -> Value {
        (self.read)(object)
    }

    pub fn write(&self, object: &mut Value, raw: Value) {
        (self.write)(object, raw)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pointer {
            Some(path) => f.debug_tuple("Accessor::pointer").field(path).finish(),
            None => f.write_str("Accessor(<closure>)"),
        }
    }
}

/// Bidirectional mapping between the stored value and what the control shows.
///
/// Must be inverse-consistent: `from_display(to_display(x)) == x` for every value
/// the object can legally hold.
#[derive(Clone)]
pub struct DisplayTransform {
    to_display: Rc<TransformFn>,
    from_display: Rc<TransformFn>,
}

impl DisplayTransform {
    pub fn new(
        to_display: impl Fn(&Value, &Value) -> Value + 'static,
        from_display: impl Fn(&Value, &Value) -> Value + 'static,
    ) -> Self {
        Self {
            to_display: Rc::new(to_display),
            from_display: Rc::new(from_display),
        }
    }

    /// Stored index <-> label. Unknown labels parse to `-1`, out-of-range
    /// indices display as `""`.
    pub fn index_labels(labels: Vec<String>) -> Self {
        let labels = Rc::new(labels);
        let shown = Rc::clone(&labels);
        Self::new(
            move |raw, _| {
                raw.as_u64()
                    .and_then(|i| shown.get(i as usize))
                    .map(|l| Value::String(l.clone()))
                    .unwrap_or_else(|| Value::String(String::new()))
            },
            move |ui, _| {
                let idx = ui
                    .as_str()
                    .and_then(|s| labels.iter().position(|l| l == s))
                    .map(|i| i as i64)
                    .unwrap_or(-1);
                Value::Number(idx.into())
            },
        )
    }

    pub fn to_display(&self, raw: &Value, object: &Value) -> Value {
        (self.to_display)(raw, object)
    }

    pub fn from_display(&self, ui: &Value, object: &Value) -> Value {
        (self.from_display)(ui, object)
    }
}

impl fmt::Debug for DisplayTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayTransform(<closures>)")
    }
}

/// Advisory check run after a value has been written back.
#[derive(Clone)]
pub struct Validator(Rc<ValidateFn>);

impl Validator {
    pub fn new(f: impl Fn(&Value, &Value) -> Option<String> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Runs the check. An empty message counts as success.
    pub fn check(&self, committed: &Value, object: &Value) -> Option<String> {
        (self.0)(committed, object).filter(|msg| !msg.is_empty())
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(<closure>)")
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    pub kind: FieldKind,
    pub label: String,
    pub options: Vec<ChoiceOption>,
    pub bounds: Bounds,
    pub accessor: Option<Accessor>,
    pub display: Option<DisplayTransform>,
    pub validate: Option<Validator>,
    pub disabled: bool,
}

impl Field {
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            options: Vec::new(),
            bounds: Bounds::default(),
            accessor: None,
            display: None,
            validate: None,
            disabled: false,
        }
    }

    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Boolean, label)
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Number, label)
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Text, label)
    }

    pub fn single_choice<I, V>(label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(FieldKind::SingleChoice, label).options(options)
    }

    pub fn multi_choice<I, V>(label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(FieldKind::MultiChoice, label).options(options)
    }

    pub fn value_pair(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(FieldKind::ValuePair, label).bounds(min, max)
    }

    pub fn slider_pair(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(FieldKind::SliderPair, label).bounds(min, max)
    }

    /// Raw option entries, scalars or `{value, label}` maps.
    pub fn options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let raw: Vec<Value> = options.into_iter().map(Into::into).collect();
        self.options = normalize_options(&raw);
        self
    }

    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Bounds {
            min,
            max,
            step: self.bounds.step,
        };
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.bounds = self.bounds.with_step(step);
        self
    }

    pub fn accessor(mut self, accessor: Accessor) -> Self {
        self.accessor = Some(accessor);
        self
    }

    pub fn path(self, pointer: impl Into<String>) -> Self {
        self.accessor(Accessor::pointer(pointer))
    }

    pub fn display(mut self, display: DisplayTransform) -> Self {
        self.display = Some(display);
        self
    }

    pub fn validate(mut self, f: impl Fn(&Value, &Value) -> Option<String> + 'static) -> Self {
        self.validate = Some(Validator::new(f));
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn read_raw(&self, object: &Value, key: &str) -> Value {
        match &self.accessor {
            Some(accessor) => accessor.read(object),
            None => value::read_key(object, key),
        }
    }

    fn write_raw(&self, object: &mut Value, key: &str, raw: Value) {
        match &self.accessor {
            Some(accessor) => accessor.write(object, raw),
            None => {
                if !value::write_key(object, key, raw) {
                    tracing::debug!(key, "object root is not a map; write skipped");
                }
            }
        }
    }
}

/// Result of one commit: the value that was written and the advisory error, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Committed {
    pub raw: Value,
    pub error: Option<String>,
}

/// The value a control shows for `field` on `object`.
pub fn get_display_value(field: &Field, object: &Value, key: &str) -> Value {
    let raw = field.read_raw(object, key);
    match &field.display {
        Some(display) => display.to_display(&raw, object),
        None => raw,
    }
}

/// Parse, write in place, validate. Does not notify anyone.
///
/// The write always happens; a validation failure only annotates it.
pub fn commit(field: &Field, object: &mut Value, key: &str, ui_value: Value) -> Committed {
    let parsed = match &field.display {
        Some(display) => display.from_display(&ui_value, object),
        None => ui_value,
    };

    field.write_raw(object, key, parsed.clone());

    let error = field
        .validate
        .as_ref()
        .and_then(|validator| validator.check(&parsed, object));

    Committed { raw: parsed, error }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/field.rs"]
mod tests;
