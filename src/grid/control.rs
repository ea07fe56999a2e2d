//! Per-kind control dispatch.
//!
//! `build_control` turns a field's display value into the state a control shows,
//! repairing shape mismatches with defaults. `ui_value_for` turns a user `Edit` into
//! the UI value handed to `field::commit`. Both match exhaustively on `FieldKind`.

use serde_json::Value;

use super::field::{Bounds, ChoiceOption, Field, FieldKind};
use super::value;

#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Toggle {
        on: bool,
    },
    Number {
        text: String,
    },
    Text {
        text: String,
    },
    Select {
        options: Vec<ChoiceOption>,
        selected: Option<usize>,
    },
    MultiSelect {
        options: Vec<ChoiceOption>,
        selected: Vec<Value>,
    },
    ValuePair {
        pair: [Value; 2],
    },
    SliderPair {
        bounds: Bounds,
        range: [f64; 2],
    },
    Unsupported {
        tag: String,
    },
}

/// A user interaction on one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Edit {
    Toggle(bool),
    /// Raw text typed into a number box.
    Number(String),
    Text(String),
    /// Index into the field's options.
    Choose(usize),
    /// Full replacement selection for a multi choice.
    ChooseMany(Vec<Value>),
    /// One slot of a value pair, as typed.
    PairComponent { index: usize, input: String },
    SliderRange([f64; 2]),
}

impl Control {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Control::Unsupported { .. })
    }

    /// Short text rendering of the current value, for status lines and tests.
    pub fn summary(&self) -> String {
        match self {
            Control::Toggle { on } => on.to_string(),
            Control::Number { text } | Control::Text { text } => text.clone(),
            Control::Select { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| o.label.clone())
                .unwrap_or_default(),
            Control::MultiSelect { options, selected } => selected
                .iter()
                .map(|v| option_label(options, v))
                .collect::<Vec<_>>()
                .join(", "),
            Control::ValuePair { pair } => format!(
                "{} .. {}",
                value::display_text(&pair[0]),
                value::display_text(&pair[1])
            ),
            Control::SliderPair { range, .. } => format!("{} .. {}", range[0], range[1]),
            Control::Unsupported { .. } => "Unsupported".to_string(),
        }
    }

    /// Selection after flipping option `index` of a multi choice.
    ///
    /// Newly selected values are appended; deselected values are removed. The result
    /// never contains duplicates.
    pub fn toggled_selection(&self, index: usize) -> Option<Vec<Value>> {
        let Control::MultiSelect { options, selected } = self else {
            return None;
        };
        let opt = options.get(index)?;
        let mut next: Vec<Value> = Vec::with_capacity(selected.len() + 1);
        let mut removed = false;
        for v in selected {
            if *v == opt.value {
                removed = true;
            } else if !next.contains(v) {
                next.push(v.clone());
            }
        }
        if !removed {
            next.push(opt.value.clone());
        }
        Some(next)
    }

    /// Index of the option `delta` steps away from the current one, wrapping around.
    pub fn cycled_choice(&self, delta: isize) -> Option<usize> {
        let Control::Select { options, selected } = self else {
            return None;
        };
        if options.is_empty() {
            return None;
        }
        let len = options.len() as isize;
        let next = match selected {
            Some(cur) => (*cur as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        Some(next as usize)
    }
}

/// Label for a stored option value, falling back to `String(value)`.
pub fn option_label(options: &[ChoiceOption], v: &Value) -> String {
    options
        .iter()
        .find(|o| o.value == *v)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| value::label_text(v))
}

/// Value-pair shape repair: two-element arrays pass through, `{min, max}` maps
/// become pairs, everything else falls back to the bounds.
pub fn normalize_value_pair(display: &Value, bounds: &Bounds) -> [Value; 2] {
    match display {
        Value::Array(items) if items.len() == 2 => [items[0].clone(), items[1].clone()],
        Value::Object(map) => match (map.get("min"), map.get("max")) {
            (Some(min), Some(max)) => [min.clone(), max.clone()],
            _ => bounds.default_pair(),
        },
        _ => bounds.default_pair(),
    }
}

/// Slider shape repair: exactly two numbers, otherwise the bounds.
pub fn normalize_slider_pair(display: &Value, bounds: &Bounds) -> [f64; 2] {
    match display {
        Value::Array(items) if items.len() == 2 => {
            match (items[0].as_f64(), items[1].as_f64()) {
                (Some(lo), Some(hi)) => [lo, hi],
                _ => [bounds.min, bounds.max],
            }
        }
        _ => [bounds.min, bounds.max],
    }
}

/// Moves one slider handle by `steps` steps, clamped to the bounds and to the
/// other handle so the range never inverts.
pub fn nudge_slider(range: [f64; 2], handle: usize, steps: i32, bounds: &Bounds) -> [f64; 2] {
    let mut next = range;
    let handle = handle.min(1);
    let moved = bounds.snap(bounds.clamp(range[handle] + f64::from(steps) * bounds.step));
    next[handle] = if handle == 0 {
        moved.min(range[1])
    } else {
        moved.max(range[0])
    };
    next
}

pub fn build_control(field: &Field, display: &Value) -> Control {
    match &field.kind {
        FieldKind::Boolean => Control::Toggle {
            on: value::truthy(display),
        },
        FieldKind::Number => Control::Number {
            text: value::display_text(display),
        },
        FieldKind::Text => Control::Text {
            text: value::display_text(display),
        },
        FieldKind::SingleChoice => Control::Select {
            options: field.options.clone(),
            selected: field.options.iter().position(|o| o.value == *display),
        },
        FieldKind::MultiChoice => Control::MultiSelect {
            options: field.options.clone(),
            selected: match display {
                Value::Array(items) => items.clone(),
                _ => Vec::new(),
            },
        },
        FieldKind::ValuePair => Control::ValuePair {
            pair: normalize_value_pair(display, &field.bounds),
        },
        FieldKind::SliderPair => Control::SliderPair {
            bounds: field.bounds,
            range: normalize_slider_pair(display, &field.bounds),
        },
        FieldKind::Unknown(tag) => Control::Unsupported { tag: tag.clone() },
    }
}

/// Converts an edit into the UI value to commit.
///
/// `None` means nothing to commit: the edit does not fit the field's kind, the kind
/// is unknown, or a number box holds text that is not a number yet.
pub fn ui_value_for(field: &Field, display: &Value, edit: Edit) -> Option<Value> {
    match (&field.kind, edit) {
        (FieldKind::Boolean, Edit::Toggle(on)) => Some(Value::Bool(on)),
        (FieldKind::Number, Edit::Number(input)) => value::coerce_number(&input),
        (FieldKind::Text, Edit::Text(text)) => Some(Value::String(text)),
        (FieldKind::SingleChoice, Edit::Choose(index)) => {
            field.options.get(index).map(|o| o.value.clone())
        }
        (FieldKind::MultiChoice, Edit::ChooseMany(values)) => {
            let mut out: Vec<Value> = Vec::with_capacity(values.len());
            for v in values {
                if !out.contains(&v) {
                    out.push(v);
                }
            }
            Some(Value::Array(out))
        }
        (FieldKind::ValuePair, Edit::PairComponent { index, input }) => {
            if index > 1 {
                return None;
            }
            let mut pair = normalize_value_pair(display, &field.bounds);
            pair[index] = value::coerce_number(&input)?;
            Some(Value::Array(pair.to_vec()))
        }
        (FieldKind::SliderPair, Edit::SliderRange([lo, hi])) => Some(Value::Array(vec![
            value::number_value(lo),
            value::number_value(hi),
        ])),
        (FieldKind::Unknown(_), _) => None,
        (kind, edit) => {
            tracing::debug!(%kind, ?edit, "edit does not fit field kind");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/control.rs"]
mod tests;
