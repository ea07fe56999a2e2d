//! Object access helpers over `serde_json::Value`.
//!
//! The edited object is plain JSON owned by the host. Everything here is a pure
//! function of its inputs except the `write_*` helpers, which mutate only the
//! slot they address.

use serde_json::{Map, Number, Value};

/// Reads `object[key]`, `Null` when the slot is missing or `object` is not a map.
pub fn read_key(object: &Value, key: &str) -> Value {
    object.get(key).cloned().unwrap_or(Value::Null)
}

/// Writes `object[key] = value` in place.
///
/// A `Null` root is promoted to an empty map first. Any other non-map root is
/// left untouched and `false` is returned.
pub fn write_key(object: &mut Value, key: &str, value: Value) -> bool {
    if object.is_null() {
        *object = Value::Object(Map::new());
    }
    match object.as_object_mut() {
        Some(map) => {
            map.insert(key.to_string(), value);
            true
        }
        None => false,
    }
}

/// Reads a JSON-pointer path (`/camera/fovRange`), `Null` when it does not resolve.
pub fn read_pointer(object: &Value, pointer: &str) -> Value {
    object.pointer(pointer).cloned().unwrap_or(Value::Null)
}

/// Writes through a JSON-pointer path, creating missing intermediate maps.
///
/// Array segments must address an existing index. Returns `false` when the path
/// runs through a scalar or an out-of-range index.
pub fn write_pointer(object: &mut Value, pointer: &str, value: Value) -> bool {
    if pointer.is_empty() {
        *object = value;
        return true;
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return false;
    };

    let tokens: Vec<String> = rest.split('/').map(unescape_token).collect();
    let Some((last, parents)) = tokens.split_last() else {
        return false;
    };

    let mut cur = object;
    for token in parents {
        if cur.is_null() {
            *cur = Value::Object(Map::new());
        }
        cur = match cur {
            Value::Object(map) => map
                .entry(token.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(items) => {
                let Some(slot) = token.parse::<usize>().ok().and_then(|i| items.get_mut(i))
                else {
                    return false;
                };
                slot
            }
            _ => return false,
        };
    }

    if cur.is_null() {
        *cur = Value::Object(Map::new());
    }
    match cur {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            true
        }
        Value::Array(items) => match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn unescape_token(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Number coercion for numeric inputs.
///
/// - `""` stays the empty-string sentinel (value being edited, not yet a number);
/// - anything that parses becomes a JSON number (integers stay integers);
/// - anything else is not committable yet and yields `None`.
pub fn coerce_number(input: &str) -> Option<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(Value::String(String::new()));
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    let f = trimmed.parse::<f64>().ok()?;
    if !f.is_finite() {
        return None;
    }
    Some(number_value(f))
}

/// Converts an `f64` into a JSON number, keeping integral values integral.
pub fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Value::Number((f as i64).into());
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

pub fn as_f64(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// JavaScript-style truthiness, used by toggles (`!!value`).
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown in an input box for `value` (`value ?? ''`).
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => label_text(other),
    }
}

/// `String(value)` for option labels and chips.
pub fn label_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(label_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/value.rs"]
mod tests;
