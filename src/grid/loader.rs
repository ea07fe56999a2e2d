//! Declarative JSON schema files.
//!
//! A file holds one section object or an array of them. Fields are a JSON object
//! whose key order is the display order. Validation is a list of rules; the first
//! failing rule produces the message.

use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::field::{kind_of, DisplayTransform, Field, Validator};
use super::schema::{Schema, Section};
use super::value;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug)]
pub enum SchemaError {
    Io(PathBuf, io::Error),
    Json(serde_json::Error),
    InvalidField { section: String, key: String, reason: String },
    InvalidPattern { key: String, source: regex::Error },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::Io(p, e) => write!(f, "Cannot read {}: {}", p.display(), e),
            SchemaError::Json(e) => write!(f, "Malformed schema: {}", e),
            SchemaError::InvalidField {
                section,
                key,
                reason,
            } => write!(f, "Invalid field {}.{}: {}", section, key, reason),
            SchemaError::InvalidPattern { key, source } => {
                write!(f, "Invalid pattern on {}: {}", key, source)
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Io(_, e) => Some(e),
            SchemaError::Json(e) => Some(e),
            SchemaError::InvalidPattern { source, .. } => Some(source),
            SchemaError::InvalidField { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Json(e)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDecl {
    One(SectionDecl),
    Many(Vec<SectionDecl>),
}

#[derive(Deserialize)]
struct SectionDecl {
    #[serde(alias = "title")]
    section: String,
    #[serde(default)]
    fields: Map<String, Value>,
    #[serde(default)]
    children: Vec<SectionDecl>,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    disabled: bool,
}

#[derive(Deserialize)]
struct FieldDecl {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    options: Vec<Value>,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    step: Option<f64>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    display: Option<DisplayDecl>,
    #[serde(default)]
    validate: Vec<RuleDecl>,
    #[serde(default)]
    disabled: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplayDecl {
    index_labels: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
enum RuleDecl {
    Required {
        message: Option<String>,
    },
    Present {
        message: Option<String>,
    },
    Min {
        value: f64,
        #[serde(default)]
        exclusive: bool,
        message: Option<String>,
    },
    Max {
        value: f64,
        #[serde(default)]
        exclusive: bool,
        message: Option<String>,
    },
    Ordered {
        message: Option<String>,
    },
    Pattern {
        regex: String,
        message: Option<String>,
    },
}

/// A compiled validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fails on falsy values: null, false, 0, "".
    Required,
    /// Fails only on null.
    Present,
    Min { value: f64, exclusive: bool },
    Max { value: f64, exclusive: bool },
    /// Pair rule: first component must not exceed the second.
    Ordered,
    Pattern(Regex),
}

impl Rule {
    pub fn default_message(&self) -> &'static str {
        match self {
            Rule::Required | Rule::Present => "Required",
            Rule::Min { .. } => "Too small",
            Rule::Max { .. } => "Too large",
            Rule::Ordered => "Min must be ≤ Max",
            Rule::Pattern(_) => "Invalid format",
        }
    }

    pub fn passes(&self, v: &Value) -> bool {
        match self {
            Rule::Required => value::truthy(v),
            Rule::Present => !v.is_null(),
            Rule::Min { value, exclusive } => match loose_number(v) {
                Some(n) if *exclusive => n > *value,
                Some(n) => n >= *value,
                None => true,
            },
            Rule::Max { value, exclusive } => match loose_number(v) {
                Some(n) if *exclusive => n < *value,
                Some(n) => n <= *value,
                None => true,
            },
            Rule::Ordered => {
                let lo = v.get(0).and_then(loose_number);
                let hi = v.get(1).and_then(loose_number);
                match (lo, hi) {
                    (Some(lo), Some(hi)) => lo <= hi,
                    _ => true,
                }
            }
            Rule::Pattern(re) => re.is_match(&value::display_text(v)),
        }
    }
}

/// Numeric view used by comparison rules. Empty strings and null compare as 0,
/// values that are not numbers at all never fail a comparison.
fn loose_number(v: &Value) -> Option<f64> {
    match v {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Builds a validator running `rules` in order; the first failure wins.
pub fn rules_validator(rules: Vec<(Rule, Option<String>)>) -> Validator {
    Validator::new(move |committed, _object| {
        rules.iter().find(|(rule, _)| !rule.passes(committed)).map(|(rule, message)| {
            message
                .clone()
                .unwrap_or_else(|| rule.default_message().to_string())
        })
    })
}

pub fn parse_schema(text: &str) -> Result<Schema> {
    let decl: SchemaDecl = serde_json::from_str(text)?;
    let schema = match decl {
        SchemaDecl::One(section) => Schema::Single(build_section(section)?),
        SchemaDecl::Many(sections) => Schema::Many(
            sections
                .into_iter()
                .map(build_section)
                .collect::<Result<Vec<_>>>()?,
        ),
    };
    Ok(schema)
}

pub fn load_schema(path: &Path) -> Result<Schema> {
    let text =
        std::fs::read_to_string(path).map_err(|e| SchemaError::Io(path.to_path_buf(), e))?;
    let schema = parse_schema(&text)?;
    tracing::info!(path = %path.display(), roots = schema.roots().len(), "schema loaded");
    Ok(schema)
}

fn build_section(decl: SectionDecl) -> Result<Section> {
    let mut section = Section::new(decl.section)
        .collapsed(decl.collapsed)
        .disabled(decl.disabled);

    for (key, raw) in decl.fields {
        let field_decl: FieldDecl =
            serde_json::from_value(raw).map_err(|e| SchemaError::InvalidField {
                section: section.title.clone(),
                key: key.clone(),
                reason: e.to_string(),
            })?;
        let field = build_field(&key, field_decl)?;
        section.insert_field(key, field);
    }

    for child in decl.children {
        section.children.push(build_section(child)?);
    }
    Ok(section)
}

fn build_field(key: &str, decl: FieldDecl) -> Result<Field> {
    let kind = kind_of(&decl.kind);
    if !kind.is_supported() {
        tracing::debug!(key, kind = %decl.kind, "unknown field type");
    }

    let label = decl.label.unwrap_or_else(|| key.to_string());
    let mut field = Field::new(kind, label)
        .options(decl.options)
        .disabled(decl.disabled);

    if decl.min.is_some() || decl.max.is_some() {
        let min = decl.min.unwrap_or(field.bounds.min);
        let max = decl.max.unwrap_or(field.bounds.max);
        field = field.bounds(min, max);
    }
    if let Some(step) = decl.step {
        field = field.step(step);
    }
    if let Some(path) = decl.path {
        field = field.path(path);
    }
    if let Some(display) = decl.display {
        field = field.display(DisplayTransform::index_labels(display.index_labels));
    }

    if !decl.validate.is_empty() {
        let rules = decl
            .validate
            .into_iter()
            .map(|r| compile_rule(key, r))
            .collect::<Result<Vec<_>>>()?;
        field = field.validator(rules_validator(rules));
    }
    Ok(field)
}

fn compile_rule(key: &str, decl: RuleDecl) -> Result<(Rule, Option<String>)> {
    let compiled = match decl {
        RuleDecl::Required { message } => (Rule::Required, message),
        RuleDecl::Present { message } => (Rule::Present, message),
        RuleDecl::Min {
            value,
            exclusive,
            message,
        } => (Rule::Min { value, exclusive }, message),
        RuleDecl::Max {
            value,
            exclusive,
            message,
        } => (Rule::Max { value, exclusive }, message),
        RuleDecl::Ordered { message } => (Rule::Ordered, message),
        RuleDecl::Pattern { regex, message } => {
            let re = Regex::new(&regex).map_err(|source| SchemaError::InvalidPattern {
                key: key.to_string(),
                source,
            })?;
            (Rule::Pattern(re), message)
        }
    };
    Ok(compiled)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/loader.rs"]
mod tests;
