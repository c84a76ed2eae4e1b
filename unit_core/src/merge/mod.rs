//! Document merging - Projecting untyped key/value documents onto typed targets
//!
//! Targets describe themselves with a static table of [`FieldDescriptor`]s
//! (see [`FieldTable`]). The merger walks the document, matches keys against
//! the table case-insensitively and records every key it could not place.

mod fields;

use serde_json::{Map, Value};

/// Discrepancies collected while merging one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Dotted paths of keys with no matching declared field
    pub unknown_keys: Vec<String>,
    /// `"path.to.key: expected <kind>, got <actual>"`
    pub type_errors: Vec<String>,
}

impl ApplyReport {
    /// True when the document mapped cleanly
    pub fn is_empty(&self) -> bool {
        self.unknown_keys.is_empty() && self.type_errors.is_empty()
    }

    fn push_unknown(&mut self, path: String) {
        self.unknown_keys.push(path);
    }

    fn push_type_error(&mut self, path: &str, expected: &str, got: &Value) {
        self.type_errors
            .push(format!("{}: expected {}, got {}", path, expected, json_type_name(got)));
    }
}

/// How a declared field accepts document values
pub enum FieldKind<T: 'static> {
    /// Any JSON number, integer or float, stored as `f64`
    Number(fn(&mut T, f64)),
    /// JSON booleans only
    Flag(fn(&mut T, bool)),
    /// Nested object, merged recursively with the given path prefix
    Group(fn(&mut T, &Map<String, Value>, &str, &mut ApplyReport)),
    /// Declared but not assignable from documents; always reported
    Unsupported { type_name: &'static str },
}

/// One entry of a target's field table
pub struct FieldDescriptor<T: 'static> {
    /// Lower-case document key
    pub key: &'static str,
    pub kind: FieldKind<T>,
}

/// Types that can be merged from a document
pub trait FieldTable: Sized + 'static {
    const FIELDS: &'static [FieldDescriptor<Self>];
}

/// Merge `doc` onto `target`, returning every discrepancy found
///
/// Matched and well-typed keys are assigned in place; anything else leaves
/// the corresponding field untouched. Never stops early.
pub fn apply_document<T: FieldTable>(target: &mut T, doc: &Map<String, Value>) -> ApplyReport {
    let mut report = ApplyReport::default();
    apply_fields(target, doc, "", &mut report);
    report
}

/// Merge `doc` onto `target` with keys reported under `path`
pub fn apply_fields<T: FieldTable>(target: &mut T, doc: &Map<String, Value>, path: &str, report: &mut ApplyReport) {
    for (raw_key, value) in doc {
        let key = raw_key.to_lowercase();
        let current_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };

        let Some(field) = T::FIELDS.iter().find(|f| f.key == key) else {
            report.push_unknown(current_path);
            continue;
        };

        match &field.kind {
            FieldKind::Number(set) => match value.as_f64() {
                Some(n) => set(target, n),
                None => report.push_type_error(&current_path, "number", value),
            },
            FieldKind::Flag(set) => match value.as_bool() {
                Some(b) => set(target, b),
                None => report.push_type_error(&current_path, "boolean", value),
            },
            FieldKind::Group(merge) => match value.as_object() {
                Some(child) => merge(target, child, &current_path, report),
                None => report.push_type_error(&current_path, "object", value),
            },
            FieldKind::Unsupported { type_name } => {
                report.push_type_error(&current_path, type_name, value);
            }
        }
    }
}

/// JSON type name used in type-error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
