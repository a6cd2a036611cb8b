//! Validation and collection of raw form input.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::registry::LetterTypeSpec;

/// Raw user input keyed by internal field name.
pub type RawFields = BTreeMap<String, String>;

/// One collected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub label: String,
    pub value: String,
}

/// Validated label → value pairs in schema order.
///
/// Only [`collect`] builds these, so every instance holds one valid entry
/// per field of its letter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<FieldValue>,
}

impl FieldValues {
    #[cfg(test)]
    pub(crate) fn from_pairs<I, L, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(label, value)| FieldValue { label: label.into(), value: value.into() })
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValue> {
        self.entries.iter()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.label == label).map(|entry| entry.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.value)?;
        }
        map.end()
    }
}

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub label: String,
    pub message: String,
}

/// Every violation found in one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|violation| violation.field.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation:", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  • {} ({}): {}", violation.label, violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate `raw` against `spec` and re-key the result by label.
///
/// Missing entries fall back to the field default (or the empty string).
/// Every field is checked; the error lists all violations, including raw
/// keys that name no field of `spec`.
pub fn collect(spec: &LetterTypeSpec, raw: &RawFields) -> Result<FieldValues, ValidationErrors> {
    let mut violations = Vec::new();
    let mut entries = Vec::with_capacity(spec.fields.len());

    for field in spec.fields {
        let value = raw
            .get(field.name)
            .map(String::as_str)
            .or(field.default_value)
            .unwrap_or_default();

        match field.check(value) {
            Ok(()) => entries
                .push(FieldValue { label: field.label.to_string(), value: value.to_string() }),
            Err(message) => violations.push(FieldViolation {
                field: field.name.to_string(),
                label: field.label.to_string(),
                message,
            }),
        }
    }

    for key in raw.keys().filter(|key| spec.field(key).is_none()) {
        violations.push(FieldViolation {
            field: key.clone(),
            label: key.clone(),
            message: format!("Unknown field for {} letters", spec.letter_type),
        });
    }

    if violations.is_empty() {
        Ok(FieldValues { entries })
    } else {
        Err(ValidationErrors { violations })
    }
}
