//! Declarative description of a single form input.

use serde::Serialize;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line free text.
    Textarea,
    /// One value from a fixed set.
    Select,
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Trimmed value must contain at least `min_len` characters.
    Required { min_len: usize, message: &'static str },
    /// Any value, including empty, is accepted.
    Optional,
    /// Value must equal one of `choices` exactly.
    OneOf { choices: &'static [&'static str] },
}

/// One input slot of a letter type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Internal name, unique within a letter type.
    pub name: &'static str,
    /// Display label; also the key handed to prompt assembly.
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(flatten)]
    pub rule: ValidationRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
    /// Layout weight (1 = half row, 2 = full row).
    pub col_span: u8,
}

impl FieldSpec {
    /// Allowed values for choice fields.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self.rule {
            ValidationRule::OneOf { choices } => Some(choices),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.rule, ValidationRule::Optional)
    }

    /// Check a candidate value, returning the violation message on failure.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self.rule {
            ValidationRule::Required { min_len, message } => {
                if value.trim().chars().count() < min_len {
                    Err(message.to_string())
                } else {
                    Ok(())
                }
            }
            ValidationRule::Optional => Ok(()),
            ValidationRule::OneOf { choices } => {
                if choices.contains(&value) {
                    Ok(())
                } else {
                    Err(format!("{} must be one of: {}", self.label, choices.join(", ")))
                }
            }
        }
    }
}
