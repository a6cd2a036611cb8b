//! Payloads exchanged with the generation client.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::AppError;
use super::form::FieldValues;
use super::letter_type::LetterType;

/// A validated submission, consumed once by the generation client.
///
/// Requests are only obtained through `collect_request`, which validates
/// the raw input first:
///
/// ```compile_fail
/// use likhit::{FieldValues, GenerationRequest, LetterType};
///
/// let values = FieldValues::from_pairs([("Nonsense", "")]);
/// let request = GenerationRequest::new(LetterType::Job, values);
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    letter_type: LetterType,
    user_details: FieldValues,
}

impl GenerationRequest {
    pub(crate) fn new(letter_type: LetterType, user_details: FieldValues) -> Self {
        Self { letter_type, user_details }
    }

    pub fn letter_type(&self) -> LetterType {
        self.letter_type
    }

    pub fn user_details(&self) -> &FieldValues {
        &self.user_details
    }
}

/// A finished letter: header block plus generated body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    letter: String,
}

impl Letter {
    /// Wrap finished text; `None` when `text` is blank.
    pub fn new(text: String) -> Option<Self> {
        if text.trim().is_empty() { None } else { Some(Self { letter: text }) }
    }

    pub fn as_str(&self) -> &str {
        &self.letter
    }

    pub fn into_string(self) -> String {
        self.letter
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letter)
    }
}

/// Failure of a generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response.
    #[error("Generation request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Generation service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The service answered, but not in the expected shape.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    /// The service declined to produce content.
    #[error("Generation refused: {0}")]
    Refused(String),

    /// The service succeeded but returned no letter body.
    #[error("The service did not return a letter")]
    EmptyLetter,
}

/// Outcome of one generation call: a finished letter or the failure that
/// prevented one.
pub type GenerationResult = Result<Letter, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_rejects_blank_text() {
        assert!(Letter::new(String::new()).is_none());
        assert!(Letter::new(" \n".into()).is_none());
        assert_eq!(Letter::new("Dear Sir,".into()).unwrap().as_str(), "Dear Sir,");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = GenerationRequest::new(
            LetterType::Job,
            FieldValues::from_pairs([("Your Name", "Ana Lee")]),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["letterType"], "Job");
        assert_eq!(json["userDetails"]["Your Name"], "Ana Lee");
    }

    #[test]
    fn letter_serializes_as_letter_object() {
        let letter = Letter::new("Dear Sir,".into()).unwrap();
        assert_eq!(serde_json::to_string(&letter).unwrap(), r#"{"letter":"Dear Sir,"}"#);
    }
}
