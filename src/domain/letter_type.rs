use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// The closed set of letter categories the assistant can draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterType {
    /// Academic correspondence: recommendations, applications, leave requests.
    #[serde(rename = "College/School")]
    CollegeSchool,
    /// Cover letters and other job-related correspondence.
    #[serde(rename = "Job")]
    Job,
    /// Applications to programs, clubs, grants or memberships.
    #[serde(rename = "Application")]
    Application,
    /// Cover letters or summaries accompanying a report.
    #[serde(rename = "Report")]
    Report,
}

impl LetterType {
    /// All letter types in presentation order.
    pub const ALL: [LetterType; 4] =
        [LetterType::CollegeSchool, LetterType::Job, LetterType::Application, LetterType::Report];

    /// Canonical name, as sent to the generative-text service.
    pub fn name(&self) -> &'static str {
        match self {
            LetterType::CollegeSchool => "College/School",
            LetterType::Job => "Job",
            LetterType::Application => "Application",
            LetterType::Report => "Report",
        }
    }

    /// Short command-line friendly identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            LetterType::CollegeSchool => "college",
            LetterType::Job => "job",
            LetterType::Application => "application",
            LetterType::Report => "report",
        }
    }

    /// Parse a letter type from its canonical name or slug (case-insensitive).
    pub fn from_name(name: &str) -> Option<LetterType> {
        match name.trim().to_lowercase().as_str() {
            "college/school" | "college" | "school" => Some(LetterType::CollegeSchool),
            "job" => Some(LetterType::Job),
            "application" => Some(LetterType::Application),
            "report" => Some(LetterType::Report),
            _ => None,
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LetterType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterType::from_name(s).ok_or_else(|| AppError::UnknownLetterType {
            name: s.to_string(),
            available: LetterType::ALL.iter().map(|t| t.slug()).collect::<Vec<_>>().join(", "),
        })
    }
}
