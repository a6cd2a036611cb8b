//! Static field schema for every letter type.

use serde::Serialize;

use super::field::{FieldKind, FieldSpec, ValidationRule};
use super::letter_type::LetterType;

/// Display metadata and ordered field schema of one letter type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterTypeSpec {
    pub letter_type: LetterType,
    pub label: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl LetterTypeSpec {
    /// Look up a field by internal name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Schema for `letter_type`.
pub fn spec_for(letter_type: LetterType) -> &'static LetterTypeSpec {
    match letter_type {
        LetterType::CollegeSchool => &COLLEGE_SCHOOL,
        LetterType::Job => &JOB,
        LetterType::Application => &APPLICATION,
        LetterType::Report => &REPORT,
    }
}

/// All letter types in stable presentation order.
pub fn all_types() -> impl Iterator<Item = LetterType> + Clone {
    LetterType::ALL.into_iter()
}

const fn text(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    rule: ValidationRule,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Text,
        placeholder: Some(placeholder),
        rule,
        default_value: None,
        col_span: 1,
    }
}

const fn textarea(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    rule: ValidationRule,
) -> FieldSpec {
    FieldSpec { kind: FieldKind::Textarea, ..text(name, label, placeholder, rule) }
}

const fn select(
    name: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
    default_value: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Select,
        placeholder: None,
        rule: ValidationRule::OneOf { choices },
        default_value: Some(default_value),
        col_span: 1,
    }
}

const fn wide(field: FieldSpec) -> FieldSpec {
    FieldSpec { col_span: 2, ..field }
}

const fn required(min_len: usize, message: &'static str) -> ValidationRule {
    ValidationRule::Required { min_len, message }
}

const OPTIONAL: ValidationRule = ValidationRule::Optional;

static COLLEGE_SCHOOL: LetterTypeSpec = LetterTypeSpec {
    letter_type: LetterType::CollegeSchool,
    label: "College/School",
    description: "Generate letters for academic purposes, like recommendations or applications.",
    fields: &[
        text(
            "recipientName",
            "Recipient Name",
            "e.g., Dr. Jane Doe, Admissions Committee",
            required(1, "Recipient name is required."),
        ),
        text(
            "recipientTitle",
            "Recipient Title/Position",
            "e.g., Professor, Admissions Officer",
            required(1, "Recipient title is required."),
        ),
        text(
            "institutionName",
            "Institution Name",
            "e.g., Harvard University, Springfield High",
            required(1, "Institution name is required."),
        ),
        text("yourName", "Your Name", "Your full name", required(1, "Your name is required.")),
        text(
            "yourGradeOrYear",
            "Your Grade/Year/Program",
            "e.g., 12th Grade, Senior Year, PhD Candidate",
            OPTIONAL,
        ),
        textarea(
            "purposeOfLetter",
            "Purpose of Letter",
            "e.g., Request for recommendation, Application inquiry, Leave request",
            required(10, "Purpose must be at least 10 characters."),
        ),
        wide(textarea(
            "specificPoints",
            "Specific Points to Include (optional)",
            "Any specific details or achievements to mention",
            OPTIONAL,
        )),
    ],
};

static JOB: LetterTypeSpec = LetterTypeSpec {
    letter_type: LetterType::Job,
    label: "Job Application",
    description: "Craft cover letters or other job-related correspondence.",
    fields: &[
        text(
            "recipientName",
            "Recipient Name",
            "e.g., Mr. John Smith or 'Hiring Team'",
            required(1, "Recipient name is required."),
        ),
        text(
            "hiringManagerTitle",
            "Hiring Manager Title (if known)",
            "e.g., Senior Recruiter, Head of Department",
            OPTIONAL,
        ),
        text(
            "companyName",
            "Company Name",
            "e.g., Google, Acme Corp",
            required(1, "Company name is required."),
        ),
        text(
            "jobTitleAppliedFor",
            "Job Title You're Applying For",
            "e.g., Software Engineer, Marketing Manager",
            required(1, "Job title is required."),
        ),
        text("yourName", "Your Name", "Your full name", required(1, "Your name is required.")),
        select(
            "letterTypeDetail",
            "Type of Job Letter",
            &["Cover Letter", "Letter of Interest", "Follow-up Letter", "Thank You Letter"],
            "Cover Letter",
        ),
        textarea(
            "keySkills",
            "Your Key Skills (comma-separated)",
            "e.g., JavaScript, Project Management, Communication",
            required(3, "Please list at least one skill."),
        ),
        text("yearsOfExperience", "Years of Relevant Experience", "e.g., 5, 10+", OPTIONAL),
        wide(select(
            "letterTone",
            "Desired Tone",
            &["Formal", "Enthusiastic", "Professional", "Confident"],
            "Professional",
        )),
    ],
};

static APPLICATION: LetterTypeSpec = LetterTypeSpec {
    letter_type: LetterType::Application,
    label: "General Application",
    description: "Create letters for various applications like programs or memberships.",
    fields: &[
        text(
            "recipientName",
            "Recipient Name / Organization Department",
            "e.g., Membership Committee, Dr. Emily White",
            required(1, "Recipient information is required."),
        ),
        text(
            "organizationName",
            "Organization/Program Name",
            "e.g., Tech Innovators Club, Summer Research Program",
            required(1, "Organization name is required."),
        ),
        text(
            "applyingFor",
            "What are you applying for?",
            "e.g., Club membership, Volunteer position, Grant",
            required(1, "Application subject is required."),
        ),
        text("yourName", "Your Name", "Your full name", required(1, "Your name is required.")),
        textarea(
            "relevantExperienceOrSkills",
            "Relevant Experience or Skills",
            "Detail your qualifications that fit the application",
            required(10, "Please describe your experience/skills."),
        ),
        wide(textarea(
            "reasonForApplying",
            "Reason for Applying",
            "Explain your motivation and interest",
            required(10, "Please state your reason for applying."),
        )),
    ],
};

static REPORT: LetterTypeSpec = LetterTypeSpec {
    letter_type: LetterType::Report,
    label: "Report Summary/Cover",
    description: "Generate cover letters or summaries for reports.",
    fields: &[
        text(
            "reportTitle",
            "Title of the Report",
            "e.g., Quarterly Sales Analysis, Market Research Findings",
            required(1, "Report title is required."),
        ),
        text(
            "preparedFor",
            "Report Prepared For",
            "e.g., Board of Directors, Marketing Department",
            required(1, "Recipient of report is required."),
        ),
        text(
            "preparedBy",
            "Report Prepared By",
            "Your name or team name",
            required(1, "Preparer name is required."),
        ),
        text(
            "submissionDate",
            "Submission Date",
            "e.g., YYYY-MM-DD",
            required(1, "Date is required."),
        ),
        textarea(
            "reportObjective",
            "Objective/Purpose of the Report",
            "Briefly state the main goal of the report",
            required(10, "Objective must be at least 10 characters."),
        ),
        wide(textarea(
            "keyFindingsSummary",
            "Summary of Key Findings/Points",
            "Concisely summarize the most important information",
            required(10, "Summary must be at least 10 characters."),
        )),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_has_a_spec_for_itself() {
        for letter_type in all_types() {
            let spec = spec_for(letter_type);
            assert_eq!(spec.letter_type, letter_type);
            assert!(!spec.label.is_empty());
            assert!(!spec.description.is_empty());
            assert!(!spec.fields.is_empty());
        }
    }

    #[test]
    fn field_names_are_unique_per_type() {
        for letter_type in all_types() {
            let spec = spec_for(letter_type);
            let names: HashSet<_> = spec.fields.iter().map(|field| field.name).collect();
            assert_eq!(names.len(), spec.fields.len(), "duplicate field in {}", letter_type);
        }
    }

    #[test]
    fn field_labels_are_unique_per_type() {
        for letter_type in all_types() {
            let spec = spec_for(letter_type);
            let labels: HashSet<_> = spec.fields.iter().map(|field| field.label).collect();
            assert_eq!(labels.len(), spec.fields.len(), "duplicate label in {}", letter_type);
        }
    }

    #[test]
    fn choice_defaults_are_valid_choices() {
        for letter_type in all_types() {
            for field in spec_for(letter_type).fields {
                if let Some(choices) = field.choices() {
                    let default = field.default_value.expect("choice fields carry a default");
                    assert!(choices.contains(&default), "{} default not in choices", field.name);
                }
            }
        }
    }

    #[test]
    fn all_types_order_is_stable() {
        let first: Vec<_> = all_types().collect();
        let second: Vec<_> = all_types().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], LetterType::CollegeSchool);
        assert_eq!(first[3], LetterType::Report);
    }

    #[test]
    fn job_schema_matches_expected_order() {
        let names: Vec<_> = spec_for(LetterType::Job).fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "recipientName",
                "hiringManagerTitle",
                "companyName",
                "jobTitleAppliedFor",
                "yourName",
                "letterTypeDetail",
                "keySkills",
                "yearsOfExperience",
                "letterTone",
            ]
        );
        let tone = spec_for(LetterType::Job).field("letterTone").unwrap();
        assert_eq!(tone.col_span, 2);
        assert_eq!(tone.default_value, Some("Professional"));
    }

    #[test]
    fn free_text_justifications_demand_substance() {
        let purpose = spec_for(LetterType::CollegeSchool).field("purposeOfLetter").unwrap();
        assert!(purpose.check("Too short").is_err());
        assert!(purpose.check("Recommendation request").is_ok());
    }
}
