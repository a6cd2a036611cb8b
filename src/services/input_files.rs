//! Loading raw field values from TOML, YAML or JSON files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, RawFields};

/// Scalar accepted as a field value; non-strings are stringified and null is empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Bool(value) => value.to_string(),
        }
    }
}

/// Read a flat `field name → value` table from `path`.
///
/// The format is chosen by extension: `.toml`, `.yml`/`.yaml`, or `.json`.
pub fn load_raw_fields(path: &Path) -> Result<RawFields, AppError> {
    let content = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    parse_raw_fields(&content, extension).map_err(|details| AppError::ParseError {
        what: path.display().to_string(),
        details,
    })
}

fn parse_raw_fields(content: &str, extension: &str) -> Result<RawFields, String> {
    let table: BTreeMap<String, Option<Scalar>> = match extension.to_ascii_lowercase().as_str() {
        "toml" => toml::from_str(content).map_err(|e| e.to_string())?,
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        "json" => serde_json::from_str(content).map_err(|e| e.to_string())?,
        other => return Err(format!("unsupported input format '{}'", other)),
    };
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, value.map(Scalar::into_string).unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn parses_toml_table() {
        let fields = parse_raw_fields("yourName = \"Ana Lee\"\nyearsOfExperience = 5\n", "toml")
            .unwrap();
        assert_eq!(fields["yourName"], "Ana Lee");
        assert_eq!(fields["yearsOfExperience"], "5");
    }

    #[test]
    fn parses_yaml_mapping() {
        let fields = parse_raw_fields("companyName: Acme\nremote: true\n", "yaml").unwrap();
        assert_eq!(fields["companyName"], "Acme");
        assert_eq!(fields["remote"], "true");
    }

    #[test]
    fn blank_yaml_value_reads_as_empty() {
        let fields =
            parse_raw_fields("hiringManagerTitle:\nyourName: Ana Lee\n", "yml").unwrap();
        assert_eq!(fields["hiringManagerTitle"], "");
        assert_eq!(fields["yourName"], "Ana Lee");
    }

    #[test]
    fn json_null_reads_as_empty() {
        let fields = parse_raw_fields(r#"{"additionalNotes": null}"#, "json").unwrap();
        assert_eq!(fields["additionalNotes"], "");
    }

    #[test]
    fn parses_json_object() {
        let fields = parse_raw_fields(r#"{"keySkills": "Go, Rust"}"#, "JSON").unwrap();
        assert_eq!(fields["keySkills"], "Go, Rust");
    }

    #[test]
    fn rejects_nested_values() {
        assert!(parse_raw_fields(r#"{"keySkills": ["Go"]}"#, "json").is_err());
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = parse_raw_fields("", "ini").unwrap_err();
        assert!(err.contains("unsupported input format 'ini'"));
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "not = [valid").unwrap();

        let err = load_raw_fields(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
