use super::to_json;
use crate::app::api;
use crate::domain::{AppError, FieldKind, FieldSpec};

pub fn run_types(json: bool) -> Result<(), AppError> {
    let specs = api::letter_types();

    if json {
        println!("{}", to_json(&specs)?);
        return Ok(());
    }

    for spec in specs {
        println!("{:<12} {:<22} {}", spec.letter_type.slug(), spec.label, spec.description);
    }
    Ok(())
}

pub fn run_fields(letter_type: &str, json: bool) -> Result<(), AppError> {
    let spec = api::letter_spec(letter_type)?;

    if json {
        println!("{}", to_json(spec)?);
        return Ok(());
    }

    println!("{} ({})", spec.label, spec.letter_type.slug());
    println!("{}", spec.description);
    println!();
    for field in spec.fields {
        println!("  {:<28} {}{}", field.name, field.label, annotation(field));
    }
    Ok(())
}

fn annotation(field: &FieldSpec) -> String {
    let mut notes = Vec::new();
    if field.kind == FieldKind::Textarea {
        notes.push("multi-line".to_string());
    }
    if field.is_optional() {
        notes.push("optional".to_string());
    }
    if let Some(choices) = field.choices() {
        notes.push(format!("one of: {}", choices.join(", ")));
    }
    if let Some(default) = field.default_value {
        notes.push(format!("default: {}", default));
    }

    if notes.is_empty() { String::new() } else { format!(" [{}]", notes.join("; ")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LetterType, spec_for};

    #[test]
    fn annotation_lists_choices_and_default() {
        let spec = spec_for(LetterType::Job);
        let tone = spec.field("letterTone").unwrap();
        let note = annotation(tone);
        assert!(note.contains("one of: Formal, Enthusiastic, Professional, Confident"));
        assert!(note.contains("default: Professional"));
    }

    #[test]
    fn required_text_field_has_no_annotation() {
        let spec = spec_for(LetterType::Job);
        assert_eq!(annotation(spec.field("companyName").unwrap()), "");
        assert_eq!(annotation(spec.field("hiringManagerTitle").unwrap()), " [optional]");
    }

    #[test]
    fn textarea_field_is_marked_multi_line() {
        let spec = spec_for(LetterType::Job);
        assert_eq!(annotation(spec.field("keySkills").unwrap()), " [multi-line]");
    }
}
