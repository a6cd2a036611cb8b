use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Editor, Error as DialoguerError, Input, Select};

use crate::app::api;
use crate::app::session::Session;
use crate::domain::{
    AppError, FieldKind, FieldSpec, LetterType, LetterTypeSpec, RawFields, spec_for,
};

const AGAIN_OPTION: &str = "Generate another letter";
const QUIT_OPTION: &str = "Quit";

pub fn run_interactive(config_path: Option<&Path>, mock: bool) -> Result<(), AppError> {
    let config = api::config(config_path)?;
    let mut session = Session::new();

    loop {
        let Some(letter_type) = prompt_letter_type()? else {
            return Ok(());
        };
        let spec = session.select(letter_type)?;
        println!("{}", spec.description);

        let mut raw = RawFields::new();
        loop {
            let Some(filled) = prompt_form(spec, &raw)? else {
                return Ok(());
            };
            raw = filled;
            match session.submit(&raw) {
                Ok(()) => break,
                Err(AppError::InvalidFields(errors)) => eprintln!("⚠️  {}", errors),
                Err(err) => return Err(err),
            }
        }

        println!("Generating your {} letter...", spec.label);
        let generator = api::generator(&config, mock)?;
        session.complete(&*generator, api::today())?;

        match session.result() {
            Some(Ok(letter)) => println!("\n{}\n", letter),
            Some(Err(err)) => eprintln!("Error: {}", err),
            None => {}
        }

        if !prompt_again()? {
            return Ok(());
        }
        session.reset();
    }
}

fn prompt_letter_type() -> Result<Option<LetterType>, AppError> {
    let items: Vec<String> = LetterType::ALL
        .iter()
        .map(|letter_type| {
            let spec = spec_for(*letter_type);
            format!("{}: {}", spec.label, spec.description)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Select letter type")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| interaction("letter type", err))?;

    Ok(selection.map(|index| LetterType::ALL[index]))
}

/// Prompt every field in schema order, offering `previous` values as defaults.
fn prompt_form(
    spec: &'static LetterTypeSpec,
    previous: &RawFields,
) -> Result<Option<RawFields>, AppError> {
    let mut filled = RawFields::new();
    for field in spec.fields {
        let current = previous.get(field.name).map(String::as_str).or(field.default_value);
        let value = match input_style(field) {
            InputStyle::Choice(choices) => prompt_choice(field, choices, current)?,
            InputStyle::Editor => prompt_multiline(field, current)?,
            InputStyle::Line => prompt_text(field, current)?,
        };
        let Some(value) = value else {
            return Ok(None);
        };
        filled.insert(field.name.to_string(), value);
    }
    Ok(Some(filled))
}

#[derive(Debug, PartialEq, Eq)]
enum InputStyle {
    Choice(&'static [&'static str]),
    Editor,
    Line,
}

fn input_style(field: &FieldSpec) -> InputStyle {
    if let Some(choices) = field.choices() {
        return InputStyle::Choice(choices);
    }
    match field.kind {
        FieldKind::Textarea => InputStyle::Editor,
        FieldKind::Text | FieldKind::Select => InputStyle::Line,
    }
}

fn prompt_choice(
    field: &'static FieldSpec,
    choices: &[&str],
    current: Option<&str>,
) -> Result<Option<String>, AppError> {
    let default = current.and_then(|value| choices.iter().position(|choice| *choice == value));
    let selection = Select::new()
        .with_prompt(field.label)
        .items(choices)
        .default(default.unwrap_or(0))
        .interact_opt()
        .map_err(|err| interaction(field.label, err))?;

    Ok(selection.map(|index| choices[index].to_string()))
}

fn prompt_text(
    field: &'static FieldSpec,
    current: Option<&str>,
) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt_label(field))
        .allow_empty(field.is_optional())
        .validate_with(move |value: &String| field.check(value));
    if let Some(current) = current
        && !current.is_empty()
    {
        input = input.default(current.to_string());
    }

    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interaction(field.label, err)),
    }
}

/// Read a multi-line field in the user's editor, reopening it until the value passes.
///
/// Closing the editor without saving keeps the current draft; an unchanged draft that
/// fails the field's rule cancels the form.
fn prompt_multiline(
    field: &'static FieldSpec,
    current: Option<&str>,
) -> Result<Option<String>, AppError> {
    println!("{} (opens your editor)", prompt_label(field));
    let mut draft = current.unwrap_or_default().to_string();

    loop {
        let edited = Editor::new()
            .extension(".txt")
            .edit(&draft)
            .map_err(|err| interaction(field.label, err))?;
        let unchanged = edited.is_none();
        let value = edited.map(tidy_editor_text).unwrap_or_else(|| draft.clone());

        match field.check(&value) {
            Ok(()) => return Ok(Some(value)),
            Err(_) if unchanged => return Ok(None),
            Err(message) => {
                eprintln!("⚠️  {}", message);
                draft = value;
            }
        }
    }
}

fn prompt_label(field: &FieldSpec) -> String {
    let mut prompt = field.label.to_string();
    if field.is_optional() && !field.label.contains("(optional)") {
        prompt.push_str(" (optional)");
    }
    if let Some(placeholder) = field.placeholder {
        prompt.push_str(&format!(" [{}]", placeholder));
    }
    prompt
}

/// Editors append a final newline; trailing whitespace is not part of the value.
fn tidy_editor_text(text: String) -> String {
    let trimmed = text.trim_end();
    if trimmed.len() == text.len() { text } else { trimmed.to_string() }
}

fn prompt_again() -> Result<bool, AppError> {
    let selection = Select::new()
        .items(&[AGAIN_OPTION, QUIT_OPTION])
        .default(0)
        .interact_opt()
        .map_err(|err| interaction("next step", err))?;

    Ok(selection == Some(0))
}

fn interaction(what: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Interaction(format!("Failed to read {}: {}", what, err))
}
