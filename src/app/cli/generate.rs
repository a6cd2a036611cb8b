use std::path::{Path, PathBuf};

use clap::Args;

use super::to_json;
use crate::app::api::{self, GenerateOptions, GenerateOutcome};
use crate::domain::{AppError, LetterType, RawFields};
use crate::services::load_raw_fields;

#[derive(Args)]
pub struct GenerateArgs {
    /// Letter type (e.g. job, college, application, report)
    letter_type: String,
    /// Field value as NAME=VALUE, using internal field names (repeatable)
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,
    /// Read field values from a TOML, YAML, or JSON file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,
    /// Show the assembled prompt without calling the service
    #[arg(long, conflicts_with = "mock")]
    prompt_preview: bool,
    /// Use the offline mock generator
    #[arg(long, conflicts_with = "prompt_preview")]
    mock: bool,
    /// Print JSON output
    #[arg(long)]
    json: bool,
    /// Write the output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let letter_type: LetterType = args.letter_type.parse()?;
    let fields = merge_fields(args.input.as_deref(), args.set)?;

    let outcome = api::generate(GenerateOptions {
        letter_type,
        fields,
        prompt_preview: args.prompt_preview,
        mock: args.mock,
        config_path: config_path.map(Path::to_path_buf),
    })?;

    let rendered = render(&outcome, args.json)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            println!("✅ Wrote output to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// File values first, then `--set` assignments, which win on conflict.
fn merge_fields(
    input: Option<&Path>,
    assignments: Vec<(String, String)>,
) -> Result<RawFields, AppError> {
    let mut fields = match input {
        Some(path) => load_raw_fields(path)?,
        None => RawFields::new(),
    };
    fields.extend(assignments);
    Ok(fields)
}

fn render(outcome: &GenerateOutcome, json: bool) -> Result<String, AppError> {
    let text = match (outcome, json) {
        (GenerateOutcome::Letter(letter), false) => letter.as_str().to_string(),
        (GenerateOutcome::Letter(letter), true) => to_json(letter)?,
        (GenerateOutcome::PromptPreview { prompt, .. }, false) => prompt.as_str().to_string(),
        (GenerateOutcome::PromptPreview { request, prompt }, true) => {
            let preview = serde_json::json!({
                "letterType": request.letter_type(),
                "userDetails": request.user_details(),
                "prompt": prompt,
            });
            to_json(&preview)?
        }
    };

    if text.ends_with('\n') { Ok(text) } else { Ok(format!("{}\n", text)) }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
