//! Application API consumed by the CLI and the library surface.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::app::commands::generate;
use crate::app::config::load_config;
use crate::domain::{
    AppError, GenerationRequest, Letter, LetterType, LetterTypeSpec, LikhitConfig, PromptText,
    RawFields, all_types, spec_for,
};
use crate::ports::{MockTextGenerator, TextGenerator};
use crate::services::HttpGeminiClient;

/// Options for a single non-interactive generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub letter_type: LetterType,
    /// Raw values keyed by internal field name.
    pub fields: RawFields,
    /// Render the instruction without calling the service.
    pub prompt_preview: bool,
    /// Use the offline generator.
    pub mock: bool,
    pub config_path: Option<PathBuf>,
}

/// Result of [`generate`].
#[derive(Debug)]
pub enum GenerateOutcome {
    /// A finished letter.
    Letter(Letter),
    /// The instruction that would have been sent.
    PromptPreview { request: GenerationRequest, prompt: PromptText },
}

/// Every letter type schema, in presentation order.
pub fn letter_types() -> Vec<&'static LetterTypeSpec> {
    all_types().map(spec_for).collect()
}

/// Schema for a letter type given by name or slug.
pub fn letter_spec(name: &str) -> Result<&'static LetterTypeSpec, AppError> {
    Ok(spec_for(name.parse()?))
}

/// Today's date in local time, used for the letter header.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Load configuration relative to the current directory.
pub fn config(explicit: Option<&Path>) -> Result<LikhitConfig, AppError> {
    let cwd = std::env::current_dir()?;
    load_config(explicit, &cwd)
}

/// Build the generator for `config`: the HTTP client, or the offline mock.
pub fn generator(config: &LikhitConfig, mock: bool) -> Result<Box<dyn TextGenerator>, AppError> {
    if mock {
        return Ok(Box::new(MockTextGenerator));
    }
    Ok(Box::new(HttpGeminiClient::from_env_with_config(&config.generation)?))
}

/// Validate `options.fields` and generate (or preview) the letter.
pub fn generate(options: GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let request = generate::collect_request(options.letter_type, &options.fields)?;

    if options.prompt_preview {
        let prompt = generate::prompt_for(&request)?;
        return Ok(GenerateOutcome::PromptPreview { request, prompt });
    }

    let config = config(options.config_path.as_deref())?;
    let generator = generator(&config, options.mock)?;
    let letter = generate::execute(&*generator, request, today())?;
    Ok(GenerateOutcome::Letter(letter))
}
