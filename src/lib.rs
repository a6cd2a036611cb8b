//! likhit: draft letters from structured details with a generative-text service.
//!
//! A letter type's schema drives a form; validated input becomes a
//! generation request; the request is rendered into a single instruction
//! and sent to the service once; the returned body is prefixed with a
//! sender/date header.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use chrono::NaiveDate;

pub use app::api::{GenerateOptions, GenerateOutcome, generate, letter_spec, letter_types};
pub use app::{Session, SessionState};
pub use domain::{
    AppError, FieldKind, FieldSpec, FieldValue, FieldValues, FieldViolation, GenerationError,
    GenerationRequest, GenerationResult, Letter, LetterType, LetterTypeSpec, LikhitConfig,
    PromptText, RawFields, ValidationErrors, ValidationRule,
};
pub use ports::{MockTextGenerator, TextGenerator};
pub use services::HttpGeminiClient;

/// Validate `raw` input for `letter_type` into a generation request.
pub fn collect_request(
    letter_type: LetterType,
    raw: &RawFields,
) -> Result<GenerationRequest, AppError> {
    app::commands::generate::collect_request(letter_type, raw)
}

/// Render the instruction that would be sent for `request`.
pub fn assemble_prompt(request: &GenerationRequest) -> Result<PromptText, AppError> {
    app::commands::generate::prompt_for(request)
}

/// Generate a letter with any [`TextGenerator`], dated `today`.
pub fn generate_letter<G>(
    generator: &G,
    request: GenerationRequest,
    today: NaiveDate,
) -> GenerationResult
where
    G: TextGenerator + ?Sized,
{
    app::commands::generate::execute(generator, request, today)
}
