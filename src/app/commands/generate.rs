//! Letter generation: assemble the instruction, call the service once,
//! and prefix the header block.

use chrono::NaiveDate;

use crate::domain::{
    AppError, GenerationError, GenerationRequest, GenerationResult, Letter, PromptText,
    RawFields, assemble_prompt, collect, finalize_letter, spec_for,
};
use crate::domain::LetterType;
use crate::ports::TextGenerator;
use crate::services::read_prompt_template;

/// Validate raw form input for `letter_type` into a request.
pub fn collect_request(
    letter_type: LetterType,
    raw: &RawFields,
) -> Result<GenerationRequest, AppError> {
    let values = collect(spec_for(letter_type), raw)?;
    Ok(GenerationRequest::new(letter_type, values))
}

/// Render the instruction that would be sent for `request`.
pub fn prompt_for(request: &GenerationRequest) -> Result<PromptText, AppError> {
    Ok(assemble_prompt(request.letter_type(), request.user_details(), read_prompt_template)?)
}

/// Generate the letter for `request`, dated `today`.
///
/// The service is called exactly once. An empty body is reported as
/// [`GenerationError::EmptyLetter`], never as a header-only letter.
pub fn execute<G>(generator: &G, request: GenerationRequest, today: NaiveDate) -> GenerationResult
where
    G: TextGenerator + ?Sized,
{
    let prompt = prompt_for(&request)?;
    tracing::info!(
        letter_type = %request.letter_type(),
        fields = request.user_details().len(),
        prompt_chars = prompt.as_str().chars().count(),
        "requesting letter"
    );

    let body = generator.generate_text(&prompt).inspect_err(|err| {
        tracing::warn!(error = %err, "letter generation failed");
    })?;

    let letter = Letter::new(finalize_letter(&body, today)).ok_or_else(|| {
        tracing::warn!("generation service returned an empty letter");
        GenerationError::EmptyLetter
    })?;
    Ok(letter)
}
