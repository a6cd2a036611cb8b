//! Generative-text service port definition.

use crate::domain::{GenerationError, PromptText};

/// Port for the external text-generation capability.
///
/// Implementations make exactly one attempt per call; retry policy
/// belongs to the caller.
pub trait TextGenerator {
    /// Generate a letter body for `prompt`.
    ///
    /// Returns the raw body, which may be empty when the service produced
    /// nothing usable.
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError> {
        (**self).generate_text(prompt)
    }
}

/// Offline generator returning a canned body.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator;

impl TextGenerator for MockTextGenerator {
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError> {
        tracing::info!(prompt_chars = prompt.as_str().chars().count(), "mock generation");
        Ok(concat!(
            "Dear Reader,\n\n",
            "This is a placeholder letter produced in mock mode. ",
            "No request was sent to the generation service.\n\n",
            "Sincerely,\n",
            "[Your Name]\n"
        )
        .to_string())
    }
}
