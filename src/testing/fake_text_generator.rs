use std::sync::{Arc, Mutex};

use crate::domain::{GenerationError, PromptText};
use crate::ports::TextGenerator;

/// Records prompts and answers with a fixed reply or failure.
#[derive(Clone)]
pub struct FakeTextGenerator {
    pub received: Arc<Mutex<Vec<String>>>,
    pub reply: Result<String, GenerationError>,
}

impl FakeTextGenerator {
    pub fn replying(body: impl Into<String>) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), reply: Ok(body.into()) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), reply: Err(error) }
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError> {
        self.received.lock().unwrap().push(prompt.as_str().to_string());
        self.reply.clone()
    }
}
