//! Interactive session state: select → fill form → generate → display.

use chrono::NaiveDate;

use crate::app::commands::generate;
use crate::domain::{
    AppError, GenerationRequest, GenerationResult, LetterType, LetterTypeSpec, RawFields,
    spec_for,
};
use crate::ports::TextGenerator;

/// Where the session currently is.
#[derive(Debug)]
pub enum SessionState {
    /// Choosing a letter type.
    Selecting,
    /// Filling in the form for a letter type.
    FormActive(LetterType),
    /// A validated request is waiting for the generation call.
    Generating(GenerationRequest),
    /// The outcome of the last generation call.
    Displaying(GenerationResult),
}

impl SessionState {
    fn describe(&self) -> &'static str {
        match self {
            SessionState::Selecting => "selecting a letter type",
            SessionState::FormActive(_) => "filling in the form",
            SessionState::Generating(_) => "a letter is being generated",
            SessionState::Displaying(_) => "displaying a result",
        }
    }
}

/// One user's pass through the letter workflow.
///
/// Only one request is outstanding at a time: `submit` is refused while a
/// request is pending, and `reset` returns to [`SessionState::Selecting`]
/// from any state.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { state: SessionState::Selecting }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True while a request awaits the generation call.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Generating(_))
    }

    /// Choose a letter type and open its form.
    pub fn select(&mut self, letter_type: LetterType) -> Result<&'static LetterTypeSpec, AppError> {
        if !matches!(self.state, SessionState::Selecting) {
            return Err(self.invalid("select a letter type"));
        }
        self.state = SessionState::FormActive(letter_type);
        Ok(spec_for(letter_type))
    }

    /// Validate the form. On failure the form stays active and every
    /// violated field is reported.
    pub fn submit(&mut self, raw: &RawFields) -> Result<(), AppError> {
        let SessionState::FormActive(letter_type) = self.state else {
            return Err(self.invalid("submit"));
        };
        let request = generate::collect_request(letter_type, raw)?;
        self.state = SessionState::Generating(request);
        Ok(())
    }

    /// The request awaiting generation, if any.
    pub fn pending_request(&self) -> Option<&GenerationRequest> {
        match &self.state {
            SessionState::Generating(request) => Some(request),
            _ => None,
        }
    }

    /// Run the pending request through `generator` and display the outcome.
    pub fn complete<G>(&mut self, generator: &G, today: NaiveDate) -> Result<(), AppError>
    where
        G: TextGenerator + ?Sized,
    {
        match std::mem::replace(&mut self.state, SessionState::Selecting) {
            SessionState::Generating(request) => {
                let result = generate::execute(generator, request, today);
                self.state = SessionState::Displaying(result);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("generate"))
            }
        }
    }

    /// The displayed outcome, if any.
    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.state {
            SessionState::Displaying(result) => Some(result),
            _ => None,
        }
    }

    /// Start over from letter type selection.
    pub fn reset(&mut self) {
        self.state = SessionState::Selecting;
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition { action, state: self.state.describe() }
    }
}
