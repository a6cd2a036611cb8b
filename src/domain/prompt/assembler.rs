use std::fmt;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::form::FieldValues;
use crate::domain::letter_type::LetterType;

use super::error::PromptAssemblyError;

/// Catalog path of the letter instruction template.
pub const LETTER_PROMPT_TEMPLATE: &str = "letter.j2";

/// Instruction text sent to the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PromptText(String);

impl PromptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Assemble the instruction for `letter_type` from collected `values`.
///
/// `catalog` resolves template paths to their source (normally the
/// embedded prompt catalog). Pairs are rendered as `label: value` in
/// the iteration order of `values`; output depends only on the inputs.
pub fn assemble_prompt<R>(
    letter_type: LetterType,
    values: &FieldValues,
    catalog: R,
) -> Result<PromptText, PromptAssemblyError>
where
    R: Fn(&str) -> Option<String>,
{
    let template = catalog(LETTER_PROMPT_TEMPLATE)
        .ok_or_else(|| PromptAssemblyError::TemplateNotFound(LETTER_PROMPT_TEMPLATE.into()))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let details: Vec<_> = values.iter().collect();
    let rendered = env
        .render_str(&template, context! { letter_type => letter_type.name(), details => details })
        .map_err(|err| PromptAssemblyError::TemplateRenderError {
            template: LETTER_PROMPT_TEMPLATE.to_string(),
            reason: err.to_string(),
        })?;

    Ok(PromptText(rendered))
}
