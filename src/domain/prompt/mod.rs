pub mod assembler;
pub mod error;
pub mod header;

pub use assembler::{LETTER_PROMPT_TEMPLATE, PromptText, assemble_prompt};
pub use error::PromptAssemblyError;
pub use header::{finalize_letter, letter_header};
