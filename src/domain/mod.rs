pub mod configuration;
pub mod error;
pub mod field;
pub mod form;
pub mod generation;
pub mod letter_type;
pub mod prompt;
pub mod registry;

pub use configuration::{GenerationApiConfig, LikhitConfig};
pub use error::AppError;
pub use field::{FieldKind, FieldSpec, ValidationRule};
pub use form::{FieldValue, FieldValues, FieldViolation, RawFields, ValidationErrors, collect};
pub use generation::{GenerationError, GenerationRequest, GenerationResult, Letter};
pub use letter_type::LetterType;
pub use prompt::{PromptAssemblyError, PromptText, assemble_prompt, finalize_letter, letter_header};
pub use registry::{LetterTypeSpec, all_types, spec_for};
