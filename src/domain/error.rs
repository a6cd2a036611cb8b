use std::io;

use thiserror::Error;

use super::form::ValidationErrors;
use super::generation::GenerationError;
use super::prompt::PromptAssemblyError;

/// Library-wide error type for likhit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Letter type name is not one of the supported types.
    #[error("Unknown letter type '{name}'. Available: {available}")]
    UnknownLetterType { name: String, available: String },

    /// Submitted form failed validation.
    #[error(transparent)]
    InvalidFields(#[from] ValidationErrors),

    /// Generation call failed or returned no letter.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Prompt assembly failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(#[from] PromptAssemblyError),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Session action not allowed in the current state.
    #[error("Cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: &'static str },

    /// Interactive prompt failed.
    #[error("{0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnknownLetterType { .. }
            | AppError::InvalidFields(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::Generation(_) | AppError::PromptAssembly(_) => io::ErrorKind::Other,
            AppError::InvalidTransition { .. } | AppError::Interaction(_) => {
                io::ErrorKind::Unsupported
            }
        }
    }
}
