//! Configuration models loaded from `likhit.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LikhitConfig {
    /// Generative-text service configuration.
    #[serde(default)]
    pub generation: GenerationApiConfig,
}

impl LikhitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()
    }
}

/// Generative Language API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationApiConfig {
    /// API base URL; model endpoints are resolved relative to it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Sampling temperature; the service default applies when unset.
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            temperature: None,
            api_key_env: default_api_key_env(),
        }
    }
}

impl GenerationApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("api_key_env must not be empty"));
        }
        if let Some(temperature) = self.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(AppError::config_error(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                temperature
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LikhitConfig::default();
        assert_eq!(config.generation.model, "gemini-2.0-flash");
        assert_eq!(config.generation.timeout_secs, 60);
        assert_eq!(config.generation.api_key_env, "GEMINI_API_KEY");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GenerationApiConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_model() {
        let config = GenerationApiConfig { model: " ".into(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = GenerationApiConfig { temperature: Some(2.5), ..Default::default() };
        assert!(config.validate().is_err());

        let config = GenerationApiConfig { temperature: Some(0.0), ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
