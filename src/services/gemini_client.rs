//! Generative Language API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::domain::{AppError, GenerationApiConfig, GenerationError, PromptText};
use crate::ports::TextGenerator;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Finish reasons that mean the model withheld its output.
const REFUSAL_FINISH_REASONS: [&str; 5] =
    ["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// HTTP client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    temperature: Option<f32>,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint =
            config.api_url.join(&format!("models/{}:generateContent", config.model)).map_err(
                |e| AppError::Configuration(format!("Invalid model endpoint: {}", e)),
            )?;

        Ok(Self { api_key, endpoint, temperature: config.temperature, client })
    }

    /// Create from the environment variable named in `config`.
    ///
    /// Falls back to `GOOGLE_API_KEY` when the configured variable is unset.
    pub fn from_env_with_config(config: &GenerationApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .or_else(|_| std::env::var(FALLBACK_API_KEY_ENV))
            .map_err(|_| {
                AppError::Configuration(format!(
                    "{} environment variable not set",
                    config.api_key_env
                ))
            })?;

        Self::new(api_key, config)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Structured output requested from the model.
#[derive(Debug, Deserialize)]
struct LetterPayload {
    #[serde(default)]
    letter: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl TextGenerator for HttpGeminiClient {
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError> {
        let request = ApiRequest {
            contents: [Content { role: "user", parts: [RequestPart { text: prompt.as_str() }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": { "letter": { "type": "STRING" } },
                    "required": ["letter"],
                }),
                temperature: self.temperature,
            },
        };

        tracing::debug!(endpoint = %self.endpoint, "sending generateContent request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "generateContent responded");

        if !status.is_success() {
            let message = service_error_message(response.text());
            return Err(GenerationError::Service { status: status.as_u16(), message });
        }

        let body = response.text().map_err(|e| GenerationError::Transport(e.to_string()))?;
        parse_letter_body(&body)
    }
}

/// Message for a non-success status, taken from the error body when it can be read.
fn service_error_message<E: std::fmt::Display>(body: Result<String, E>) -> String {
    let body = match body {
        Ok(body) => body,
        Err(err) => return format!("failed to read error response: {}", err),
    };
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => body,
    }
}

/// Extract the letter body from a successful `generateContent` response.
fn parse_letter_body(body: &str) -> Result<String, GenerationError> {
    let api_response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    if let Some(reason) = api_response.prompt_feedback.and_then(|feedback| feedback.block_reason) {
        return Err(GenerationError::Refused(reason));
    }

    let candidate = api_response.candidates.into_iter().next().ok_or_else(|| {
        GenerationError::MalformedResponse("response contained no candidates".into())
    })?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate.finish_reason
            && REFUSAL_FINISH_REASONS.contains(&reason.as_str())
        {
            return Err(GenerationError::Refused(reason));
        }
        return Ok(String::new());
    }

    let payload: LetterPayload = serde_json::from_str(&text).map_err(|e| {
        GenerationError::MalformedResponse(format!("candidate is not a letter object: {}", e))
    })?;
    Ok(payload.letter.unwrap_or_default())
}
