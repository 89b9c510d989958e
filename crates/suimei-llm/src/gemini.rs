//! Gemini - Google Gemini API provider
//!
//! Implements the `generateContent` REST call used for appraisal enrichment.

use crate::enrichment::{build_prompt, parse_response, EnrichmentRequest, EnrichmentResponse};
use crate::error::{Error, Result};
use crate::util::mask_api_key;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sanitize Gemini API error messages to prevent leaking sensitive information
fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();

    // Don't expose authentication details
    if lower.contains("api key")
        || lower.contains("apikey")
        || lower.contains("unauthorized")
        || lower.contains("permission denied")
    {
        return "API authentication error. Please check your API key configuration.".to_string();
    }

    // Don't expose internal server errors
    if lower.contains("internal") || lower.contains("server error") {
        return "API server error. Please try again later.".to_string();
    }

    if error.len() > 300 {
        let cut = error
            .char_indices()
            .take_while(|(i, _)| *i < 300)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}...(truncated)", &error[..cut])
    } else {
        error.to_string()
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: GeminiContent,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Gemini provider configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key
    pub api_key: String,
    /// Base URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
    /// Max output tokens
    pub max_output_tokens: u32,
    /// Max attempts for retryable failures
    pub max_retries: u32,
}

// Custom Debug implementation to mask credentials
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a new configuration with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
            max_output_tokens: 8192,
            max_retries: 3,
        }
    }

    /// Create configuration from `GEMINI_API_KEY` / `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                Error::NotConfigured("GEMINI_API_KEY or GOOGLE_API_KEY not found".to_string())
            })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        Ok(config)
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the max retry attempts
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the max output tokens
    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Google Gemini provider
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Base delay between retry attempts; grows linearly per attempt.
    const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

    /// Cap on a single retry delay.
    const RETRY_MAX_DELAY: Duration = Duration::from_secs(10);

    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Runs the appraisal enrichment with bounded retry.
    ///
    /// Only transient failures are retried, with a linearly growing, capped
    /// delay; a permanent failure returns immediately.
    pub async fn enrich(&self, request: &EnrichmentRequest<'_>) -> Result<EnrichmentResponse> {
        let prompt = build_prompt(request);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.generate_content(&prompt).await {
                Ok(text) => return parse_response(&text),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = (Self::RETRY_BASE_DELAY * attempt).min(Self::RETRY_MAX_DELAY);
                    warn!(
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "gemini enrichment failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single `generateContent` call returning the concatenated answer text.
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: None,
                max_output_tokens: Some(self.config.max_output_tokens),
            }),
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.config.timeout.as_millis() as u64)
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                return Err(Error::RateLimit);
            }
            let body_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiApiError>(&body_text)
                .map_or(body_text, |parsed| parsed.error.message);
            return Err(Error::Api(format!(
                "HTTP {}: {}",
                status.as_u16(),
                sanitize_api_error(&message)
            )));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidResponse("no candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(Error::InvalidResponse("empty candidate text".to_string()));
        }

        debug!(chars = text.len(), "gemini enrichment response received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = GeminiConfig::new("AIzaSySECRETSECRET");
        let debug = format!("{config:?}");
        assert!(!debug.contains("SECRETSECRET"));
        assert!(debug.contains("AIza..."));
    }

    #[test]
    fn test_config_builders() {
        let config = GeminiConfig::new("key-1234567890")
            .with_model("gemini-2.5-flash")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(1);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_sanitize_hides_auth_details() {
        let sanitized = sanitize_api_error("API key not valid. Please pass a valid API key.");
        assert!(!sanitized.contains("API key not valid"));
        assert!(sanitized.contains("authentication"));
    }

    #[test]
    fn test_sanitize_truncates_long_messages() {
        let long = "x".repeat(500);
        let sanitized = sanitize_api_error(&long);
        assert!(sanitized.ends_with("...(truncated)"));
        assert!(sanitized.len() < 400);
    }

    #[test]
    fn test_sanitize_passes_through_plain_errors() {
        assert_eq!(sanitize_api_error("model not found"), "model not found");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Reserved TEST-NET address: the connection fails fast without
        // touching the real API.
        let config = GeminiConfig::new("key-1234567890")
            .with_base_url("http://192.0.2.1:1")
            .with_timeout(Duration::from_millis(200))
            .with_max_retries(1);
        let provider = GeminiProvider::new(config).unwrap();
        let error = tokio_test::block_on(provider.generate_content("hello")).unwrap_err();
        assert!(matches!(error, Error::Network(_) | Error::Timeout(_)));
    }
}
