use std::time::Duration;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;

/// Gemini client for the Google Generative Language API
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// The conversation content
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// One content block in a Gemini request or response
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the content (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    pub parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text content
    pub text: String,
}

/// Generation parameters
#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// One response candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Candidate content
    pub content: GeminiContent,
}

impl GeminiRequest {
    /// Create a new request with a single user message
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: prompt.into() }],
            }],
            generation_config: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config_mut().temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.config_mut().max_output_tokens = Some(max_output_tokens);
        self
    }

    fn config_mut(&mut self) -> &mut GenerationConfig {
        self.generation_config.get_or_insert(GenerationConfig {
            temperature: None,
            max_output_tokens: None,
        })
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Complete a generateContent request
    pub async fn complete(
        &self,
        model: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, ProviderError> {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        let api_url = format!("{}/v1beta/models/{}:generateContent", base, model);

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(error_text),
                429 => ProviderError::RateLimitExceeded(error_text),
                code => ProviderError::ApiError {
                    status_code: code,
                    message: error_text,
                },
            });
        }

        let gemini_response = response.json::<GeminiResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(gemini_response)
    }

    /// Test the connection to the Gemini API
    pub async fn test_connection(&self, model: &str) -> Result<(), ProviderError> {
        let request = GeminiRequest::new("Hello").max_output_tokens(10);
        self.complete(model, request).await?;
        Ok(())
    }

    /// Extract text from a Gemini response
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response.candidates.iter()
            .flat_map(|c| c.content.parts.iter())
            .map(|p| p.text.clone())
            .collect()
    }
}
