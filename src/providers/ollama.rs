use std::time::Duration;
use serde::{Serialize, Deserialize};
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;

/// Ollama client for a local LLM server
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,

    /// Prompt to generate from
    prompt: String,

    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,

    /// Whether to stream the response
    stream: bool,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub response: String,

    /// Whether the generation is complete
    pub done: bool,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            options: None,
            stream: false,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options_mut().temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn num_predict(mut self, num_predict: u32) -> Self {
        self.options_mut().num_predict = Some(num_predict);
        self
    }

    fn options_mut(&mut self) -> &mut GenerationOptions {
        self.options.get_or_insert(GenerationOptions {
            temperature: None,
            num_predict: None,
        })
    }
}

impl Ollama {
    /// Create a new Ollama client
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Complete a generation request
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let api_url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let generation_response = response.json::<GenerationResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(generation_response)
    }

    /// Test the connection to the Ollama server
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        let api_url = format!("{}/api/version", self.base_url.trim_end_matches('/'));
        self.client.get(&api_url)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        Ok(())
    }
}
