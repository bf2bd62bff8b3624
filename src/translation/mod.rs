/*!
 * Translation service: the seam between the pipeline and the LLM providers.
 *
 * The pipeline only knows the `Translator` trait. `TranslationService` is the
 * production implementation: it builds the translation prompt, dispatches to
 * the configured provider client, and normalizes the completion text. Each
 * call is one blocking external request; retry and timeout policy live in the
 * provider clients' configuration, not here.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::{LanguageSpec, TranslationConfig, TranslationProvider};
use crate::errors::{ConfigError, TranslationError};
use crate::providers::gemini::{Gemini, GeminiRequest};
use crate::providers::ollama::{GenerationRequest, Ollama};
use crate::providers::openai::{OpenAI, OpenAIRequest};

/// A capability that translates source text into one target language
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the given target language
    async fn translate(
        &self,
        text: &str,
        language: &LanguageSpec,
    ) -> Result<String, TranslationError>;
}

/// The configured provider client
enum ProviderClient {
    Gemini(Gemini),
    OpenAI(OpenAI),
    Ollama(Ollama),
}

impl Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gemini(_) => write!(f, "ProviderClient::Gemini"),
            Self::OpenAI(_) => write!(f, "ProviderClient::OpenAI"),
            Self::Ollama(_) => write!(f, "ProviderClient::Ollama"),
        }
    }
}

/// Production translator backed by an LLM provider
#[derive(Debug)]
pub struct TranslationService {
    client: ProviderClient,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl TranslationService {
    /// Build a service from the translation configuration
    pub fn from_config(config: &TranslationConfig) -> Result<Self, ConfigError> {
        let provider = &config.provider;
        let provider_config = config
            .get_provider_config(provider)
            .ok_or_else(|| ConfigError::UnknownProvider(provider.to_lowercase_string()))?;

        if provider.requires_api_key() && provider_config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(provider.to_lowercase_string()));
        }

        let client = match provider {
            TranslationProvider::Gemini => ProviderClient::Gemini(Gemini::new(
                provider_config.api_key.clone(),
                provider_config.endpoint.clone(),
                provider_config.timeout_secs,
            )),
            TranslationProvider::OpenAI => ProviderClient::OpenAI(OpenAI::new(
                provider_config.api_key.clone(),
                provider_config.endpoint.clone(),
                provider_config.timeout_secs,
            )),
            TranslationProvider::Ollama => ProviderClient::Ollama(Ollama::new(
                provider_config.endpoint.clone(),
                provider_config.timeout_secs,
            )),
        };

        Ok(Self {
            client,
            model: provider_config.model.clone(),
            temperature: provider_config.temperature,
            max_output_tokens: provider_config.max_output_tokens,
        })
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        match &self.client {
            ProviderClient::Gemini(client) => client.test_connection(&self.model).await?,
            ProviderClient::OpenAI(client) => client.test_connection(&self.model).await?,
            ProviderClient::Ollama(client) => client.test_connection().await?,
        }
        Ok(())
    }

    /// Build the translation prompt for one language
    pub fn build_prompt(text: &str, language: &LanguageSpec) -> String {
        let name = language.display_name_or_default();
        format!(
            "Translate the following text to {name}.\n\
             Return only the translation, no explanations or additional text.\n\n\
             Original text: {text}\n\n\
             Translation ({name}):"
        )
    }
}

#[async_trait]
impl Translator for TranslationService {
    async fn translate(
        &self,
        text: &str,
        language: &LanguageSpec,
    ) -> Result<String, TranslationError> {
        let prompt = Self::build_prompt(text, language);

        let completion = match &self.client {
            ProviderClient::Gemini(client) => {
                let request = GeminiRequest::new(prompt)
                    .temperature(self.temperature)
                    .max_output_tokens(self.max_output_tokens);
                let response = client.complete(&self.model, request).await?;
                Gemini::extract_text_from_response(&response)
            }
            ProviderClient::OpenAI(client) => {
                let request = OpenAIRequest::new(&self.model)
                    .add_message("user", prompt)
                    .temperature(self.temperature)
                    .max_tokens(self.max_output_tokens);
                let response = client.complete(request).await?;
                OpenAI::extract_text_from_response(&response)
            }
            ProviderClient::Ollama(client) => {
                let request = GenerationRequest::new(&self.model, prompt)
                    .temperature(self.temperature)
                    .num_predict(self.max_output_tokens);
                let response = client.generate(request).await?;
                response.response
            }
        };

        let translation = completion.trim().to_string();
        if translation.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }

        Ok(translation)
    }
}
