use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Name of the input column holding the source text
    #[serde(default = "default_source_column")]
    pub source_column: String,

    /// Ordered list of target languages; order determines both pipeline
    /// stage order and output column order
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageSpec>,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// One target language descriptor: immutable configuration, not runtime state
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Language tag (e.g. "vi", "en-AU")
    pub code: String,

    /// Human-readable name used as the output column header
    #[serde(default)]
    pub display_name: String,
}

impl LanguageSpec {
    /// Create a descriptor with an explicit display name
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// Create a descriptor deriving the display name from the tag
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let display_name = language_utils::default_display_name(&code);
        Self { code, display_name }
    }

    /// Display name, falling back to the derived one when unset
    pub fn display_name_or_default(&self) -> String {
        if self.display_name.is_empty() {
            language_utils::default_display_name(&self.code)
        } else {
            self.display_name.clone()
        }
    }
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Google Gemini
    #[default]
    Gemini,
    // @provider: OpenAI
    OpenAI,
    // @provider: Ollama (local LLM server)
    Ollama,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::OpenAI => "OpenAI",
            Self::Ollama => "Ollama",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Ollama => "ollama".to_string(),
        }
    }

    // @returns: Whether this provider needs an API key to operate
    pub fn requires_api_key(&self) -> bool {
        match self {
            Self::Gemini | Self::OpenAI => true,
            Self::Ollama => false,
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            "ollama" => Ok(Self::Ollama),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "String::new")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: Max tokens per completion
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Gemini => Self {
                provider_type: "gemini".to_string(),
                model: default_gemini_model(),
                api_key: String::new(),
                endpoint: String::new(),
                temperature: default_temperature(),
                max_output_tokens: default_max_output_tokens(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::OpenAI => Self {
                provider_type: "openai".to_string(),
                model: default_openai_model(),
                api_key: String::new(),
                endpoint: String::new(),
                temperature: default_temperature(),
                max_output_tokens: default_max_output_tokens(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::Ollama => Self {
                provider_type: "ollama".to_string(),
                model: default_ollama_model(),
                api_key: String::new(),
                endpoint: default_ollama_endpoint(),
                temperature: default_temperature(),
                max_output_tokens: default_max_output_tokens(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

/// Translation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Selected provider
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Configuration entries for every known provider
    #[serde(default = "default_available_providers")]
    pub available_providers: Vec<ProviderConfig>,
}

impl TranslationConfig {
    /// Get the configuration entry for a provider, if present
    pub fn get_provider_config(&self, provider: &TranslationProvider) -> Option<&ProviderConfig> {
        let provider_str = provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a mutable configuration entry for a provider, if present
    pub fn get_provider_config_mut(
        &mut self,
        provider: &TranslationProvider,
    ) -> Option<&mut ProviderConfig> {
        let provider_str = provider.to_lowercase_string();
        self.available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: default_available_providers(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_column: default_source_column(),
            languages: default_languages(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// Checks the language list (non-empty, valid tags, no duplicates) and
    /// the selected provider entry (present, API key where required).
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(anyhow!("No target languages configured"));
        }

        for lang in &self.languages {
            language_utils::validate_language_tag(&lang.code)
                .map_err(|_| ConfigError::InvalidLanguageCode(lang.code.clone()))?;
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.languages.len());
        for lang in &self.languages {
            if seen.iter().any(|s| language_utils::language_tags_match(s, &lang.code)) {
                return Err(anyhow!("Duplicate language code in configuration: {}", lang.code));
            }
            seen.push(&lang.code);
        }

        if self.source_column.trim().is_empty() {
            return Err(anyhow!("Source column name must not be empty"));
        }

        let provider = &self.translation.provider;
        let provider_config = self
            .translation
            .get_provider_config(provider)
            .ok_or_else(|| anyhow!("No configuration found for provider '{}'", provider))?;

        if provider.requires_api_key() && provider_config.api_key.is_empty() {
            return Err(anyhow!("Provider '{}' requires an API key", provider));
        }

        if provider_config.model.is_empty() {
            return Err(anyhow!("No model configured for provider '{}'", provider));
        }

        Ok(())
    }

    /// Languages with display names resolved (blank names derived from the tag)
    pub fn resolved_languages(&self) -> Vec<LanguageSpec> {
        self.languages
            .iter()
            .map(|lang| LanguageSpec::new(lang.code.clone(), lang.display_name_or_default()))
            .collect()
    }
}

fn default_source_column() -> String {
    "Original Text".to_string()
}

fn default_languages() -> Vec<LanguageSpec> {
    vec![
        LanguageSpec::new("en-US", "English (US)"),
        LanguageSpec::new("en-AU", "English (Australia)"),
        LanguageSpec::new("vi", "Vietnamese"),
        LanguageSpec::new("th", "Thai"),
        LanguageSpec::new("hi", "Hindi"),
    ]
}

fn default_available_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::Gemini),
        ProviderConfig::new(TranslationProvider::OpenAI),
        ProviderConfig::new(TranslationProvider::Ollama),
    ]
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    60
}
