/*!
 * Error types for the linguasheet application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The taxonomy mirrors the failure boundaries of the system:
 * - `TranslationError`: per-stage, recovered locally by the stage itself and
 *   surfaced only as a sentinel cell in the output row.
 * - `RecordError`: per-record, recovered by the batch runner; the record's row
 *   is degraded and the batch continues.
 * - `InputError` / `ConfigError`: dataset-level, fatal; the run aborts.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Errors that can occur while translating a single text into one language
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned an empty or unusable completion
    #[error("Provider returned an empty translation")]
    EmptyResponse,
}

/// Errors scoped to a single dataset record
#[derive(Error, Debug)]
pub enum RecordError {
    /// The terminal pipeline state is missing one or more language entries
    #[error("Record {row}: terminal state is missing translations for: {missing}")]
    IncompleteState {
        /// Zero-based row index in the input dataset
        row: usize,
        /// Comma-separated language codes with no entry
        missing: String,
    },
}

/// Errors that can occur while reading or writing the tabular dataset
#[derive(Error, Debug)]
pub enum InputError {
    /// The configured source column does not exist in the input file
    #[error("Column '{column}' not found. Available: {available}")]
    ColumnNotFound {
        /// The requested source column name
        column: String,
        /// Comma-separated list of columns present in the file
        available: String,
    },

    /// Error reading or parsing the tabular file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from a file operation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the language/provider configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configured language list is empty
    #[error("No target languages configured")]
    NoLanguages,

    /// The same language code appears more than once
    #[error("Duplicate language code in configuration: {0}")]
    DuplicateLanguage(String),

    /// A language code failed validation
    #[error("Invalid language code: {0}")]
    InvalidLanguageCode(String),

    /// The selected provider requires an API key that was not supplied
    #[error("Provider '{0}' requires an API key")]
    MissingApiKey(String),

    /// The selected provider has no entry in the provider table
    #[error("No configuration found for provider '{0}'")]
    UnknownProvider(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error reading or writing the dataset
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Input(InputError::Io(error))
    }
}
