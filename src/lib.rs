/*!
 * # linguasheet
 *
 * A Rust library for translating tabular datasets into multiple languages
 * using AI.
 *
 * ## Features
 *
 * - Read a configurable source column from a CSV dataset
 * - Translate every row into an ordered list of target languages using
 *   various AI providers:
 *   - Gemini (Google Generative Language API)
 *   - OpenAI API
 *   - Ollama (local LLM)
 * - Strictly sequential per-language pipeline with failure isolation:
 *   a failed translation becomes an inline error cell, never a crash
 * - One output row per input row, one column per language, in configured order
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pipeline`: The sequential translation pipeline:
 *   - `pipeline::state`: Record-scoped accumulating state
 *   - `pipeline::stage`: One step per target language
 *   - `pipeline::executor`: Pipeline construction and execution
 * - `batch`: Batch processing of dataset records
 * - `dataset`: Tabular file input/output
 * - `translation`: The `Translator` seam and provider dispatch
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::openai`: OpenAI API client
 *   - `providers::ollama`: Ollama API client
 * - `app_controller`: Main application controller
 * - `language_utils`: Language tag utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod batch;
pub mod dataset;
pub mod errors;
pub mod language_utils;
pub mod pipeline;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, LanguageSpec};
pub use batch::{BatchRunner, OutputRow};
pub use pipeline::{CellValue, Executor, Pipeline, TranslationState};
pub use translation::{TranslationService, Translator};
pub use errors::{AppError, ConfigError, InputError, ProviderError, RecordError, TranslationError};
