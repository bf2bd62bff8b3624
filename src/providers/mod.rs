/*!
 * Provider implementations for different translation backends.
 *
 * This module contains HTTP client implementations for the LLM providers
 * the translation service can dispatch to:
 * - Gemini: Google Generative Language API
 * - OpenAI: OpenAI chat completions API
 * - Ollama: Local LLM server
 *
 * Clients are plain structs with typed request/response models; the
 * polymorphic seam lives one level up, in `translation::Translator`.
 */

pub mod gemini;
pub mod ollama;
pub mod openai;
