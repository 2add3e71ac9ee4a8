/*!
 * # Bhashantar - Offline English/Indic text translation
 *
 * A Rust library for translating short texts between English and Indic
 * languages with a tiered pipeline.
 *
 * ## Features
 *
 * - Exact-match phrase dictionary for common English -> Hindi phrases
 * - Word-by-word substitution for short English -> Hindi inputs
 * - Neural sequence-to-sequence model for everything else
 * - Sentence and clause chunking for long inputs
 * - Bounded LRU cache in front of every tier
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: The translation pipeline:
 *   - `translation::core`: The `TranslationService` orchestrator
 *   - `translation::cache`: Caching of whole texts and chunks
 *   - `translation::segmenter`: Chunking of long inputs
 *   - `translation::strategy`: The ordered translation tiers
 * - `providers`: Model backends for the neural tier:
 *   - `providers::remote`: HTTP inference server client
 *   - `providers::tokenizer`: Hugging Face tokenizer codec
 *   - `providers::mock`: Deterministic model for tests
 * - `language_utils`: ISO language code utilities
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
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use translation::{TranslationCache, TranslationResponse, TranslationService};
pub use language_utils::{get_language_name, language_codes_match, normalize_language_code};
pub use errors::{ProviderError, TranslationError};
