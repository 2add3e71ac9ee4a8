/*!
 * Error types for the bhashantar library.
 *
 * This module contains custom error types for the model backends and the
 * translation pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a model backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an inference request fails
    #[error("Inference request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a backend response fails
    #[error("Failed to parse inference response: {0}")]
    ParseError(String),

    /// Error returned by the inference server itself
    #[error("Inference server responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the server
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error encoding input text or decoding model output
    #[error("Codec error: {0}")]
    CodecError(String),

    /// The model raised during generation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The neural backend failed to initialize
    #[error("Translation model not available: {0}")]
    ModelUnavailable(String),

    /// The model call failed while generating a translation
    #[error("Inference failure: {0}")]
    InferenceFailure(#[from] ProviderError),

    /// No configured tier produced a translation for a chunk
    #[error("No translation tier available for {source_language} -> {target_language}")]
    NoApplicableTier {
        source_language: String,
        target_language: String,
    },
}
