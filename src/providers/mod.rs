/*!
 * Model backends for the neural translation tier.
 *
 * The sequence-to-sequence model is treated as an opaque capability:
 * - `TextCodec`: turns text into token ids and back, and knows the
 *   language marker tokens used to steer generation
 * - `Seq2SeqModel`: maps input token ids to output token ids
 *
 * Implementations:
 * - `remote`: HTTP client for a model inference server
 * - `tokenizer`: codec backed by the model's `tokenizer.json`
 * - `mock`: deterministic in-process model for tests
 */

use async_trait::async_trait;
use log::{error, info};
use std::fmt::Debug;
use std::sync::Arc;

use crate::app_config::ModelConfig;
use crate::errors::ProviderError;
use crate::translation::neural::{NeuralTranslator, TranslationParameters};

/// Encoding and decoding between text and model token ids
pub trait TextCodec: Send + Sync + Debug {
    /// Encode text into token ids, truncated to at most `max_length` ids
    fn encode(&self, text: &str, max_length: usize) -> Result<Vec<u32>, ProviderError>;

    /// Decode token ids into text, skipping special tokens
    fn decode(&self, ids: &[u32]) -> Result<String, ProviderError>;

    /// Token id of the marker that steers generation into `language`
    fn language_token_id(&self, language: &str) -> Option<u32>;
}

/// Common trait for all sequence-to-sequence model backends
///
/// Backends are not assumed to be safe for concurrent inference;
/// `NeuralTranslator` serializes calls.
#[async_trait]
pub trait Seq2SeqModel: Send + Sync + Debug {
    /// Generate output token ids for the given input ids
    ///
    /// # Arguments
    /// * `input_ids` - Encoded input text
    /// * `parameters` - Decoding parameters for this input
    ///
    /// # Returns
    /// * `Result<Vec<u32>, ProviderError>` - Encoded output or an error
    async fn generate(
        &self,
        input_ids: &[u32],
        parameters: &TranslationParameters,
    ) -> Result<Vec<u32>, ProviderError>;

    /// Check that the backend is reachable and has its model loaded
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

/// Build the neural translator described by the model configuration
///
/// Failures are logged and produce a translator that reports the model as
/// unavailable, so requests that never reach the neural tier keep working.
pub async fn load_neural_translator(config: &ModelConfig) -> NeuralTranslator {
    info!("Loading translation model '{}' from {}", config.model_name, config.endpoint);

    let codec = match tokenizer::TokenizerCodec::from_model_dir(&config.model_dir) {
        Ok(codec) => codec,
        Err(e) => {
            error!("Failed to load tokenizer from {}: {}", config.model_dir.display(), e);
            return NeuralTranslator::unavailable(e.to_string());
        }
    };

    let model = remote::RemoteModel::from_config(config);
    if let Err(e) = model.test_connection().await {
        error!("Translation model backend is not reachable: {}", e);
        return NeuralTranslator::unavailable(e.to_string());
    }

    info!("Successfully loaded translation model '{}'", config.model_name);
    NeuralTranslator::new(Arc::new(model), Arc::new(codec))
}

pub mod mock;
pub mod remote;
pub mod tokenizer;
