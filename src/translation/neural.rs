/*!
 * Neural translation tier.
 *
 * Wraps an injected sequence-to-sequence model and codec, picks decoding
 * parameters from the input size, and cleans up model artifacts in the
 * decoded output.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::TranslationError;
use crate::providers::{Seq2SeqModel, TextCodec};
use super::unit::word_count;

/// Residual language marker tokens such as `>>hi<<`
static LANGUAGE_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r">>\s*\w{2,3}\s*<<").unwrap()
});

/// Artifact some checkpoints emit in place of a marker
const MARKER_ARTIFACT: &str = ">> GG<";

/// Decoding parameters for one generate call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationParameters {
    /// Maximum output length in tokens, also the input truncation length
    pub max_length: usize,
    /// Minimum output length in tokens
    pub min_length: usize,
    /// Beam width; 1 means greedy decoding
    pub num_beams: usize,
    pub length_penalty: f32,
    pub early_stopping: bool,
    /// Always false; decoding is deterministic
    pub do_sample: bool,
    pub repetition_penalty: f32,
    pub no_repeat_ngram_size: usize,
    /// Target-language marker forced as the first decoder token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced_bos_token_id: Option<u32>,
}

impl TranslationParameters {
    /// Parameters for an input of `words` words
    ///
    /// Very short inputs get a short budget and greedy decoding, longer ones
    /// a larger budget and two beams.
    pub fn for_word_count(words: usize) -> Self {
        let (max_length, num_beams) = match words {
            0..=2 => (20, 1),
            3..=4 => (40, 1),
            _ => (75, 2),
        };

        Self {
            max_length,
            min_length: 1,
            num_beams,
            length_penalty: 1.0,
            early_stopping: true,
            do_sample: false,
            repetition_penalty: 1.2,
            no_repeat_ngram_size: 2,
            forced_bos_token_id: None,
        }
    }

    /// Force the decoder to start with the given token
    pub fn with_forced_bos_token(mut self, token_id: Option<u32>) -> Self {
        self.forced_bos_token_id = token_id;
        self
    }
}

/// Model, codec and the lock that serializes inference
struct NeuralBackend {
    model: Arc<dyn Seq2SeqModel>,
    codec: Arc<dyn TextCodec>,
    inference_lock: Mutex<()>,
}

/// Translator backed by a sequence-to-sequence model
#[derive(Clone)]
pub struct NeuralTranslator {
    /// The loaded backend, or the reason it could not be loaded
    backend: Result<Arc<NeuralBackend>, String>,
}

impl NeuralTranslator {
    /// Create a translator around a loaded model and codec
    pub fn new(model: Arc<dyn Seq2SeqModel>, codec: Arc<dyn TextCodec>) -> Self {
        Self {
            backend: Ok(Arc::new(NeuralBackend {
                model,
                codec,
                inference_lock: Mutex::new(()),
            })),
        }
    }

    /// Create a translator whose model failed to initialize
    ///
    /// Every translation attempt reports `TranslationError::ModelUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            backend: Err(reason.into()),
        }
    }

    /// Whether a model is loaded
    pub fn is_available(&self) -> bool {
        self.backend.is_ok()
    }

    fn backend(&self) -> Result<&NeuralBackend, TranslationError> {
        self.backend
            .as_deref()
            .map_err(|reason| TranslationError::ModelUnavailable(reason.clone()))
    }

    /// Translate text with the model
    ///
    /// Blank input is returned as an empty string without running the model.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let backend = self.backend()?;

        let forced_token = backend.codec.language_token_id(target);
        if forced_token.is_none() {
            warn!("No language marker token for '{}', generating without one", target);
        }

        let parameters = TranslationParameters::for_word_count(word_count(text))
            .with_forced_bos_token(forced_token);
        let input_ids = backend.codec.encode(text, parameters.max_length)?;

        let output_ids = {
            let _guard = backend.inference_lock.lock().await;
            backend.model.generate(&input_ids, &parameters).await?
        };

        let raw = backend.codec.decode(&output_ids)?;
        debug!("Raw translation: {}", raw);

        Ok(clean_output(&raw, source, target))
    }

    /// Run a short translation to check the model end to end
    pub async fn warm_up(&self, target: &str) -> Result<String, TranslationError> {
        self.translate("Hello", "en", target).await
    }

    /// Check that the model backend is reachable
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        let backend = self.backend()?;
        backend.model.test_connection().await?;
        Ok(())
    }
}

/// Strip model artifacts from decoded output
///
/// Removes language markers, stray quotes and literal occurrences of the
/// language codes, then trims whitespace.
pub fn clean_output(raw: &str, source: &str, target: &str) -> String {
    let mut text = LANGUAGE_MARKER_REGEX.replace_all(raw, "").trim().to_string();

    for artifact in [MARKER_ARTIFACT, "\"", "'", source, target] {
        if !artifact.is_empty() {
            text = text.replace(artifact, "").trim().to_string();
        }
    }

    text
}
