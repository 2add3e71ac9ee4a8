/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which normalizes
 * language codes, splits text into chunks, runs each chunk through the
 * translation tiers and reassembles the result, with the cache in front of
 * every step.
 */

use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::errors::TranslationError;
use crate::language_utils::normalize_language_code;
use super::cache::TranslationCache;
use super::neural::NeuralTranslator;
use super::segmenter::segment;
use super::strategy::{TranslationStrategy, default_tiers};
use super::unit::TranslationUnit;

/// Mode reported with every response; all models run locally
pub const TRANSLATION_MODE: &str = "offline";

/// Result of one translation request
///
/// Failures are reported in `error` with an empty `translated_text`
/// rather than as a Rust error, so batch callers see per-item outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text, empty on failure
    pub translated_text: String,

    /// Translation mode
    pub mode: String,

    /// Error message if the translation failed
    pub error: Option<String>,
}

impl TranslationResponse {
    /// Create a successful response
    pub fn success(translated_text: impl Into<String>) -> Self {
        Self {
            translated_text: translated_text.into(),
            mode: TRANSLATION_MODE.to_string(),
            error: None,
        }
    }

    /// Create a failed response
    pub fn failure(error: impl ToString) -> Self {
        Self {
            translated_text: String::new(),
            mode: TRANSLATION_MODE.to_string(),
            error: Some(error.to_string()),
        }
    }

    /// Whether the translation succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Main translation service
#[derive(Clone)]
pub struct TranslationService {
    /// Translation tiers in priority order
    tiers: Arc<Vec<Box<dyn TranslationStrategy>>>,

    /// Translation cache shared by all tiers and requests
    cache: TranslationCache,
}

impl TranslationService {
    /// Create a service with the standard tiers around a neural translator
    pub fn new(neural: NeuralTranslator, cache: TranslationCache) -> Self {
        Self::with_tiers(default_tiers(neural), cache)
    }

    /// Create a service with a custom tier list
    pub fn with_tiers(tiers: Vec<Box<dyn TranslationStrategy>>, cache: TranslationCache) -> Self {
        Self {
            tiers: Arc::new(tiers),
            cache,
        }
    }

    /// The translation cache
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Names of the configured tiers in priority order
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Translate a text between two languages
    ///
    /// Never fails: errors are reported inside the response.
    pub async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> TranslationResponse {
        match self.translate_text(text, source_language, target_language).await {
            Ok(translated) => TranslationResponse::success(translated),
            Err(e) => {
                error!("Translation error: {}", e);
                TranslationResponse::failure(e)
            }
        }
    }

    /// Translate several texts in input order
    ///
    /// Each text is translated independently; a failure only affects its own
    /// response.
    pub async fn translate_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        source_language: &str,
        target_language: &str,
    ) -> Vec<TranslationResponse> {
        self.translate_batch_with_progress(texts, source_language, target_language, |_, _| {}).await
    }

    /// Translate several texts, reporting `(completed, total)` after each one
    pub async fn translate_batch_with_progress<S: AsRef<str>>(
        &self,
        texts: &[S],
        source_language: &str,
        target_language: &str,
        progress_callback: impl Fn(usize, usize),
    ) -> Vec<TranslationResponse> {
        let start_time = Instant::now();
        let mut responses = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            responses.push(self.translate(text.as_ref(), source_language, target_language).await);
            progress_callback(index + 1, texts.len());
        }

        info!("Batch translation of {} texts completed in {:.2}s",
              texts.len(), start_time.elapsed().as_secs_f64());

        responses
    }

    async fn translate_text(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, TranslationError> {
        let start_time = Instant::now();

        let source = normalize_language_code(source_language);
        let target = normalize_language_code(target_language);
        let unit = TranslationUnit::new(text, source, target);

        if let Some(cached) = self.cache.get(&unit) {
            info!("Cache hit! Translation time: {:.2}s", start_time.elapsed().as_secs_f64());
            return Ok(cached);
        }

        let chunks = segment(text);
        if chunks.len() > 1 {
            debug!("Split into {} chunks ({} -> {})", chunks.len(), source, target);
        }

        let total_chunks = chunks.len();
        let mut translations = Vec::with_capacity(total_chunks);
        for (index, chunk) in chunks.into_iter().enumerate() {
            debug!("Translating chunk {}/{}", index + 1, total_chunks);
            let chunk_unit = TranslationUnit::new(chunk, source, target);
            translations.push(self.translate_chunk(&chunk_unit).await?);
        }

        let translated = translations.join(" ");
        self.cache.put(&unit, &translated);

        info!("Complete translation time: {:.2}s", start_time.elapsed().as_secs_f64());
        Ok(translated)
    }

    async fn translate_chunk(&self, unit: &TranslationUnit) -> Result<String, TranslationError> {
        if let Some(cached) = self.cache.get(unit) {
            return Ok(cached);
        }

        for tier in self.tiers.iter() {
            if !tier.applicable(unit) {
                continue;
            }

            if let Some(translated) = tier.attempt(unit).await? {
                debug!("Chunk resolved by {} tier", tier.name());
                self.cache.put(unit, &translated);
                return Ok(translated);
            }
        }

        Err(TranslationError::NoApplicableTier {
            source_language: unit.source.to_string(),
            target_language: unit.target.to_string(),
        })
    }
}
