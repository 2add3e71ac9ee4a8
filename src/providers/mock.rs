/*!
 * Mock model implementations for testing.
 *
 * This module provides a deterministic codec and model that simulate
 * different backend behaviors:
 * - `MockModel::working()` - Always succeeds, "translating" to upper case
 * - `MockModel::failing()` - Always fails with an error
 * - `MockModel::failing_on(marker)` - Fails only for inputs containing `marker`
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::language_utils::SUPPORTED_LANGUAGES;
use crate::providers::{Seq2SeqModel, TextCodec};
use crate::translation::neural::TranslationParameters;

/// First id above the Unicode range, used for language marker tokens
const SPECIAL_TOKEN_BASE: u32 = 0x11_0000;

/// Codec that encodes each character as its Unicode scalar value
///
/// Language markers get ids above the Unicode range, so they can never be
/// confused with text and are skipped on decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCodec;

impl TextCodec for MockCodec {
    fn encode(&self, text: &str, max_length: usize) -> Result<Vec<u32>, ProviderError> {
        Ok(text.chars().take(max_length).map(u32::from).collect())
    }

    fn decode(&self, ids: &[u32]) -> Result<String, ProviderError> {
        Ok(ids.iter().filter_map(|id| char::from_u32(*id)).collect())
    }

    fn language_token_id(&self, language: &str) -> Option<u32> {
        SUPPORTED_LANGUAGES
            .iter()
            .position(|code| *code == language)
            .map(|index| SPECIAL_TOKEN_BASE + index as u32)
    }
}

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the upper-cased input
    Working,
    /// Fails whenever the decoded input contains the marker
    FailOn(&'static str),
    /// Always fails with an error
    Failing,
    /// Returns an empty output
    Empty,
}

/// Mock model for testing translation behavior
#[derive(Debug)]
pub struct MockModel {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls
    call_count: Arc<AtomicUsize>,
    /// Parameters of the most recent generate call
    last_parameters: Arc<Mutex<Option<TranslationParameters>>>,
}

impl MockModel {
    /// Create a new mock model with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_parameters: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a working mock model that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock model that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock model that fails for inputs containing `marker`
    pub fn failing_on(marker: &'static str) -> Self {
        Self::new(MockBehavior::FailOn(marker))
    }

    /// Create a mock model that returns empty output
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of generate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Parameters passed to the most recent generate call
    pub fn last_parameters(&self) -> Option<TranslationParameters> {
        self.last_parameters.lock().clone()
    }
}

impl Clone for MockModel {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            last_parameters: Arc::clone(&self.last_parameters),
        }
    }
}

#[async_trait]
impl Seq2SeqModel for MockModel {
    async fn generate(
        &self,
        input_ids: &[u32],
        parameters: &TranslationParameters,
    ) -> Result<Vec<u32>, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_parameters.lock() = Some(parameters.clone());

        let input: String = input_ids.iter().filter_map(|id| char::from_u32(*id)).collect();

        match self.behavior {
            MockBehavior::Working => {
                let mut output: Vec<u32> = parameters.forced_bos_token_id.into_iter().collect();
                output.extend(input.to_uppercase().chars().map(u32::from));
                Ok(output)
            }

            MockBehavior::FailOn(marker) if input.contains(marker) => Err(
                ProviderError::GenerationFailed(format!("Simulated failure for input '{}'", input)),
            ),

            MockBehavior::FailOn(_) => Ok(input.to_uppercase().chars().map(u32::from).collect()),

            MockBehavior::Failing => Err(ProviderError::GenerationFailed(
                "Simulated model failure".to_string(),
            )),

            MockBehavior::Empty => Ok(Vec::new()),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
