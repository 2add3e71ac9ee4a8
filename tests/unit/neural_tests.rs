/*!
 * Tests for the neural translation tier
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use bhashantar::errors::{ProviderError, TranslationError};
use bhashantar::providers::{Seq2SeqModel, TextCodec};
use bhashantar::providers::mock::{MockCodec, MockModel};
use bhashantar::translation::neural::{NeuralTranslator, TranslationParameters, clean_output};

use crate::common::mock_translator;

#[test]
fn test_parameters_withOneOrTwoWords_shouldUseShortGreedyDecoding() {
    for words in [0, 1, 2] {
        let params = TranslationParameters::for_word_count(words);
        assert_eq!(params.max_length, 20);
        assert_eq!(params.num_beams, 1);
    }
}

#[test]
fn test_parameters_withThreeOrFourWords_shouldUseMediumBudget() {
    for words in [3, 4] {
        let params = TranslationParameters::for_word_count(words);
        assert_eq!(params.max_length, 40);
        assert_eq!(params.num_beams, 1);
    }
}

#[test]
fn test_parameters_withFiveOrMoreWords_shouldUseBeamSearch() {
    for words in [5, 15, 40] {
        let params = TranslationParameters::for_word_count(words);
        assert_eq!(params.max_length, 75);
        assert_eq!(params.num_beams, 2);
    }
}

#[test]
fn test_parameters_shouldKeepFixedDecodingSettings() {
    let params = TranslationParameters::for_word_count(7);

    assert_eq!(params.min_length, 1);
    assert_eq!(params.length_penalty, 1.0);
    assert!(params.early_stopping);
    assert!(!params.do_sample);
    assert_eq!(params.repetition_penalty, 1.2);
    assert_eq!(params.no_repeat_ngram_size, 2);
    assert_eq!(params.forced_bos_token_id, None);
}

#[test]
fn test_cleanOutput_shouldStripLanguageMarkers() {
    assert_eq!(clean_output(">>ta<< வணக்கம்", "en", "ta"), "வணக்கம்");
    assert_eq!(clean_output("வணக்கம் >> hi <<", "en", "hi"), "வணக்கம்");
    assert_eq!(clean_output(">> GG< নমস্কার", "en", "bn"), "নমস্কার");
}

#[test]
fn test_cleanOutput_shouldStripQuotesAndCodeLiterals() {
    assert_eq!(clean_output("'नमस्ते' hi", "en", "hi"), "नमस्ते");
    assert_eq!(clean_output("\"Hello\" en", "hi", "en"), "Hello");
}

#[tokio::test]
async fn test_translate_withWorkingModel_shouldReturnCleanedOutput() {
    let model = MockModel::working();
    let translator = mock_translator(&model);

    let result = translator.translate("good morning", "en", "ta").await.unwrap();

    assert_eq!(result, "GOOD MORNING");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_translate_shouldForceTargetLanguageToken() {
    let model = MockModel::working();
    let translator = mock_translator(&model);

    translator.translate("one two three four five six", "en", "ml").await.unwrap();

    let params = model.last_parameters().unwrap();
    assert_eq!(params.forced_bos_token_id, MockCodec.language_token_id("ml"));
    assert_eq!(params.max_length, 75);
    assert_eq!(params.num_beams, 2);
}

#[tokio::test]
async fn test_translate_withBlankText_shouldSkipModel() {
    let model = MockModel::working();
    let translator = mock_translator(&model);

    assert_eq!(translator.translate("   ", "en", "ta").await.unwrap(), "");
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_translate_withBlankTextAndUnavailableModel_shouldReturnEmptyText() {
    let translator = NeuralTranslator::unavailable("down");

    assert_eq!(translator.translate("", "en", "ta").await.unwrap(), "");
    assert_eq!(translator.translate("   ", "en", "ta").await.unwrap(), "");
}

#[tokio::test]
async fn test_translate_withFailingModel_shouldReturnInferenceFailure() {
    let model = MockModel::failing();
    let translator = mock_translator(&model);

    let result = translator.translate("good morning", "en", "ta").await;

    assert!(matches!(result, Err(TranslationError::InferenceFailure(_))));
}

#[tokio::test]
async fn test_translate_withEmptyModelOutput_shouldReturnEmptyText() {
    let model = MockModel::empty();
    let translator = mock_translator(&model);

    assert_eq!(translator.translate("good morning", "en", "ta").await.unwrap(), "");
}

#[tokio::test]
async fn test_translate_withUnavailableModel_shouldReturnModelUnavailable() {
    let translator = NeuralTranslator::unavailable("tokenizer missing");

    assert!(!translator.is_available());

    let result = translator.translate("good morning", "en", "ta").await;
    match result {
        Err(TranslationError::ModelUnavailable(reason)) => assert_eq!(reason, "tokenizer missing"),
        other => panic!("Expected ModelUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_warmUp_shouldTranslateHello() {
    let model = MockModel::working();
    let translator = mock_translator(&model);

    assert_eq!(translator.warm_up("hi").await.unwrap(), "HELLO");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_testConnection_shouldReflectBackendState() {
    let working = mock_translator(&MockModel::working());
    let failing = mock_translator(&MockModel::failing());
    let unavailable = NeuralTranslator::unavailable("no model");

    assert!(working.test_connection().await.is_ok());
    assert!(failing.test_connection().await.is_err());
    assert!(unavailable.test_connection().await.is_err());
}

#[tokio::test]
async fn test_translate_concurrentCalls_shouldAllComplete() {
    let model = MockModel::working();
    let translator = Arc::new(mock_translator(&model));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let translator = Arc::clone(&translator);
            tokio::spawn(async move {
                translator.translate(&format!("text number {}", i), "en", "ta").await
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result, format!("TEXT NUMBER {}", i));
    }

    assert_eq!(model.call_count(), 10);
}

/// Echo model that records how many generations overlap
#[derive(Debug, Default)]
struct OverlapTrackingModel {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

#[async_trait]
impl Seq2SeqModel for OverlapTrackingModel {
    async fn generate(
        &self,
        input_ids: &[u32],
        _parameters: &TranslationParameters,
    ) -> Result<Vec<u32>, ProviderError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(20)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(input_ids.to_vec())
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_translate_concurrentCallsOnWorkerThreads_shouldNeverOverlapInference() {
    let model = Arc::new(OverlapTrackingModel::default());
    let translator = Arc::new(NeuralTranslator::new(model.clone(), Arc::new(MockCodec)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let translator = Arc::clone(&translator);
            tokio::spawn(async move {
                translator.translate(&format!("chunk {}", i), "en", "ta").await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(model.calls.load(Ordering::SeqCst), 8);
    assert_eq!(model.max_in_flight.load(Ordering::SeqCst), 1);
}
