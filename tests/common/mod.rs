/*!
 * Common test utilities for the bhashantar test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use bhashantar::providers::mock::{MockCodec, MockModel};
use bhashantar::translation::{NeuralTranslator, TranslationCache, TranslationService};

/// Minimal word-level tokenizer in the Hugging Face `tokenizer.json` format
///
/// Every encoding ends with `</s>` and language markers are special tokens.
pub const TEST_TOKENIZER: &str = r#"{
    "version": "1.0",
    "truncation": null,
    "padding": null,
    "added_tokens": [
        {"id": 0, "content": "<pad>", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
        {"id": 1, "content": "</s>", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
        {"id": 2, "content": "<unk>", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
        {"id": 3, "content": ">>hi<<", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
        {"id": 4, "content": ">>en<<", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
        {"id": 5, "content": ">>ta<<", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
    ],
    "normalizer": {"type": "Lowercase"},
    "pre_tokenizer": {"type": "Whitespace"},
    "post_processor": {
        "type": "TemplateProcessing",
        "single": [
            {"Sequence": {"id": "A", "type_id": 0}},
            {"SpecialToken": {"id": "</s>", "type_id": 0}}
        ],
        "pair": [
            {"Sequence": {"id": "A", "type_id": 0}},
            {"Sequence": {"id": "B", "type_id": 0}},
            {"SpecialToken": {"id": "</s>", "type_id": 0}}
        ],
        "special_tokens": {
            "</s>": {"id": "</s>", "ids": [1], "tokens": ["</s>"]}
        }
    },
    "decoder": null,
    "model": {
        "type": "WordLevel",
        "vocab": {
            "<pad>": 0, "</s>": 1, "<unk>": 2, ">>hi<<": 3, ">>en<<": 4, ">>ta<<": 5,
            "hello": 6, "world": 7, ".": 8, "नमस्ते": 9, "दुनिया": 10, "।": 11, ",": 12
        },
        "unk_token": "<unk>"
    }
}"#;

/// Route library logs to the test harness output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Neural translator around a mock model and the character codec
pub fn mock_translator(model: &MockModel) -> NeuralTranslator {
    NeuralTranslator::new(Arc::new(model.clone()), Arc::new(MockCodec))
}

/// Translation service with the standard tiers around a mock model
///
/// The model is cloned into the service, so the caller's handle still
/// observes the call counter.
pub fn mock_service(model: &MockModel) -> TranslationService {
    TranslationService::new(mock_translator(model), TranslationCache::default())
}

/// Build a text of `words` distinct words without sentence punctuation
pub fn words(count: usize) -> String {
    (1..=count)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}
