/*!
 * Tokenizer codec for the translation model.
 *
 * The model directory ships a Hugging Face `tokenizer.json`. Language
 * markers (`>>hi<<`, `>>ta<<`, ...) are special added tokens, so they are
 * dropped on decode along with padding and end-of-sequence tokens.
 */

use std::path::Path;
use std::str::FromStr;

use tokenizers::Tokenizer;

use crate::errors::ProviderError;
use crate::providers::TextCodec;

/// File name of the tokenizer inside a model directory
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Codec backed by a Hugging Face tokenizer
pub struct TokenizerCodec {
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for TokenizerCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenizerCodec")
            .field("vocab_size", &self.vocab_size())
            .finish()
    }
}

impl TokenizerCodec {
    /// Load `tokenizer.json` from a model directory
    pub fn from_model_dir(model_dir: &Path) -> Result<Self, ProviderError> {
        Self::from_file(&model_dir.join(TOKENIZER_FILE))
    }

    /// Load a tokenizer from a `tokenizer.json` file
    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let tokenizer = Tokenizer::from_file(path).map_err(|e| {
            ProviderError::CodecError(format!("Failed to load tokenizer {}: {}", path.display(), e))
        })?;

        Ok(Self { tokenizer })
    }

    /// Parse a tokenizer from its JSON definition
    pub fn from_json(content: &str) -> Result<Self, ProviderError> {
        let tokenizer = Tokenizer::from_str(content)
            .map_err(|e| ProviderError::CodecError(format!("Invalid tokenizer: {}", e)))?;

        Ok(Self { tokenizer })
    }

    /// Vocabulary size including added tokens
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }
}

impl TextCodec for TokenizerCodec {
    fn encode(&self, text: &str, max_length: usize) -> Result<Vec<u32>, ProviderError> {
        if max_length == 0 {
            return Err(ProviderError::CodecError("max_length must be at least 1".to_string()));
        }

        let encoding = self.tokenizer
            .encode(text, true)
            .map_err(|e| ProviderError::CodecError(format!("Tokenization failed: {}", e)))?;

        let mut ids = encoding.get_ids().to_vec();
        if ids.len() > max_length {
            // Keep the closing token added by the post-processor
            let has_special_tail = encoding
                .get_special_tokens_mask()
                .last()
                .is_some_and(|mask| *mask == 1);

            if has_special_tail {
                let tail = ids[ids.len() - 1];
                ids.truncate(max_length - 1);
                ids.push(tail);
            } else {
                ids.truncate(max_length);
            }
        }

        Ok(ids)
    }

    fn decode(&self, ids: &[u32]) -> Result<String, ProviderError> {
        self.tokenizer
            .decode(ids, true)
            .map_err(|e| ProviderError::CodecError(format!("Decoding failed: {}", e)))
    }

    fn language_token_id(&self, language: &str) -> Option<u32> {
        self.tokenizer.token_to_id(&format!(">>{}<<", language))
    }
}
