/*!
 * The unit of cacheable translation work.
 */

/// Language pair served by the dictionary tiers
pub const DICTIONARY_PAIR: (&str, &str) = ("en", "hi");

/// A piece of text together with its normalized language pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationUnit {
    /// Text to translate
    pub text: String,

    /// Normalized source language code
    pub source: &'static str,

    /// Normalized target language code
    pub target: &'static str,
}

impl TranslationUnit {
    /// Create a new translation unit
    pub fn new(text: impl Into<String>, source: &'static str, target: &'static str) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }

    /// Number of whitespace-delimited words in the text
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// Whether this unit is in the pair covered by the dictionary tiers
    pub fn is_dictionary_pair(&self) -> bool {
        (self.source, self.target) == DICTIONARY_PAIR
    }
}

/// Count whitespace-delimited words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
