/*!
 * Translation tiers tried in priority order for each chunk.
 *
 * Each tier decides for itself whether it applies to a unit, so the
 * orchestrator only iterates and new language pairs never touch it.
 */

use async_trait::async_trait;

use crate::errors::TranslationError;
use super::lexicon::WordSubstitutionTranslator;
use super::neural::NeuralTranslator;
use super::phrases::PhraseDictionary;
use super::unit::TranslationUnit;

/// Longest chunk, in words, that the phrase tier is offered
pub const MAX_PHRASE_TIER_WORDS: usize = 7;

/// A named translation strategy
#[async_trait]
pub trait TranslationStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether this tier should be tried for the unit
    fn applicable(&self, unit: &TranslationUnit) -> bool;

    /// Try to translate the unit
    ///
    /// `Ok(None)` passes the unit on to the next tier.
    async fn attempt(&self, unit: &TranslationUnit) -> Result<Option<String>, TranslationError>;
}

/// Exact-match phrase dictionary tier
#[derive(Debug, Default)]
pub struct PhraseTier {
    dictionary: PhraseDictionary,
}

impl PhraseTier {
    pub fn new(dictionary: PhraseDictionary) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl TranslationStrategy for PhraseTier {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn applicable(&self, unit: &TranslationUnit) -> bool {
        unit.is_dictionary_pair() && unit.word_count() <= MAX_PHRASE_TIER_WORDS
    }

    async fn attempt(&self, unit: &TranslationUnit) -> Result<Option<String>, TranslationError> {
        Ok(self
            .dictionary
            .lookup(&unit.text, unit.source, unit.target)
            .map(str::to_string))
    }
}

/// Word-by-word substitution tier
#[derive(Debug, Default)]
pub struct WordSubstitutionTier {
    translator: WordSubstitutionTranslator,
}

impl WordSubstitutionTier {
    pub fn new(translator: WordSubstitutionTranslator) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl TranslationStrategy for WordSubstitutionTier {
    fn name(&self) -> &'static str {
        "word-substitution"
    }

    fn applicable(&self, unit: &TranslationUnit) -> bool {
        self.translator.is_applicable(&unit.text, unit.source, unit.target)
    }

    async fn attempt(&self, unit: &TranslationUnit) -> Result<Option<String>, TranslationError> {
        Ok(self.translator.translate(&unit.text, unit.source, unit.target))
    }
}

/// Neural model tier; applies to everything and always answers or fails
#[derive(Clone)]
pub struct NeuralTier {
    translator: NeuralTranslator,
}

impl NeuralTier {
    pub fn new(translator: NeuralTranslator) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl TranslationStrategy for NeuralTier {
    fn name(&self) -> &'static str {
        "neural"
    }

    fn applicable(&self, _unit: &TranslationUnit) -> bool {
        true
    }

    async fn attempt(&self, unit: &TranslationUnit) -> Result<Option<String>, TranslationError> {
        self.translator
            .translate(&unit.text, unit.source, unit.target)
            .await
            .map(Some)
    }
}

/// The standard tier order: phrase dictionary, word substitution, neural model
pub fn default_tiers(neural: NeuralTranslator) -> Vec<Box<dyn TranslationStrategy>> {
    vec![
        Box::new(PhraseTier::default()),
        Box::new(WordSubstitutionTier::default()),
        Box::new(NeuralTier::new(neural)),
    ]
}
