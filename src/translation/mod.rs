/*!
 * Tiered text translation between English and Indic languages.
 *
 * Every request goes through the same pipeline: normalize the language
 * codes, check the cache, split long text into chunks, resolve each chunk
 * through the first tier that produces a translation, and join the results.
 *
 * - `core`: The `TranslationService` orchestrator and response type
 * - `cache`: Bounded LRU cache shared by all tiers
 * - `segmenter`: Sentence and clause chunking for long inputs
 * - `strategy`: The tier trait and the standard tier order
 * - `phrases`: Exact-match phrase dictionary (en -> hi)
 * - `lexicon`: Word-by-word substitution (en -> hi)
 * - `neural`: Sequence-to-sequence model tier
 * - `unit`: The cacheable unit of work
 */

// Re-export main types for easier usage
pub use self::cache::TranslationCache;
pub use self::core::{TranslationResponse, TranslationService};
pub use self::neural::{NeuralTranslator, TranslationParameters};
pub use self::strategy::TranslationStrategy;
pub use self::unit::TranslationUnit;

// Submodules
pub mod cache;
pub mod core;
pub mod lexicon;
pub mod neural;
pub mod phrases;
pub mod segmenter;
pub mod strategy;
pub mod unit;
