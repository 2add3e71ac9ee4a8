/*!
 * Exact-match phrase dictionary for very common English to Hindi utterances.
 */

use std::collections::HashMap;
use std::sync::LazyLock;

use super::unit::{DICTIONARY_PAIR, word_count};

/// Longest phrase (in words) the dictionary is consulted for
pub const MAX_PHRASE_WORDS: usize = 3;

/// Greetings and courtesy phrases, keyed by lower-cased English text
static EN_HI_PHRASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("hello", "नमस्ते"),
        ("hi", "नमस्ते"),
        ("hello.", "नमस्ते।"),
        ("hi.", "नमस्ते।"),
        ("how are you", "आप कैसे हैं"),
        ("how are you?", "आप कैसे हैं?"),
        ("good morning", "सुप्रभात"),
        ("good morning.", "सुप्रभात।"),
        ("good afternoon", "शुभ दोपहर"),
        ("good afternoon.", "शुभ दोपहर।"),
        ("good evening", "शुभ संध्या"),
        ("good evening.", "शुभ संध्या।"),
        ("good night", "शुभ रात्रि"),
        ("good night.", "शुभ रात्रि।"),
        ("thank you", "धन्यवाद"),
        ("thank you.", "धन्यवाद।"),
        ("thanks", "धन्यवाद"),
        ("thanks.", "धन्यवाद।"),
        ("yes", "हाँ"),
        ("yes.", "हां।"),
        ("no", "नहीं"),
        ("no.", "नहीं।"),
        ("goodbye", "अलविदा"),
        ("goodbye.", "अलविदा।"),
        ("bye", "अलविदा"),
        ("bye.", "अलविदा।"),
        ("hello world", "हैलो दुनिया"),
        ("hello world.", "हैलो दुनिया।"),
    ])
});

/// Phrase dictionary for the English to Hindi pair
#[derive(Debug, Default, Clone, Copy)]
pub struct PhraseDictionary;

impl PhraseDictionary {
    /// Create a new phrase dictionary
    pub fn new() -> Self {
        Self
    }

    /// Look up an exact phrase, including its terminal punctuation
    ///
    /// Returns `None` for any pair other than en -> hi, for texts longer than
    /// `MAX_PHRASE_WORDS` words, and for texts not in the table.
    pub fn lookup(&self, text: &str, source: &str, target: &str) -> Option<&'static str> {
        if (source, target) != DICTIONARY_PAIR {
            return None;
        }

        if word_count(text) > MAX_PHRASE_WORDS {
            return None;
        }

        let key = text.trim().to_lowercase();
        EN_HI_PHRASES.get(key.as_str()).copied()
    }

    /// Number of phrases in the table
    pub fn len(&self) -> usize {
        EN_HI_PHRASES.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        EN_HI_PHRASES.is_empty()
    }
}
