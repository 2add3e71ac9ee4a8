/*!
 * Word-by-word gloss translation for short English to Hindi texts.
 *
 * Each word is replaced by its lexicon gloss in place. Word order is kept
 * as-is, so the output is a gloss rather than grammatical Hindi.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::unit::{DICTIONARY_PAIR, word_count};

/// Longest text (in words) the word-substitution tier handles
pub const MAX_SUBSTITUTION_WORDS: usize = 7;

/// Punctuation stripped from a token before lookup and re-appended after
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

static REPEATED_SPACES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" {2,}").unwrap()
});

static EN_HI_LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Pronouns
        ("i", "मैं"),
        ("me", "मुझे"),
        ("my", "मेरा"),
        ("mine", "मेरा"),
        ("you", "आप"),
        ("your", "आपका"),
        ("he", "वह"),
        ("she", "वह"),
        ("his", "उसका"),
        ("her", "उसकी"),
        ("it", "यह"),
        ("we", "हम"),
        ("they", "वे"),
        ("their", "उनका"),
        // Auxiliaries
        ("am", "हूँ"),
        ("is", "है"),
        ("are", "हैं"),
        ("was", "था"),
        ("were", "थे"),
        ("have", "है"),
        ("has", "है"),
        ("had", "था"),
        ("will", "करेंगे"),
        ("would", "करेंगे"),
        ("can", "सकते हैं"),
        ("could", "सकते थे"),
        ("should", "चाहिए"),
        // Articles, prepositions, conjunctions
        ("the", ""),
        ("a", "एक"),
        ("an", "एक"),
        ("in", "में"),
        ("on", "पर"),
        ("at", "पर"),
        ("for", "के लिए"),
        ("to", "को"),
        ("from", "से"),
        ("with", "के साथ"),
        ("without", "के बिना"),
        ("and", "और"),
        ("or", "या"),
        ("but", "लेकिन"),
        ("because", "क्योंकि"),
        ("if", "अगर"),
        // Greetings and courtesy
        ("hello", "नमस्ते"),
        ("hi", "नमस्ते"),
        ("good", "अच्छा"),
        ("morning", "सुबह"),
        ("evening", "शाम"),
        ("night", "रात"),
        ("bye", "अलविदा"),
        ("goodbye", "अलविदा"),
        ("yes", "हाँ"),
        ("no", "नहीं"),
        ("please", "कृपया"),
        ("thank", "धन्यवाद"),
        ("thanks", "धन्यवाद"),
        ("welcome", "स्वागत है"),
        ("sorry", "माफ़ करें"),
        ("excuse", "क्षमा करें"),
        // Question words
        ("how", "कैसे"),
        ("what", "क्या"),
        ("when", "कब"),
        ("where", "कहाँ"),
        ("who", "कौन"),
        ("why", "क्यों"),
        ("which", "कौन सा"),
        // Everyday nouns
        ("time", "समय"),
        ("day", "दिन"),
        ("today", "आज"),
        ("tomorrow", "कल"),
        ("yesterday", "कल"),
        ("name", "नाम"),
        ("food", "खाना"),
        ("water", "पानी"),
        ("money", "पैसा"),
        ("home", "घर"),
        ("house", "घर"),
        ("work", "काम"),
        ("school", "स्कूल"),
        ("book", "किताब"),
        ("phone", "फोन"),
        ("computer", "कंप्यूटर"),
        ("friend", "मित्र"),
        ("family", "परिवार"),
    ])
});

/// Word-substitution translator for the English to Hindi pair
#[derive(Debug, Default, Clone, Copy)]
pub struct WordSubstitutionTranslator;

impl WordSubstitutionTranslator {
    /// Create a new word-substitution translator
    pub fn new() -> Self {
        Self
    }

    /// Whether this translator handles the given text and pair at all
    pub fn is_applicable(&self, text: &str, source: &str, target: &str) -> bool {
        (source, target) == DICTIONARY_PAIR && word_count(text) <= MAX_SUBSTITUTION_WORDS
    }

    /// Gloss a short text word by word
    ///
    /// Returns `None` when the pair is not en -> hi or the text has more than
    /// `MAX_SUBSTITUTION_WORDS` words. Unknown words are kept verbatim.
    pub fn translate(&self, text: &str, source: &str, target: &str) -> Option<String> {
        if !self.is_applicable(text, source, target) {
            return None;
        }

        let glossed: Vec<String> = text.split_whitespace().map(gloss_token).collect();
        let joined = glossed.join(" ");

        Some(REPEATED_SPACES_REGEX.replace_all(&joined, " ").trim().to_string())
    }

    /// Number of words in the lexicon
    pub fn lexicon_len(&self) -> usize {
        EN_HI_LEXICON.len()
    }
}

/// Substitute one token, carrying its trailing punctuation over
fn gloss_token(token: &str) -> String {
    let word = token.trim_end_matches(TRAILING_PUNCTUATION);
    let punctuation = &token[word.len()..];

    match EN_HI_LEXICON.get(word.to_lowercase().as_str()) {
        Some(gloss) => format!("{}{}", gloss, punctuation),
        None => token.to_string(),
    }
}
