/*!
 * Text segmentation into model-sized chunks.
 *
 * Long inputs are cut at sentence boundaries first and at clause (", ")
 * boundaries second, so every chunk stays within `MAX_CHUNK_WORDS` words
 * whenever the punctuation allows it.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::unit::word_count;

/// Maximum number of words per chunk handed to a translation tier
pub const MAX_CHUNK_WORDS: usize = 15;

/// Sentence-terminal punctuation followed by whitespace
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]\s+").unwrap()
});

/// Clause separator used for the second segmentation pass
const CLAUSE_SEPARATOR: &str = ", ";

/// Split text into ordered chunks of at most `MAX_CHUNK_WORDS` words
///
/// Texts already within the limit come back unchanged as a single chunk,
/// including the empty string, so callers always get at least one chunk.
pub fn segment(text: &str) -> Vec<String> {
    if word_count(text) <= MAX_CHUNK_WORDS {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.trim().is_empty() {
            continue;
        }

        if word_count(sentence) <= MAX_CHUNK_WORDS {
            chunks.push(sentence.to_string());
        } else {
            chunks.extend(split_clauses(sentence));
        }
    }

    if chunks.is_empty() {
        chunks.push(String::new());
    }

    chunks
}

/// Split on sentence-terminal punctuation, keeping the punctuation attached
/// to the sentence it ends
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
        // Punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }

    sentences.push(&text[start..]);
    sentences
}

/// Greedily pack comma-separated fragments into chunks within the word limit
fn split_clauses(sentence: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for fragment in sentence.split(CLAUSE_SEPARATOR) {
        if word_count(&current) + word_count(fragment) <= MAX_CHUNK_WORDS {
            if current.is_empty() {
                current.push_str(fragment);
            } else {
                current.push_str(CLAUSE_SEPARATOR);
                current.push_str(fragment);
            }
        } else {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(fragment);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
