/*!
 * Tests for text segmentation
 */

use bhashantar::translation::segmenter::{MAX_CHUNK_WORDS, segment};
use bhashantar::translation::unit::word_count;

use crate::common::words;

#[test]
fn test_segment_withEmptyText_shouldReturnSingleEmptyChunk() {
    assert_eq!(segment(""), vec![String::new()]);
}

#[test]
fn test_segment_withWhitespaceOnly_shouldReturnTextUnchanged() {
    assert_eq!(segment("   "), vec!["   ".to_string()]);
}

#[test]
fn test_segment_withShortText_shouldReturnTextUnchanged() {
    let text = "Hello there.  How are you?";
    assert_eq!(segment(text), vec![text.to_string()]);
}

#[test]
fn test_segment_withFifteenWords_shouldReturnOneChunk() {
    let text = words(15);
    assert_eq!(segment(&text), vec![text]);
}

#[test]
fn test_segment_withSixteenWords_shouldReturnMultipleChunks() {
    let text = format!("{}, {}", words(8), words(8));
    let chunks = segment(&text);

    assert!(chunks.len() >= 2);
    assert!(chunks.iter().all(|chunk| word_count(chunk) <= MAX_CHUNK_WORDS));
}

#[test]
fn test_segment_withSeveralSentences_shouldSplitInOrder() {
    let text = "The first sentence has six words. The second one is also short! Is the third one a question?";
    let chunks = segment(text);

    assert_eq!(chunks, vec![
        "The first sentence has six words.".to_string(),
        "The second one is also short!".to_string(),
        "Is the third one a question?".to_string(),
    ]);
}

#[test]
fn test_segment_withLongSentence_shouldPackClauses() {
    let text = "one two three four five six, seven eight nine ten eleven, twelve thirteen fourteen fifteen sixteen seventeen";
    let chunks = segment(text);

    assert_eq!(chunks, vec![
        "one two three four five six, seven eight nine ten eleven".to_string(),
        "twelve thirteen fourteen fifteen sixteen seventeen".to_string(),
    ]);
}

#[test]
fn test_segment_withoutPunctuation_shouldKeepOversizedChunk() {
    let text = words(20);
    assert_eq!(segment(&text), vec![text]);
}

#[test]
fn test_segment_rejoinedChunks_shouldPreserveWords() {
    let text = "Alpha beta gamma delta. Epsilon zeta eta theta iota, kappa lambda mu. Nu xi omicron pi rho sigma.";
    let chunks = segment(text);
    let rejoined = chunks.join(" ");

    let original: Vec<&str> = text.split_whitespace().collect();
    let reassembled: Vec<&str> = rejoined.split_whitespace().collect();
    assert_eq!(original, reassembled);
}

#[test]
fn test_segment_withDecimalNumber_shouldNotSplitInsideNumber() {
    let text = format!("Pi is roughly 3.14 and that is fine. {}", words(12));
    let chunks = segment(&text);

    assert_eq!(chunks[0], "Pi is roughly 3.14 and that is fine.");
}
