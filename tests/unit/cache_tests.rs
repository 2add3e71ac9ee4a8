/*!
 * Tests for translation cache functionality
 */

use std::num::NonZeroUsize;
use std::sync::Arc;

use bhashantar::translation::cache::{CacheKey, DEFAULT_CACHE_CAPACITY, TranslationCache};
use bhashantar::translation::unit::TranslationUnit;

fn unit(text: &str) -> TranslationUnit {
    TranslationUnit::new(text, "en", "hi")
}

#[test]
fn test_cache_new_withDisabled_shouldNeverStore() {
    let cache = TranslationCache::new(false, None);
    cache.put(&unit("hello"), "नमस्ते");

    assert!(cache.get(&unit("hello")).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_cache_put_withEnabledCache_shouldStoreTranslation() {
    let cache = TranslationCache::default();
    cache.put(&unit("hello"), "नमस्ते");

    assert_eq!(cache.get(&unit("hello")), Some("नमस्ते".to_string()));
}

#[test]
fn test_cache_get_withMissingKey_shouldReturnNone() {
    let cache = TranslationCache::default();
    assert!(cache.get(&unit("nonexistent")).is_none());
}

#[test]
fn test_cache_get_withDifferentLanguages_shouldReturnNone() {
    let cache = TranslationCache::default();
    cache.put(&TranslationUnit::new("hello", "en", "hi"), "नमस्ते");

    assert!(cache.get(&TranslationUnit::new("hello", "en", "ta")).is_none());
    assert!(cache.get(&TranslationUnit::new("hello", "bn", "hi")).is_none());
}

#[test]
fn test_cache_put_withSameKey_shouldOverwrite() {
    let cache = TranslationCache::default();
    cache.put(&unit("hello"), "first");
    cache.put(&unit("hello"), "second");

    assert_eq!(cache.get(&unit("hello")), Some("second".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_withTrailingPunctuation_shouldKeepSeparateEntries() {
    let cache = TranslationCache::default();
    cache.put(&unit("thank you"), "धन्यवाद");
    cache.put(&unit("thank you."), "धन्यवाद।");

    assert_eq!(cache.get(&unit("thank you")), Some("धन्यवाद".to_string()));
    assert_eq!(cache.get(&unit("thank you.")), Some("धन्यवाद।".to_string()));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cacheKey_withDifferentTexts_shouldDiffer() {
    let keys: Vec<CacheKey> = ["a", "a.", "a ", "A", "a_en", ""]
        .iter()
        .map(|text| CacheKey::from_unit(&unit(text)))
        .collect();

    for (i, first) in keys.iter().enumerate() {
        for second in &keys[i + 1..] {
            assert_ne!(first, second);
        }
    }
}

#[test]
fn test_cacheKey_withSameUnit_shouldBeDeterministic() {
    assert_eq!(CacheKey::from_unit(&unit("hello")), CacheKey::from_unit(&unit("hello")));
}

#[test]
fn test_cache_withCapacity_shouldEvictLeastRecentlyUsed() {
    let cache = TranslationCache::new(true, NonZeroUsize::new(2));
    cache.put(&unit("one"), "1");
    cache.put(&unit("two"), "2");

    // Touch "one" so "two" becomes the eviction candidate
    assert!(cache.get(&unit("one")).is_some());
    cache.put(&unit("three"), "3");

    assert_eq!(cache.len(), 2);
    assert!(cache.get(&unit("one")).is_some());
    assert!(cache.get(&unit("two")).is_none());
    assert!(cache.get(&unit("three")).is_some());
}

#[test]
fn test_cache_capacity_shouldReportBound() {
    assert_eq!(TranslationCache::default().capacity(), Some(DEFAULT_CACHE_CAPACITY));
    assert_eq!(TranslationCache::unbounded().capacity(), None);
}

#[test]
fn test_cache_stats_shouldCountHitsAndMisses() {
    let cache = TranslationCache::default();
    cache.put(&unit("hello"), "नमस्ते");

    let _ = cache.get(&unit("hello"));
    let _ = cache.get(&unit("hello"));
    let _ = cache.get(&unit("missing"));

    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 2);
    assert_eq!(misses, 1);
    assert!((hit_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_cache_clear_shouldRemoveEntriesAndStats() {
    let cache = TranslationCache::default();
    cache.put(&unit("hello"), "नमस्ते");
    let _ = cache.get(&unit("hello"));

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats(), (0, 0, 0.0));
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache = TranslationCache::default();
    let clone = cache.clone();
    clone.put(&unit("hello"), "नमस्ते");

    assert_eq!(cache.get(&unit("hello")), Some("नमस्ते".to_string()));
}

#[test]
fn test_cache_concurrentWriters_shouldNotLoseEntries() {
    let cache = Arc::new(TranslationCache::unbounded());

    let handles: Vec<_> = (0..8)
        .map(|thread| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for i in 0..50 {
                    let text = format!("text {} {}", thread, i);
                    cache.put(&unit(&text), &text.to_uppercase());
                    // Same key from every thread
                    cache.put(&unit("shared"), "SHARED");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 8 * 50 + 1);
    assert_eq!(cache.get(&unit("text 3 17")), Some("TEXT 3 17".to_string()));
    assert_eq!(cache.get(&unit("shared")), Some("SHARED".to_string()));
}
