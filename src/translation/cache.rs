/*!
 * Translation caching functionality.
 *
 * This module provides a content-addressed cache that backs every
 * translation tier, so repeated texts and repeated chunks never reach
 * the model twice.
 */

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use parking_lot::Mutex;
use log::debug;
use lru::LruCache;
use sha2::{Digest, Sha256};

use super::unit::TranslationUnit;

/// Default number of cached translations
pub const DEFAULT_CACHE_CAPACITY: usize = 5000;

/// Cache key derived from a translation unit
///
/// The text is hashed so the key stays the same length however long the
/// input is, and so separators inside the text cannot collide with the
/// language suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a translation unit
    pub fn from_unit(unit: &TranslationUnit) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(unit.text.as_bytes());
        let text_hash = format!("{:x}", hasher.finalize());

        Self(format!("{}_{}_{}", text_hash, unit.source, unit.target))
    }

    /// The key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Translation cache for storing and retrieving translations
pub struct TranslationCache {
    /// Internal cache storage
    cache: Arc<Mutex<LruCache<CacheKey, String>>>,

    /// Cache hit counter
    hits: Arc<AtomicUsize>,

    /// Cache miss counter
    misses: Arc<AtomicUsize>,

    /// Whether caching is enabled
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache
    ///
    /// A capacity of `None` keeps every entry for the lifetime of the cache;
    /// otherwise the least recently used entry is evicted once full.
    pub fn new(enabled: bool, capacity: Option<NonZeroUsize>) -> Self {
        let cache = match capacity {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self {
            cache: Arc::new(Mutex::new(cache)),
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
            enabled,
        }
    }

    /// Create an enabled cache without a size bound
    pub fn unbounded() -> Self {
        Self::new(true, None)
    }

    /// Get a translation from the cache
    pub fn get(&self, unit: &TranslationUnit) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::from_unit(unit);
        let mut cache = self.cache.lock();

        match cache.get(&key) {
            Some(translation) => {
                self.hits.fetch_add(1, Ordering::Relaxed);

                debug!("Cache hit for '{}' ({} -> {})",
                       truncate_text(&unit.text, 30),
                       unit.source,
                       unit.target);

                Some(translation.clone())
            },
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);

                debug!("Cache miss for '{}' ({} -> {})",
                       truncate_text(&unit.text, 30),
                       unit.source,
                       unit.target);

                None
            }
        }
    }

    /// Store a translation in the cache, replacing any previous entry
    pub fn put(&self, unit: &TranslationUnit, translation: &str) {
        if !self.enabled {
            return;
        }

        let key = CacheKey::from_unit(unit);
        let mut cache = self.cache.lock();

        cache.put(key, translation.to_string());

        debug!("Cached translation for '{}' ({} -> {}) [{} items in cache]",
               truncate_text(&unit.text, 30),
               unit.source,
               unit.target,
               cache.len());
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Maximum number of entries, or `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        let capacity = self.cache.lock().cap().get();
        // LruCache::unbounded reports usize::MAX
        (capacity != usize::MAX).then_some(capacity)
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(true, NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    }
}
