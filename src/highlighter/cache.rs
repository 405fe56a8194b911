//! Caching of highlighted markup
//!
//! The editing surface re-highlights the whole document on every change,
//! and undo, redo or retyping often bring back text that was highlighted
//! moments ago. Entries are keyed by a content hash of the registry slot
//! and the text, and keep both, so a hash collision is a miss and never
//! returns foreign markup. Rule set names are not unique, slots are.

use lru::LruCache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::RwLock;

/// Content-based hash of a (registry slot, text) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(u64);

impl ContentHash {
    pub fn from_content(slot: usize, text: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        slot.hash(&mut hasher);
        text.hash(&mut hasher);
        Self(hasher.finish())
    }
}

#[derive(Debug, Clone)]
struct CachedMarkup {
    slot: usize,
    text: String,
    markup: String,
}

/// LRU cache of rendered markup
pub struct MarkupCache {
    cache: RwLock<LruCache<ContentHash, CachedMarkup>>,
}

impl MarkupCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Get cached markup for this exact input
    pub fn get(&self, slot: usize, text: &str) -> Option<String> {
        let hash = ContentHash::from_content(slot, text);
        // LRU lookups reorder entries, so even reads take the write lock
        let mut cache = self.cache.write().ok()?;
        cache
            .get(&hash)
            .filter(|entry| entry.slot == slot && entry.text == text)
            .map(|entry| entry.markup.clone())
    }

    /// Insert markup for an input
    pub fn insert(&self, slot: usize, text: &str, markup: &str) {
        let hash = ContentHash::from_content(slot, text);
        if let Ok(mut cache) = self.cache.write() {
            cache.put(
                hash,
                CachedMarkup {
                    slot,
                    text: text.to_string(),
                    markup: markup.to_string(),
                },
            );
        }
    }

    /// Clear the cache
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        if let Ok(cache) = self.cache.read() {
            CacheStats {
                size: cache.len(),
                capacity: cache.cap().get(),
            }
        } else {
            CacheStats {
                size: 0,
                capacity: 0,
            }
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,

    /// Maximum capacity
    pub capacity: usize,
}

impl CacheStats {
    pub fn utilization(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.size as f32 / self.capacity as f32
        }
    }
}
