//! Bounded decoded-image cache
//!
//! Long sessions page through many series; retaining every decoded
//! frame indexed by identifier grows without bound. This cache holds a
//! fixed number of images and evicts the least recently used entry on
//! overflow. Lookups refresh recency.

use radview_core::ImageSource;
use std::collections::HashMap;

/// A fixed-capacity, least-recently-used image cache keyed by
/// identifier.
#[derive(Debug)]
pub struct ImageCache {
    capacity: usize,
    entries: HashMap<String, ImageSource>,
    // Recency order, most recent last. Small capacities make the O(n)
    // reshuffle irrelevant.
    order: Vec<String>,
}

impl ImageCache {
    /// Create a cache holding at most `capacity` images.
    ///
    /// A zero capacity is bumped to 1 so insertion always succeeds.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert an image, evicting the least recently used entry if the
    /// cache is full. Returns the evicted identifier, if any.
    pub fn insert(&mut self, id: &str, image: ImageSource) -> Option<String> {
        let mut evicted = None;
        if !self.entries.contains_key(id) && self.entries.len() >= self.capacity {
            let victim = self.order.remove(0);
            self.entries.remove(&victim);
            evicted = Some(victim);
        }
        self.touch(id);
        self.entries.insert(id.to_string(), image);
        evicted
    }

    /// Look up an image, refreshing its recency.
    pub fn get(&mut self, id: &str) -> Option<&ImageSource> {
        if !self.entries.contains_key(id) {
            return None;
        }
        self.touch(id);
        self.entries.get(id)
    }

    /// Remove an image explicitly.
    pub fn evict(&mut self, id: &str) -> Option<ImageSource> {
        self.order.retain(|k| k != id);
        self.entries.remove(id)
    }

    /// Number of cached images.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached images.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn touch(&mut self, id: &str) {
        self.order.retain(|k| k != id);
        self.order.push(id.to_string());
    }
}
