// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Bounded cache of analysis records keyed by a content hash.
//!
//! The key is a 32-bit rolling hash, so distinct texts can collide and a
//! lookup may return the record of a different text. Callers accept that.
//!
//! Eviction is first-in first-out: once more than [`CACHE_CAPACITY`] keys
//! are held, the oldest inserted key is dropped, however recently it was
//! read.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::record::AnalysisRecord;

/// Maximum number of live entries.
pub const CACHE_CAPACITY: usize = 10;

/// Rolling `h * 31 + c` hash over scalar values, wrapping at 32 bits.
pub fn quick_hash(text: &str) -> u32 {
    text.chars()
        .fold(0u32, |hash, ch| hash.wrapping_mul(31).wrapping_add(u32::from(ch)))
}

/// FIFO-bounded map from text hash to analysis record.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<u32, Arc<AnalysisRecord>>,
    order: VecDeque<u32>,
    capacity: usize,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` entries (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Look up a record. Reading never changes eviction order.
    pub fn get(&self, hash: u32) -> Option<Arc<AnalysisRecord>> {
        self.entries.get(&hash).cloned()
    }

    /// Insert a record, evicting the oldest key when over capacity.
    ///
    /// Re-inserting an existing key replaces its value and keeps its
    /// original position in the eviction order. Returns the evicted key.
    pub fn put(&mut self, hash: u32, record: Arc<AnalysisRecord>) -> Option<u32> {
        if self.entries.insert(hash, record).is_none() {
            self.order.push_back(hash);
        }
        if self.entries.len() <= self.capacity {
            return None;
        }
        let oldest = self.order.pop_front()?;
        self.entries.remove(&oldest);
        tracing::debug!(hash = oldest, "evicted oldest cache entry");
        Some(oldest)
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.entries.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
