// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Removal of tracked invisible characters.

use std::collections::BTreeSet;

use crate::registry::{self, ZERO_WIDTH_JOINER};

/// Characters kept by default: the joiner is needed by composed emoji.
pub const DEFAULT_KEEP: &[char] = &[ZERO_WIDTH_JOINER];

/// Result of cleaning a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub cleaned: String,
    /// Number of scalar values removed.
    pub removed_count: usize,
    /// Names of the removed descriptors, in registry order.
    pub removed_kinds: Vec<&'static str>,
}

impl CleanOutcome {
    pub fn changed(&self) -> bool {
        self.removed_count > 0
    }
}

/// Strip every tracked character from `text` except those in `keep`.
pub fn clean(text: &str, keep: &[char]) -> CleanOutcome {
    let mut cleaned = String::with_capacity(text.len());
    let mut removed_count = 0;
    let mut removed: BTreeSet<usize> = BTreeSet::new();

    for ch in text.chars() {
        if !keep.contains(&ch)
            && let Some(pattern) = registry::classify(ch)
        {
            removed_count += 1;
            if let Some(rank) = registry::patterns().iter().position(|p| std::ptr::eq(p, pattern)) {
                removed.insert(rank);
            }
            continue;
        }
        cleaned.push(ch);
    }

    let table = registry::patterns();
    CleanOutcome {
        cleaned,
        removed_count,
        removed_kinds: removed.into_iter().map(|rank| table[rank].name).collect(),
    }
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
