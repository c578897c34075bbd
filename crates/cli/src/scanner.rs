// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Single-pass scanner.
//!
//! Walks the text once by scalar value, classifies each against the
//! registry and assembles the full [`AnalysisRecord`].

use std::collections::HashMap;

use crate::analyzer;
use crate::automation;
use crate::record::{AnalysisRecord, ByCategory, Occurrence, PatternSummary};
use crate::registry;

/// Scan `text` and build its analysis record.
///
/// Offsets count scalar values, so multi-byte characters and emoji
/// sequences never shift positions. The assessment is attached only when
/// something was found.
pub fn scan(text: &str) -> AnalysisRecord {
    let mut occurrences = Vec::new();
    let mut found: Vec<PatternSummary> = Vec::new();
    let mut summary_index: HashMap<char, usize> = HashMap::new();
    let mut by_category = ByCategory::default();
    let mut length = 0usize;

    for (offset, ch) in text.chars().enumerate() {
        length = offset + 1;
        let Some(pattern) = registry::classify(ch) else {
            continue;
        };

        let occurrence = Occurrence { offset, pattern };
        occurrences.push(occurrence);
        by_category.push(occurrence);

        let slot = *summary_index.entry(ch).or_insert_with(|| {
            found.push(PatternSummary::new(pattern));
            found.len() - 1
        });
        let summary = &mut found[slot];
        summary.count += 1;
        summary.positions.push(offset);
    }

    let stats = analyzer::analyze(&occurrences, length);
    let record = AnalysisRecord::new(occurrences, found, by_category, stats, length);

    tracing::debug!(total = record.total(), length, "scan complete");

    if record.total() > 0 {
        let assessment = automation::assess(&record);
        record.with_automation(assessment)
    } else {
        record
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
