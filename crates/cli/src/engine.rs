// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Engine context owning the result cache and the most recent analysis.
//!
//! The engine is single-threaded: `analyze` takes `&mut self`, so the
//! cache's lookup, eviction and insertion always run as one sequence. A
//! host sharing an engine across threads wraps it in a `Mutex`.

use std::sync::Arc;

use crate::cache::{ResultCache, quick_hash};
use crate::cli::OutputFormat;
use crate::record::AnalysisRecord;
use crate::report;
use crate::scanner;

#[derive(Debug, Default)]
pub struct Engine {
    cache: ResultCache,
    last: Option<Arc<AnalysisRecord>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `text`, reusing a cached record when its hash is known.
    ///
    /// Two texts with the same hash share a record; the second caller gets
    /// the first text's analysis.
    pub fn analyze(&mut self, text: &str) -> Arc<AnalysisRecord> {
        let hash = quick_hash(text);
        let record = match self.cache.get(hash) {
            Some(cached) => {
                tracing::debug!(hash, "cache hit");
                cached
            }
            None => {
                tracing::debug!(hash, "cache miss");
                let record = Arc::new(scanner::scan(text));
                self.cache.put(hash, Arc::clone(&record));
                record
            }
        };
        self.last = Some(Arc::clone(&record));
        record
    }

    /// The record returned by the most recent [`Engine::analyze`].
    pub fn last_analysis(&self) -> Option<Arc<AnalysisRecord>> {
        self.last.clone()
    }

    /// Render a report for `text`, analyzing it first.
    pub fn report(&mut self, text: &str, format: OutputFormat) -> crate::Result<String> {
        let record = self.analyze(text);
        report::render(format, Some(&*record), text)
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
