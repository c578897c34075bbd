// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Invisible character detection.
//!
//! Text flows through [`scanner::scan`], which classifies every scalar
//! value against the [`registry`], derives layout statistics with the
//! [`analyzer`] and scores the result with [`automation`]. The [`Engine`]
//! caches records by content hash, and [`report`] renders them as text,
//! JSON or CSV.

pub mod analyzer;
pub mod automation;
pub mod cache;
pub mod clean;
pub mod cli;
pub mod config;
pub mod demo;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod record;
pub mod registry;
pub mod report;
pub mod scanner;

#[cfg(test)]
pub mod test_utils;

pub use engine::Engine;
pub use error::{Error, Result};
pub use record::AnalysisRecord;
pub use scanner::scan;
