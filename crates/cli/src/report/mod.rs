// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Report rendering.
//!
//! Turns an analysis record plus the text it came from into a plain-text,
//! JSON or CSV report.

mod csv;
mod json;
mod text;

use chrono::{DateTime, Local};

use crate::cli::OutputFormat;
use crate::record::AnalysisRecord;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Version string printed in every report.
pub const REPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generator identifier written to JSON metadata.
pub const GENERATOR: &str = "glyphless";

/// Character and word counts of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Length in scalar values.
    pub characters: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split(is_separator).filter(|w| !w.is_empty()).count(),
        }
    }
}

/// Whitespace for word counting: Unicode `White_Space` minus NEL (U+0085),
/// plus the BOM.
fn is_separator(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{0085}') || ch == '\u{FEFF}'
}

/// Everything a formatter needs to render one report.
pub struct ReportContext<'a> {
    record: Option<&'a AnalysisRecord>,
    chars: Vec<char>,
    stats: TextStats,
    generated: DateTime<Local>,
}

impl<'a> ReportContext<'a> {
    pub fn new(record: Option<&'a AnalysisRecord>, text: &str, generated: DateTime<Local>) -> Self {
        Self {
            record,
            chars: text.chars().collect(),
            stats: TextStats::of(text),
            generated,
        }
    }

    /// The record, if it found anything.
    pub fn findings(&self) -> Option<&'a AnalysisRecord> {
        self.record.filter(|r| r.total() > 0)
    }

    pub fn record(&self) -> Option<&'a AnalysisRecord> {
        self.record
    }

    pub fn stats(&self) -> TextStats {
        self.stats
    }

    pub fn generated(&self) -> DateTime<Local> {
        self.generated
    }

    /// Text around `offset`: up to `radius` scalar values before it and the
    /// rest of the `offset + radius` window after it, newlines flattened.
    ///
    /// Offsets past the end of the text (a record cached for a colliding
    /// text) yield empty windows rather than panicking.
    pub fn window(&self, offset: usize, radius: usize) -> (String, String) {
        let len = self.chars.len();
        let at = offset.min(len);
        let start = offset.saturating_sub(radius).min(at);
        let end = offset.saturating_add(radius).min(len);
        let after_start = offset.saturating_add(1).min(end);
        (flatten(&self.chars[start..at]), flatten(&self.chars[after_start..end]))
    }
}

fn flatten(chars: &[char]) -> String {
    chars.iter().map(|&c| if c == '\n' { ' ' } else { c }).collect()
}

/// Trait for rendering an analysis into one output format.
pub trait ReportFormatter {
    fn format(&self, ctx: &ReportContext<'_>) -> crate::Result<String>;
}

fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Txt => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Render a report stamped with the current local time.
pub fn render(
    format: OutputFormat,
    record: Option<&AnalysisRecord>,
    text: &str,
) -> crate::Result<String> {
    render_at(format, record, text, Local::now())
}

/// Render a report with an explicit generation time.
pub fn render_at(
    format: OutputFormat,
    record: Option<&AnalysisRecord>,
    text: &str,
    generated: DateTime<Local>,
) -> crate::Result<String> {
    let ctx = ReportContext::new(record, text, generated);
    formatter(format).format(&ctx)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
