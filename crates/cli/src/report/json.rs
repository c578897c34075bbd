// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! JSON format report output.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::{GENERATOR, REPORT_VERSION, ReportContext, ReportFormatter};
use crate::record::AnalysisRecord;

/// JSON format report formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    metadata: Metadata,
    text_stats: JsonTextStats,
    analysis: Analysis<'a>,
}

#[derive(Serialize)]
struct Metadata {
    version: &'static str,
    timestamp: String,
    generator: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTextStats {
    total_characters: usize,
    total_words: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Analysis<'a> {
    Full(&'a AnalysisRecord),
    Absent { total: usize },
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, ctx: &ReportContext<'_>) -> crate::Result<String> {
        let stats = ctx.stats();
        let report = JsonReport {
            metadata: Metadata {
                version: REPORT_VERSION,
                timestamp: ctx
                    .generated()
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                generator: GENERATOR,
            },
            text_stats: JsonTextStats {
                total_characters: stats.characters,
                total_words: stats.words,
            },
            analysis: match ctx.record() {
                Some(record) => Analysis::Full(record),
                None => Analysis::Absent { total: 0 },
            },
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
