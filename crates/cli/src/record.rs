// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Analysis record produced by a scan.
//!
//! A record is built in one go by [`crate::scanner::scan`] and never
//! modified afterwards. Fields are private; read them through accessors.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::automation::AutomationAssessment;
use crate::registry::{Category, PatternDescriptor, Priority};

/// One tracked character found in the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence {
    /// Zero-based offset in scalar values.
    pub offset: usize,
    pub pattern: &'static PatternDescriptor,
}

impl Serialize for Occurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Occurrence", 7)?;
        s.serialize_field("index", &self.offset)?;
        s.serialize_field("name", self.pattern.name)?;
        s.serialize_field("code", &self.pattern.codepoint)?;
        s.serialize_field("category", &self.pattern.category)?;
        s.serialize_field("priority", &self.pattern.priority)?;
        s.serialize_field("note", self.pattern.note)?;
        s.serialize_field("codePoint", &self.pattern.code_point_hex())?;
        s.end()
    }
}

/// Per-descriptor tally: how often it appeared and where.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSummary {
    pub name: &'static str,
    pub priority: Priority,
    pub category: Category,
    pub note: &'static str,
    pub count: usize,
    pub positions: Vec<usize>,
}

impl PatternSummary {
    pub(crate) fn new(pattern: &'static PatternDescriptor) -> Self {
        Self {
            name: pattern.name,
            priority: pattern.priority,
            category: pattern.category,
            note: pattern.note,
            count: 0,
            positions: Vec::new(),
        }
    }
}

/// Occurrences of one category, in text order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub occurrences: Vec<Occurrence>,
}

/// Category groups keyed by [`Category`], ordered by first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByCategory {
    groups: Vec<CategoryGroup>,
}

impl ByCategory {
    pub(crate) fn push(&mut self, occurrence: Occurrence) {
        let category = occurrence.pattern.category;
        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.occurrences.push(occurrence),
            None => self.groups.push(CategoryGroup { category, occurrences: vec![occurrence] }),
        }
    }

    pub fn get(&self, category: Category) -> Option<&[Occurrence]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.occurrences.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    /// Number of distinct categories present.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for ByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.category.as_str(), &group.occurrences)?;
        }
        map.end()
    }
}

/// Shape of the occurrence layout across the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    None,
    Uniform,
    Dispersed,
    Concentrated,
}

impl Distribution {
    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::None => "none",
            Distribution::Uniform => "uniform",
            Distribution::Dispersed => "dispersed",
            Distribution::Concentrated => "concentrated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStat {
    pub cluster_count: usize,
    #[serde(rename = "avgClusterSize")]
    pub average_cluster_size: f64,
    pub largest_cluster: usize,
}

/// Dominant repeating gap between consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Periodicity {
    pub interval: usize,
    pub frequency: usize,
}

/// Statistics derived from the occurrence layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternStats {
    pub density: f64,
    pub clustering: ClusterStat,
    pub periodicity: Option<Periodicity>,
    pub distribution: Distribution,
}

impl PatternStats {
    pub fn empty() -> Self {
        Self {
            density: 0.0,
            clustering: ClusterStat::default(),
            periodicity: None,
            distribution: Distribution::None,
        }
    }
}

/// Result of scanning one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    total: usize,
    occurrences: Vec<Occurrence>,
    found: Vec<PatternSummary>,
    by_category: ByCategory,
    patterns: PatternStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    automation: Option<AutomationAssessment>,
    text_length: usize,
    #[serde(serialize_with = "rfc3339_millis")]
    timestamp: DateTime<Utc>,
}

/// RFC 3339 in UTC with millisecond precision, as in report metadata.
fn rfc3339_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl AnalysisRecord {
    pub(crate) fn new(
        occurrences: Vec<Occurrence>,
        found: Vec<PatternSummary>,
        by_category: ByCategory,
        patterns: PatternStats,
        text_length: usize,
    ) -> Self {
        Self {
            total: occurrences.len(),
            occurrences,
            found,
            by_category,
            patterns,
            automation: None,
            text_length,
            timestamp: Utc::now(),
        }
    }

    pub(crate) fn with_automation(mut self, automation: AutomationAssessment) -> Self {
        self.automation = Some(automation);
        self
    }

    /// Number of tracked characters found.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every occurrence, ascending by offset.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Per-descriptor tallies, ordered by first appearance.
    pub fn found(&self) -> &[PatternSummary] {
        &self.found
    }

    /// Summary for the descriptor with the given name.
    pub fn summary(&self, name: &str) -> Option<&PatternSummary> {
        self.found.iter().find(|s| s.name == name)
    }

    pub fn by_category(&self) -> &ByCategory {
        &self.by_category
    }

    pub fn patterns(&self) -> &PatternStats {
        &self.patterns
    }

    pub fn density(&self) -> f64 {
        self.patterns.density
    }

    pub fn automation(&self) -> Option<&AutomationAssessment> {
        self.automation.as_ref()
    }

    /// Length of the scanned text in scalar values.
    pub fn text_length(&self) -> usize {
        self.text_length
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Compare two records ignoring their creation time.
    pub fn same_content(&self, other: &Self) -> bool {
        Self { timestamp: other.timestamp, ..self.clone() } == *other
    }
}
