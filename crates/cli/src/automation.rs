// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Heuristic estimate of whether invisible characters were inserted by
//! automated text generation.
//!
//! Every rule that applies adds its signal and score. The label is picked
//! from the cumulative score. The result is speculative by construction.

use serde::Serialize;

use crate::record::{AnalysisRecord, Distribution};
use crate::registry::{Category, NARROW_NO_BREAK_SPACE};

/// Fixed caveat attached to every assessment.
pub const DISCLAIMER: &str =
    "Este análisis es especulativo. Muchos factores pueden causar caracteres invisibles.";

const HIGH_DENSITY: f64 = 0.002;
const MODERATE_DENSITY: f64 = 0.001;
const PERIODIC_MIN_FREQUENCY: usize = 3;
const UNUSUAL_CLUSTER_SIZE: usize = 10;
const MANY_CATEGORIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Likelihood {
    #[serde(rename = "incierta")]
    Uncertain,
    #[serde(rename = "posible")]
    Possible,
    #[serde(rename = "moderada")]
    Moderate,
    #[serde(rename = "alta")]
    High,
}

impl Likelihood {
    pub fn as_str(self) -> &'static str {
        match self {
            Likelihood::Uncertain => "incierta",
            Likelihood::Possible => "posible",
            Likelihood::Moderate => "moderada",
            Likelihood::High => "alta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    #[serde(rename = "insuficiente")]
    Insufficient,
    #[serde(rename = "muy baja")]
    VeryLow,
    #[serde(rename = "baja")]
    Low,
    #[serde(rename = "moderada")]
    Moderate,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Insufficient => "insuficiente",
            Confidence::VeryLow => "muy baja",
            Confidence::Low => "baja",
            Confidence::Moderate => "moderada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomationAssessment {
    pub likelihood: Likelihood,
    pub confidence: Confidence,
    pub score: u32,
    pub signals: Vec<String>,
    pub disclaimer: &'static str,
}

/// Score a record. Callers invoke this only when something was found.
pub fn assess(record: &AnalysisRecord) -> AutomationAssessment {
    let mut signals = Vec::new();
    let mut score = 0;
    let stats = record.patterns();

    if stats.density > HIGH_DENSITY {
        signals.push("Densidad alta de caracteres invisibles".to_string());
        score += 2;
    } else if stats.density > MODERATE_DENSITY {
        signals.push("Densidad moderada de caracteres invisibles".to_string());
        score += 1;
    }

    if stats.periodicity.is_some_and(|p| p.frequency > PERIODIC_MIN_FREQUENCY) {
        signals.push("Patrón periódico detectado".to_string());
        score += 2;
    }

    if stats.distribution == Distribution::Concentrated
        && stats.clustering.largest_cluster > UNUSUAL_CLUSTER_SIZE
    {
        signals.push("Concentración inusual de caracteres".to_string());
        score += 1;
    }

    let has_nnbsp = record
        .by_category()
        .get(Category::Space)
        .is_some_and(|occs| occs.iter().any(|o| o.pattern.codepoint == NARROW_NO_BREAK_SPACE));
    if has_nnbsp {
        signals.push("Contiene U+202F (reportado en modelos o3/o4-mini)".to_string());
        score += 2;
    }

    if record.by_category().len() >= MANY_CATEGORIES {
        signals.push("Múltiples tipos de caracteres invisibles".to_string());
        score += 1;
    }

    let (likelihood, confidence) = label(score);
    AutomationAssessment { likelihood, confidence, score, signals, disclaimer: DISCLAIMER }
}

/// Map a cumulative score to its likelihood and confidence labels.
pub fn label(score: u32) -> (Likelihood, Confidence) {
    match score {
        5.. => (Likelihood::High, Confidence::Moderate),
        3..=4 => (Likelihood::Moderate, Confidence::Low),
        1..=2 => (Likelihood::Possible, Confidence::VeryLow),
        0 => (Likelihood::Uncertain, Confidence::Insufficient),
    }
}

#[cfg(test)]
#[path = "automation_tests.rs"]
mod tests;
