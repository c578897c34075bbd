// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;
use crate::registry::classify;

fn at(offsets: &[usize]) -> Vec<Occurrence> {
    let zwsp = classify('\u{200B}').unwrap();
    offsets.iter().map(|&offset| Occurrence { offset, pattern: zwsp }).collect()
}

#[test]
fn empty_input_yields_zeroed_stats() {
    let stats = analyze(&[], 100);
    assert_eq!(stats, PatternStats::empty());
    assert_eq!(stats.distribution, Distribution::None);
    assert_eq!(stats.clustering.cluster_count, 0);
}

#[test]
fn density_guards_zero_length() {
    assert_eq!(density(0, 0), 0.0);
    assert_eq!(density(3, 0), 0.0);
    assert!((density(1, 3) - 1.0 / 3.0).abs() < f64::EPSILON);
}

// =============================================================================
// CLUSTERING
// =============================================================================

#[parameterized(
    gap_49_same_cluster = { &[0, 49], 1 },
    gap_50_splits = { &[0, 50], 2 },
    three_far_apart = { &[0, 100, 200], 3 },
    one_occurrence = { &[7], 1 },
)]
fn cluster_boundary(offsets: &[usize], expected: usize) {
    let stats = analyze(&at(offsets), 1000);
    assert_eq!(stats.clustering.cluster_count, expected);
}

#[test]
fn cluster_sizes_and_average() {
    // clusters: [0,1,2] [100] [200,210]
    let stats = analyze(&at(&[0, 1, 2, 100, 200, 210]), 1000);
    assert_eq!(stats.clustering.cluster_count, 3);
    assert_eq!(stats.clustering.largest_cluster, 3);
    assert!((stats.clustering.average_cluster_size - 2.0).abs() < f64::EPSILON);
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

#[test]
fn distribution_concentrated_when_one_cluster_dominates() {
    let stats = analyze(&at(&[0, 1, 2, 500]), 1000);
    assert_eq!(stats.distribution, Distribution::Concentrated);
}

#[test]
fn distribution_uniform_when_isolated() {
    let stats = analyze(&at(&[0, 100, 200, 300]), 1000);
    assert_eq!(stats.distribution, Distribution::Uniform);
}

#[test]
fn distribution_dispersed_for_even_clusters() {
    // two clusters of two: largest (2) is not > half (2), average is 2
    let stats = analyze(&at(&[0, 1, 500, 501]), 1000);
    assert_eq!(stats.distribution, Distribution::Dispersed);
}

#[test]
fn single_occurrence_is_concentrated() {
    let stats = analyze(&at(&[5]), 10);
    assert_eq!(stats.distribution, Distribution::Concentrated);
}

// =============================================================================
// PERIODICITY
// =============================================================================

#[test]
fn gap_repeated_three_times_is_periodic() {
    let stats = analyze(&at(&[0, 10, 20, 30]), 100);
    assert_eq!(stats.periodicity, Some(Periodicity { interval: 10, frequency: 3 }));
}

#[test]
fn gap_repeated_twice_is_not_periodic() {
    let stats = analyze(&at(&[0, 10, 20]), 100);
    assert_eq!(stats.periodicity, None);
}

#[test]
fn periodicity_tie_prefers_first_seen_gap() {
    // gaps: 7,7,7,3,3,3 -> both frequency 3, 7 seen first
    let stats = analyze(&at(&[0, 7, 14, 21, 24, 27, 30]), 100);
    assert_eq!(stats.periodicity, Some(Periodicity { interval: 7, frequency: 3 }));

    // gaps: 3,3,3,7,7,7 -> 3 seen first
    let stats = analyze(&at(&[0, 3, 6, 9, 16, 23, 30]), 100);
    assert_eq!(stats.periodicity, Some(Periodicity { interval: 3, frequency: 3 }));
}

#[test]
fn periodicity_picks_most_frequent_gap() {
    // gaps: 5, 2,2,2,2
    let stats = analyze(&at(&[0, 5, 7, 9, 11, 13]), 100);
    assert_eq!(stats.periodicity, Some(Periodicity { interval: 2, frequency: 4 }));
}

// =============================================================================
// HEATMAP
// =============================================================================

#[test]
fn heatmap_counts_per_block() {
    let blocks = heatmap(&at(&[0, 10, 49, 50, 149]), 150, HEATMAP_BLOCK_SIZE);
    assert_eq!(blocks, vec![3, 1, 1]);
}

#[test]
fn heatmap_partial_last_block() {
    let blocks = heatmap(&at(&[120]), 121, 50);
    assert_eq!(blocks, vec![0, 0, 1]);
}

#[test]
fn heatmap_empty_without_occurrences() {
    assert!(heatmap(&[], 500, 50).is_empty());
}
