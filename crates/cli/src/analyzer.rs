// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Statistics over the occurrence layout: density, clustering, periodicity.

use std::collections::HashMap;

use crate::record::{ClusterStat, Distribution, Occurrence, PatternStats, Periodicity};

/// Occurrences closer than this many scalar values share a cluster.
pub const CLUSTER_THRESHOLD: usize = 50;

/// A gap must recur more than this many times to count as periodic.
pub const PERIODICITY_MIN_REPEATS: usize = 2;

/// Default block size for [`heatmap`].
pub const HEATMAP_BLOCK_SIZE: usize = 50;

/// Derive pattern statistics from occurrences sorted by offset.
pub fn analyze(occurrences: &[Occurrence], text_length: usize) -> PatternStats {
    if occurrences.is_empty() {
        return PatternStats::empty();
    }

    let total = occurrences.len();
    let density = density(total, text_length);
    let clustering = clusters(occurrences);

    let distribution = if clustering.largest_cluster as f64 > total as f64 * 0.5 {
        Distribution::Concentrated
    } else if clustering.average_cluster_size < 2.0 {
        Distribution::Uniform
    } else {
        Distribution::Dispersed
    };

    PatternStats {
        density,
        clustering,
        periodicity: periodicity(occurrences),
        distribution,
    }
}

/// Occurrences per scalar value; zero for empty text.
pub fn density(count: usize, text_length: usize) -> f64 {
    if text_length == 0 {
        return 0.0;
    }
    count as f64 / text_length as f64
}

fn clusters(occurrences: &[Occurrence]) -> ClusterStat {
    let mut sizes = Vec::new();
    let mut current = 0usize;
    let mut previous: Option<usize> = None;

    for occ in occurrences {
        match previous {
            Some(prev) if occ.offset - prev < CLUSTER_THRESHOLD => current += 1,
            Some(_) => {
                sizes.push(current);
                current = 1;
            }
            None => current = 1,
        }
        previous = Some(occ.offset);
    }
    if current > 0 {
        sizes.push(current);
    }

    let cluster_count = sizes.len();
    ClusterStat {
        cluster_count,
        average_cluster_size: if cluster_count == 0 {
            0.0
        } else {
            occurrences.len() as f64 / cluster_count as f64
        },
        largest_cluster: sizes.iter().copied().max().unwrap_or(0),
    }
}

/// Most frequent gap between consecutive occurrences.
///
/// On equal frequency the gap seen first wins. Reported only when it
/// recurs more than [`PERIODICITY_MIN_REPEATS`] times.
fn periodicity(occurrences: &[Occurrence]) -> Option<Periodicity> {
    let mut tally: Vec<(usize, usize)> = Vec::new();
    let mut index: HashMap<usize, usize> = HashMap::new();

    for pair in occurrences.windows(2) {
        let gap = pair[1].offset - pair[0].offset;
        match index.get(&gap) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(gap, tally.len());
                tally.push((gap, 1));
            }
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for &(gap, freq) in &tally {
        if best.is_none_or(|(_, f)| freq > f) {
            best = Some((gap, freq));
        }
    }

    best.filter(|&(_, freq)| freq > PERIODICITY_MIN_REPEATS)
        .map(|(interval, frequency)| Periodicity { interval, frequency })
}

/// Count occurrences per block of `block_size` scalar values.
///
/// Returns an empty vector when there is nothing to plot.
pub fn heatmap(occurrences: &[Occurrence], text_length: usize, block_size: usize) -> Vec<usize> {
    if occurrences.is_empty() || text_length == 0 || block_size == 0 {
        return Vec::new();
    }
    let mut blocks = vec![0; text_length.div_ceil(block_size)];
    for occ in occurrences {
        if let Some(slot) = blocks.get_mut(occ.offset / block_size) {
            *slot += 1;
        }
    }
    blocks
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
