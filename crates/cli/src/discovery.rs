// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Locating `glyphless.toml`.
//!
//! The search runs from a start directory through its ancestors and ends
//! at the first directory holding `.git`, so a config outside the
//! repository never applies to text inside it.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Nearest config file at or above `start_dir`, bounded by the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("found config at {}", candidate.display());
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
