// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Helpers shared by unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::config::CONFIG_FILE;
use crate::record::AnalysisRecord;

/// Temp directory holding a `glyphless.toml` with `config`.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
    dir
}

/// Write `(relative path, content)` pairs under `root`, creating parents.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Named temp file holding `content`; the file lives as long as the handle.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Text with `ch` inserted at each offset of `offsets` in a run of `len` dots.
pub fn seeded_text(len: usize, ch: char, offsets: &[usize]) -> String {
    (0..len).map(|i| if offsets.contains(&i) { ch } else { '.' }).collect()
}

/// Offsets of every occurrence in `record`.
pub fn offsets(record: &AnalysisRecord) -> Vec<usize> {
    record.occurrences().iter().map(|o| o.offset).collect()
}
