// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Reading input text from a file or stdin.

use std::io::Read;
use std::path::Path;

use glyphless::Error;

/// Text to analyze plus a label naming where it came from.
pub struct Input {
    pub text: String,
    pub source: String,
}

/// Read `path`, or stdin when it is `None` or `-`.
pub fn read(path: Option<&Path>) -> glyphless::Result<Input> {
    match path {
        Some(p) if p != Path::new("-") => {
            let bytes = std::fs::read(p).map_err(|source| Error::Io { path: p.to_path_buf(), source })?;
            decode(bytes, p.display().to_string())
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| Error::Io { path: "<stdin>".into(), source })?;
            decode(bytes, "<stdin>".to_string())
        }
    }
}

fn decode(bytes: Vec<u8>, source: String) -> glyphless::Result<Input> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Input { text, source }),
        Err(_) => Err(Error::InvalidUtf8 { source_name: source }),
    }
}
