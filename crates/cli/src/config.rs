// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! `glyphless.toml` configuration.
//!
//! Every key is optional. Unknown keys are ignored so older binaries keep
//! working against newer config files.

use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::clean::DEFAULT_KEEP;
use crate::error::{Error, Result};
use crate::registry;

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "glyphless.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: Option<u32>,
    pub report: ReportConfig,
    pub clean: CleanConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default output format for `scan`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Code points preserved by `clean`, as `U+XXXX` or `XXXX`.
    pub keep: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            keep: DEFAULT_KEEP.iter().map(|&c| format!("U+{:04X}", u32::from(c))).collect(),
        }
    }
}

impl CleanConfig {
    /// Parsed keep list.
    pub fn keep_chars(&self) -> Result<Vec<char>> {
        let chars = self.keep.iter().map(|s| parse_codepoint(s)).collect::<Result<Vec<_>>>()?;
        for ch in &chars {
            if registry::classify(*ch).is_none() {
                tracing::warn!("clean.keep lists U+{:04X}, which is not a tracked character", u32::from(*ch));
            }
        }
        Ok(chars)
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Parse `U+200B`, `u+200b` or `200B` into a scalar value.
pub fn parse_codepoint(s: &str) -> Result<char> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .unwrap_or(trimmed);
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidCodepoint(s.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
