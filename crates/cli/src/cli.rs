// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

/// Detects invisible Unicode characters and scores how automated their placement looks
#[derive(Parser)]
#[command(name = "glyphless")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GLYPHLESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan text for invisible characters and print a report
    Scan(ScanArgs),
    /// Remove invisible characters from text
    Clean(CleanArgs),
    /// List the tracked characters
    Patterns(PatternsArgs),
    /// Print a sample text containing invisible characters
    Demo,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// File to scan (stdin when omitted or "-")
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Report format (default: from config, else txt)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Print per-block occurrence counts to stderr
    #[arg(long)]
    pub heatmap: bool,

    /// Exit with status 1 when any invisible character is found
    #[arg(long)]
    pub fail_on_detect: bool,
}

#[derive(clap::Args)]
pub struct CleanArgs {
    /// File to clean (stdin when omitted or "-")
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Rewrite the file instead of printing the cleaned text
    #[arg(long, requires = "path")]
    pub in_place: bool,

    /// Code point to preserve, e.g. U+200D (repeatable; replaces config)
    #[arg(long, value_name = "CP")]
    pub keep: Vec<String>,
}

#[derive(clap::Args)]
pub struct PatternsArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: ListFormat,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
    Csv,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
