// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Clean command implementation.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use glyphless::clean::clean;
use glyphless::cli::CleanArgs;
use glyphless::config::{Config, parse_codepoint};

use crate::input;

/// Run the clean command.
pub fn run(args: &CleanArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let keep: Vec<char> = if args.keep.is_empty() {
        config.clean.keep_chars()?
    } else {
        args.keep.iter().map(|s| parse_codepoint(s)).collect::<Result<_, _>>()?
    };

    let target = args.path.as_deref().filter(|p| *p != Path::new("-"));
    if args.in_place && target.is_none() {
        anyhow::bail!("--in-place needs a file path, not stdin");
    }

    let input = input::read(args.path.as_deref())?;
    let outcome = clean(&input.text, &keep);

    match (target, args.in_place) {
        (Some(path), true) => {
            if outcome.changed() {
                std::fs::write(path, &outcome.cleaned)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }
        _ => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(outcome.cleaned.as_bytes())?;
        }
    }

    eprintln!(
        "removed {} invisible characters of {} kinds",
        outcome.removed_count,
        outcome.removed_kinds.len()
    );
    Ok(ExitCode::SUCCESS)
}
