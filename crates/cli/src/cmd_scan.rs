// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Scan command implementation.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;

use glyphless::Engine;
use glyphless::analyzer::{HEATMAP_BLOCK_SIZE, heatmap};
use glyphless::cli::ScanArgs;
use glyphless::config::Config;

use crate::input;

/// Run the scan command.
pub fn run(args: &ScanArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let input = input::read(args.path.as_deref())?;
    let format = args.output.unwrap_or(config.report.format);

    let mut engine = Engine::new();
    let record = engine.analyze(&input.text);
    tracing::debug!(source = %input.source, total = record.total(), "analyzed input");

    if args.heatmap {
        let blocks = heatmap(record.occurrences(), record.text_length(), HEATMAP_BLOCK_SIZE);
        let rendered: Vec<String> = blocks.iter().map(usize::to_string).collect();
        eprintln!("heatmap ({HEATMAP_BLOCK_SIZE} chars/block): {}", rendered.join(" "));
    }

    let report = glyphless::report::render(format, Some(&*record), &input.text)?;

    match &args.save {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(report.as_bytes())?;
            if !report.ends_with('\n') {
                writeln!(handle)?;
            }
        }
    }

    if args.fail_on_detect && record.total() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
