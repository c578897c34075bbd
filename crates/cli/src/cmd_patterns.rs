// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

//! Patterns command: list the registry.

use std::process::ExitCode;

use serde::Serialize;

use glyphless::cli::{ListFormat, PatternsArgs};
use glyphless::registry::{PatternDescriptor, patterns};

/// Registry entry plus its derived fields, as emitted by `-o json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Listed {
    #[serde(flatten)]
    pattern: &'static PatternDescriptor,
    code_point: String,
    doc_url: String,
}

pub fn run(args: &PatternsArgs) -> anyhow::Result<ExitCode> {
    match args.output {
        ListFormat::Json => {
            let listed: Vec<Listed> = patterns()
                .iter()
                .map(|pattern| Listed {
                    pattern,
                    code_point: pattern.code_point_hex(),
                    doc_url: pattern.doc_url(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        ListFormat::Text => {
            for p in patterns() {
                println!(
                    "U+{:<6} {:<13} {:<7} {}",
                    p.code_point_hex(),
                    p.category.as_str(),
                    p.priority.as_str(),
                    p.name
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
