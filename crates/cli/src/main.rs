// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The glyphless Authors

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use glyphless::cli::{Cli, Command};
use glyphless::config::Config;
use glyphless::discovery;

mod cmd_clean;
mod cmd_patterns;
mod cmd_scan;
mod input;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("glyphless: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Log to stderr, filtered by `GLYPHLESS_LOG`; `--verbose` raises the default to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "glyphless=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GLYPHLESS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;

    match &cli.command {
        Command::Scan(args) => cmd_scan::run(args, &config),
        Command::Clean(args) => cmd_clean::run(args, &config),
        Command::Patterns(args) => cmd_patterns::run(args),
        Command::Demo => {
            println!("{}", glyphless::demo::DEMO_TEXT);
            Ok(ExitCode::SUCCESS)
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "glyphless", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Explicit `--config` wins; otherwise discover from the working directory.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Ok(Config::load(path)?);
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => Ok(Config::load(&path)?),
        None => Ok(Config::default()),
    }
}
