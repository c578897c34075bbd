//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the glyphless binary.
///
/// `GLYPHLESS_CONFIG` and `GLYPHLESS_LOG` are cleared so the host
/// environment cannot leak into a spec.
pub fn glyphless_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("glyphless"));
    cmd.env_remove("GLYPHLESS_CONFIG").env_remove("GLYPHLESS_LOG");
    cmd
}

/// Temp directory marked as a git root so config discovery stops inside it.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Temp project with a glyphless.toml.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = temp_project();
    std::fs::write(dir.path().join("glyphless.toml"), config).unwrap();
    dir
}
