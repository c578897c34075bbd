//! Configuration behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > report.format sets the default scan output
#[test]
fn config_sets_default_format() {
    let dir = temp_project_with_config("version = 1\n[report]\nformat = \"csv\"\n");
    glyphless_cmd()
        .arg("scan")
        .current_dir(dir.path())
        .write_stdin("a\u{200B}")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Position,"));
}

/// > -o overrides the configured format
#[test]
fn flag_overrides_config_format() {
    let dir = temp_project_with_config("[report]\nformat = \"csv\"\n");
    glyphless_cmd()
        .args(["scan", "-o", "txt"])
        .current_dir(dir.path())
        .write_stdin("a\u{200B}")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("INFORME"));
}

/// > Config is discovered from a subdirectory
#[test]
fn config_discovered_from_subdirectory() {
    let dir = temp_project_with_config("[report]\nformat = \"json\"\n");
    let nested = dir.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();
    glyphless_cmd()
        .arg("scan")
        .current_dir(&nested)
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"generator\": \"glyphless\""));
}

/// > clean.keep is honoured
#[test]
fn config_clean_keep() {
    let dir = temp_project_with_config("[clean]\nkeep = []\n");
    glyphless_cmd()
        .arg("clean")
        .current_dir(dir.path())
        .write_stdin("a\u{200D}b")
        .assert()
        .success()
        .stdout("ab");
}

/// > --config points at an explicit file
#[test]
fn explicit_config_flag() {
    let dir = temp_project();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[report]\nformat = \"csv\"\n").unwrap();
    glyphless_cmd()
        .arg("-C")
        .arg(&path)
        .arg("scan")
        .current_dir(dir.path())
        .write_stdin("nada")
        .assert()
        .success()
        .stdout(predicates::str::contains("No se encontraron caracteres invisibles"));
}

/// > Broken config is a hard error
#[test]
fn invalid_config_fails() {
    let dir = temp_project_with_config("[report]\nformat = \"xml\"\n");
    glyphless_cmd()
        .arg("scan")
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse config"));
}
