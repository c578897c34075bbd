//! Scan command behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use std::fs;

/// > Text report is the default and counts what it finds
#[test]
fn scan_stdin_prints_text_report() {
    let dir = temp_project();
    glyphless_cmd()
        .arg("scan")
        .current_dir(dir.path())
        .write_stdin("a\u{200B}b")
        .assert()
        .success()
        .stdout(predicates::str::contains("INFORME DE DETECCIÓN DE CARACTERES INVISIBLES"))
        .stdout(predicates::str::contains("CARACTERES INVISIBLES DETECTADOS: 1"))
        .stdout(predicates::str::contains("Densidad: 33.3333%"));
}

/// > Clean text reports that nothing was found
#[test]
fn scan_clean_text() {
    let dir = temp_project();
    glyphless_cmd()
        .arg("scan")
        .current_dir(dir.path())
        .write_stdin("hola mundo")
        .assert()
        .success()
        .stdout(predicates::str::contains("RESULTADO: No se encontraron caracteres invisibles."));
}

/// > JSON output is machine readable and carries the total
#[test]
fn scan_file_as_json() {
    let dir = temp_project();
    let path = dir.path().join("input.txt");
    fs::write(&path, "uno\u{200B}dos\u{202F}tres").unwrap();

    let output = glyphless_cmd()
        .args(["scan", "-o", "json"])
        .arg(&path)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["analysis"]["total"], 2);
    assert_eq!(value["metadata"]["generator"], "glyphless");
    assert_eq!(value["textStats"]["totalCharacters"], 12);
}

/// > CSV output has one row per occurrence
#[test]
fn scan_as_csv() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["scan", "-o", "csv", "-"])
        .current_dir(dir.path())
        .write_stdin("x\u{200B}y\u{00A0}z")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Position,Código Unicode"))
        .stdout(predicates::str::contains("1,200B,\"Zero Width Space (U+200B)\",zero-width,high"))
        .stdout(predicates::str::contains("3,00A0,\"No-Break Space (U+00A0)\",space,high"));
}

/// > --save writes the report to a file and nothing to stdout
#[test]
fn scan_save_writes_file() {
    let dir = temp_project();
    let report = dir.path().join("informe.txt");
    glyphless_cmd()
        .args(["scan", "--save"])
        .arg(&report)
        .current_dir(dir.path())
        .write_stdin("a\u{200B}")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("CARACTERES INVISIBLES DETECTADOS: 1"));
}

/// > --fail-on-detect exits 1 only when something is found
#[test]
fn fail_on_detect_exit_codes() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["scan", "--fail-on-detect"])
        .current_dir(dir.path())
        .write_stdin("a\u{FEFF}")
        .assert()
        .code(1);

    glyphless_cmd()
        .args(["scan", "--fail-on-detect"])
        .current_dir(dir.path())
        .write_stdin("clean")
        .assert()
        .success();
}

/// > --heatmap prints block counts to stderr
#[test]
fn heatmap_goes_to_stderr() {
    let dir = temp_project();
    let text = format!("\u{200B}{}\u{200B}", "a".repeat(60));
    glyphless_cmd()
        .args(["scan", "--heatmap"])
        .current_dir(dir.path())
        .write_stdin(text)
        .assert()
        .success()
        .stderr(predicates::str::contains("heatmap (50 chars/block): 1 1"));
}

/// > Invalid UTF-8 input is an error naming its source
#[test]
fn invalid_utf8_fails() {
    let dir = temp_project();
    let path = dir.path().join("bad.bin");
    fs::write(&path, [0x66, 0xFF, 0xFE]).unwrap();
    glyphless_cmd()
        .arg("scan")
        .arg(&path)
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not valid UTF-8"));
}

/// > Missing input file is an error
#[test]
fn missing_file_fails() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["scan", "does-not-exist.txt"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does-not-exist.txt"));
}
