//! Clean command behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use std::fs;

/// > clean keeps the zero width joiner and removes everything else
#[test]
fn clean_preserves_joiner() {
    let dir = temp_project();
    glyphless_cmd()
        .arg("clean")
        .current_dir(dir.path())
        .write_stdin("a\u{200D}b\u{200B}c\u{202F}d")
        .assert()
        .success()
        .stdout("a\u{200D}bcd")
        .stderr(predicates::str::contains("removed 2 invisible characters of 2 kinds"));
}

/// > --keep replaces the default keep list
#[test]
fn clean_with_explicit_keep() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["clean", "--keep", "U+00A0"])
        .current_dir(dir.path())
        .write_stdin("a\u{00A0}b\u{200D}c")
        .assert()
        .success()
        .stdout("a\u{00A0}bc");
}

/// > --in-place rewrites the file
#[test]
fn clean_in_place() {
    let dir = temp_project();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "hola\u{200B} mundo\u{FEFF}").unwrap();

    glyphless_cmd()
        .args(["clean", "--in-place"])
        .arg(&path)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    assert_eq!(fs::read_to_string(&path).unwrap(), "hola mundo");
}

/// > Malformed --keep values are rejected
#[test]
fn clean_rejects_bad_keep() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["clean", "--keep", "nope"])
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid code point"));
}

/// > --in-place refuses stdin and writes no file named "-"
#[test]
fn clean_in_place_rejects_stdin() {
    let dir = temp_project();
    glyphless_cmd()
        .args(["clean", "--in-place", "-"])
        .current_dir(dir.path())
        .write_stdin("a\u{200B}b")
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("--in-place needs a file path"));

    assert!(!dir.path().join("-").exists());
}
