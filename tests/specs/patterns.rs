//! Patterns command behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > Text listing shows one line per tracked character
#[test]
fn patterns_text_lists_registry() {
    let output = glyphless_cmd().arg("patterns").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 30);
    assert!(stdout.contains("Zero Width Space (U+200B)"));
}

/// > JSON listing carries category and year
#[test]
fn patterns_json() {
    let output = glyphless_cmd().args(["patterns", "-o", "json"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &value[0];
    assert_eq!(first["codepoint"], "\u{202F}");
    assert_eq!(first["category"], "space");
    assert_eq!(first["yearObserved"], 2025);
    assert_eq!(first["codePoint"], "202F");
    assert_eq!(first["docUrl"], "https://unicode.org/charts/PDF/U2000.pdf");
    assert_eq!(value.as_array().unwrap().len(), 30);
}
