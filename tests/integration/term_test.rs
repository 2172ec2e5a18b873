//! Integration tests for terminal control, mark and tilde

use predicates::prelude::*;

use crate::helpers::{run_volant, volant};

// ============================================================================
// OSC Sequence Tests
// ============================================================================

#[test]
fn clip_writes_osc52_without_newline() {
    let (stdout, _stderr, exit_code) = run_volant(&["clip", "Aparecium!"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b]52;c;QXBhcmVjaXVtIQ==\x07");
}

#[test]
fn clip_accepts_empty_text() {
    let (stdout, _stderr, _exit_code) = run_volant(&["clip", ""]);
    assert_eq!(stdout, "\x1b]52;c;\x07");
}

#[test]
fn title_writes_osc0_verbatim() {
    let (stdout, _stderr, exit_code) = run_volant(&["title", "They call me Mister Tibbs!"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b]0;They call me Mister Tibbs!\x07");
}

// ============================================================================
// Mark Tests
// ============================================================================

#[test]
fn mark_prints_each_state() {
    for (state, expected) in [
        ("none", "∅\n"),
        ("false", "\x1b[31m✗\x1b[0m\n"),
        ("true", "\x1b[32m✓\x1b[0m\n"),
    ] {
        let (stdout, _stderr, exit_code) = run_volant(&["mark", state]);
        assert_eq!(exit_code, 0);
        assert_eq!(stdout, expected, "mark {}", state);
    }
}

#[test]
fn mark_follows_color_switch() {
    for (state, expected) in [("none", "∅\n"), ("false", "✗\n"), ("true", "✓\n")] {
        volant()
            .env("NO_COLOR", "1")
            .args(["mark", state])
            .assert()
            .success()
            .stdout(expected);
        volant()
            .args(["--no-color", "mark", state])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn mark_rejects_unknown_state() {
    let (_stdout, stderr, exit_code) = run_volant(&["mark", "maybe"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"));
}

// ============================================================================
// Tilde Tests
// ============================================================================

#[test]
#[cfg(unix)]
fn tilde_reads_home_at_call_time() {
    let cases = [
        ("/home/oski/oso/cachorro", "~/oso/cachorro\n"),
        ("/home/oski", "~\n"),
        ("/home/oskar", "/home/oskar\n"),
        ("/den/home/oski", "/den/home/oski\n"),
        ("/home/oski/cub/home/oski", "~/cub/home/oski\n"),
        ("/home/oski/", "~/\n"),
        ("/home/oski/./notes/", "~/./notes/\n"),
        ("/home//oski/x", "/home//oski/x\n"),
    ];
    for (path, expected) in cases {
        volant()
            .env("HOME", "/home/oski")
            .args(["tilde", path])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
#[cfg(unix)]
fn tilde_follows_a_different_home() {
    volant()
        .env("HOME", "/srv/bear")
        .args(["tilde", "/home/oski/x"])
        .assert()
        .success()
        .stdout("/home/oski/x\n");
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_a_script() {
    volant()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("volant"));
}
