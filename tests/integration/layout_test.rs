//! Integration tests for decorations, indent, bullets and map

use crate::helpers::{run_volant, volant};

const SEPARATOR: &str =
    "  ────────────────────────────────────────────────────────────────────────────  \n";

const HEADING_SHORT: &str = concat!(
    "╭──────────────────────────────────────────────────────────────────────────────╮\n",
    "│ Extra! Extra! Read all about it!                                             │\n",
    "╰──────────────────────────────────────────────────────────────────────────────╯\n",
);

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                     eiusmod tempor incididunt ut labore et dolore magna aliqua.";

// ============================================================================
// Decoration Tests
// ============================================================================

#[test]
fn separator_prints_fixed_rule() {
    let (stdout, _stderr, exit_code) = run_volant(&["separator"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, SEPARATOR);
}

#[test]
fn heading_pads_short_text() {
    let (stdout, _stderr, exit_code) = run_volant(&["heading", "Extra! Extra! Read all about it!"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, HEADING_SHORT);
}

#[test]
fn heading_grows_for_long_text() {
    let (stdout, _stderr, exit_code) = run_volant(&["heading", LOREM]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!("heading_long", stdout);
}

// ============================================================================
// Indent Tests
// ============================================================================

#[test]
fn indent_reads_stdin() {
    volant()
        .arg("indent")
        .write_stdin("strip \n me\r\ndown\t")
        .assert()
        .success()
        .stdout("  strip\n   me\n  down\n");
}

#[test]
fn indent_keeps_blank_lines_bare() {
    let (stdout, _stderr, _exit_code) = run_volant(&["indent", "Hop\n\nskip\n\nskip"]);
    assert_eq!(stdout, "  Hop\n\n  skip\n\n  skip\n");
}

#[test]
fn indent_of_empty_input_prints_nothing() {
    volant()
        .arg("indent")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

// ============================================================================
// Bullets and Map Tests
// ============================================================================

#[test]
fn bullets_print_one_line_per_item() {
    let (stdout, _stderr, exit_code) = run_volant(&["bullets", "Open", "Write", "Close"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "  ⁃ Open\n  ⁃ Write\n  ⁃ Close\n");
}

#[test]
fn bullets_without_items_print_nothing() {
    let (stdout, _stderr, exit_code) = run_volant(&["bullets"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn map_aligns_keys_in_argument_order() {
    let (stdout, _stderr, exit_code) =
        run_volant(&["map", "name=volant", "v=0.1.0", "url=https://x?a=b"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "  name : volant\n     v : 0.1.0\n   url : https://x?a=b\n"
    );
}

#[test]
fn map_rejects_entries_without_equals() {
    let (_stdout, stderr, exit_code) = run_volant(&["map", "novalue"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("KEY=VALUE"));
}
