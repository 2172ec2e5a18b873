//! Integration tests for the library's stdout free functions and macros

use predicates::prelude::*;

use crate::helpers::{tour, tour_with_closed_stdout};

// ============================================================================
// Status Macro Tests
// ============================================================================

#[test]
fn status_macros_print_one_line_each() {
    tour()
        .arg("status")
        .assert()
        .success()
        .stdout(concat!(
            "\x1b[34m% An elephant never forgets. \x1b[0m\n",
            "\x1b[36m❋ The sleeping fox catches no poultry. \x1b[0m\n",
            "\x1b[32m✓ From downtown! \x1b[0m\n",
            "\x1b[35m→ Upgrade complete. \x1b[0m\n",
            "\x1b[31m! Dave, my mind is going. \x1b[0m\n",
        ));
}

#[test]
fn status_macros_without_arguments_keep_prefix_and_reset() {
    tour()
        .arg("empty")
        .assert()
        .success()
        .stdout("\x1b[34m% \x1b[0m\n\x1b[32m✓ \x1b[0m\n");
}

#[test]
fn status_macros_accept_mixed_display_types() {
    tour()
        .arg("mixed")
        .assert()
        .success()
        .stdout("\x1b[35m→ took 3 m 2.5 true total \x1b[0m\n");
}

#[test]
fn status_macros_follow_the_environment() {
    tour()
        .arg("status")
        .env("NO_COLOR", "1")
        .env("VOLANT_DEBUG", "0")
        .assert()
        .success()
        .stdout(concat!(
            "❋ The sleeping fox catches no poultry. \n",
            "✓ From downtown! \n",
            "→ Upgrade complete. \n",
            "! Dave, my mind is going. \n",
        ));
}

#[test]
fn die_macro_prints_and_exits_with_one() {
    tour()
        .arg("die")
        .assert()
        .code(1)
        .stdout("\x1b[36m❋ last words \x1b[0m\n\x1b[31m! fatal 1 \x1b[0m\n");
}

// ============================================================================
// Layout Function Tests
// ============================================================================

#[test]
fn layout_functions_write_to_stdout() {
    let rule = "─".repeat(78);
    let expected = [
        format!("  {}  \n", "─".repeat(76)),
        format!("╭{rule}╮\n│ {:<76} │\n╰{rule}╯\n", "Tour"),
        "  strip\n\n   me\n".to_string(),
        "  [1_000_000, 2]\n".to_string(),
        "  {'downloads': 12_000, 'name': 'volant'}\n".to_string(),
        "  ⁃ 0\n  ⁃ 1\n  ⁃ 4\n".to_string(),
        "  crate : volant\n      v : 0.1.0\n".to_string(),
        "\x1b]52;c;aGk=\x07".to_string(),
        "\x1b]0;tour\x07".to_string(),
    ]
    .concat();

    tour().arg("layout").assert().success().stdout(expected);
}

// ============================================================================
// Write Failure Tests
// ============================================================================

#[test]
#[cfg(unix)]
fn closed_stdout_is_logged_not_fatal() {
    let (stderr, exit_code) = tour_with_closed_stdout("closed");
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    // One warning per failed call: message!, then separator().
    assert_eq!(
        stderr.matches("failed to write to stdout").count(),
        2,
        "stderr: {}",
        stderr
    );
}

#[test]
fn unknown_stop_is_a_usage_error() {
    tour()
        .arg("nowhere")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'nowhere'"));
}
