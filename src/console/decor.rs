//! Horizontal rule and boxed heading.

use crate::text::{display_width, pad_right};

/// Width of the rule and the minimum inner width of a heading box.
pub const RULE_WIDTH: usize = 76;

const RULE: char = '─';

/// `"  ────…────  \n"`, 76 rule characters between two-space margins.
pub fn separator() -> String {
    format!("  {}  \n", RULE.to_string().repeat(RULE_WIDTH))
}

/// A three-line box around `text`, growing past 76 columns to fit it.
pub fn heading(text: &str) -> String {
    let pad = display_width(text).max(RULE_WIDTH);
    let line = RULE.to_string().repeat(pad);
    format!(
        "╭─{line}─╮\n│ {text} │\n╰─{line}─╯\n",
        line = line,
        text = pad_right(text, pad)
    )
}
