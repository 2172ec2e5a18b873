//! Indented blocks, bullet lists, aligned mappings and the tri-state mark.

use std::fmt::Display;

use crate::palette::Color;
use crate::pretty::{pformat, Value};
use crate::text::{display_width, pad_left, split_lines, trim_end_space};

const INDENT: &str = "  ";
const BULLET: &str = "⁃";

/// Indent every line of `text` by two spaces.
///
/// Trailing whitespace is stripped from each line and blank lines stay
/// bare. Every line, including the last, ends with `\n`.
pub fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for (line, _) in split_lines(text) {
        let line = trim_end_space(line);
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Pretty-format `value` within `width` columns, then [`indent`] it.
pub fn dump(value: &Value, width: usize) -> String {
    indent(&pformat(value, width))
}

/// Format one bullet line.
pub fn bullet(item: &dyn Display) -> String {
    format!("{INDENT}{BULLET} {item}\n")
}

/// One bullet line per item. The iterator is consumed exactly once.
pub fn bullets<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().map(|item| bullet(&item)).collect()
}

/// Key/value rows with keys right-aligned to the widest key.
pub fn map<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let rows: Vec<(String, String)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let width = rows
        .iter()
        .map(|(k, _)| display_width(k))
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(k, v)| format!("{INDENT}{} : {}\n", pad_left(k, width), v))
        .collect()
}

/// `∅` for unknown, red `✗` for false, green `✓` for true.
///
/// Always colored. [`Console::mark`](crate::Console::mark) follows the
/// console's color switch instead.
pub fn mark(value: Option<bool>) -> String {
    mark_with_color(value, true)
}

/// [`mark`], leaving out the color codes when `color` is false.
pub fn mark_with_color(value: Option<bool>, color: bool) -> String {
    let (glyph, tone) = match value {
        None => return "∅".to_string(),
        Some(false) => ("✗", Color::Red),
        Some(true) => ("✓", Color::Green),
    };
    if color {
        tone.paint(glyph)
    } else {
        glyph.to_string()
    }
}
