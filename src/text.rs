//! Shared text measuring and splitting helpers.

use unicode_width::UnicodeWidthStr;

/// Terminal column width of `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with trailing spaces to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Pad `s` with leading spaces to `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Whitespace, counting the ASCII information separators `\x1c`..`\x1f`.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `s` without trailing [`is_space`] characters.
pub fn trim_end_space(s: &str) -> &str {
    s.trim_end_matches(is_space)
}

/// Characters that end a line.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `s` into lines on every line boundary.
///
/// Each item is `(content, content_with_terminator)`. `\r\n` counts as one
/// terminator, and a trailing terminator does not produce an empty final
/// line.
pub fn split_lines(s: &str) -> Vec<(&str, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                end = j + 1;
                chars.next();
            }
        }
        lines.push((&s[start..i], &s[start..end]));
        start = end;
    }

    if start < s.len() {
        lines.push((&s[start..], &s[start..]));
    }
    lines
}
