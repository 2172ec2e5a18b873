//! Width-aware multi-line formatting.
//!
//! Anything whose one-line repr fits in the remaining columns is written as
//! is. Wider dicts, lists and tuples get one entry per line; wider strings
//! are split at whitespace into adjacent quoted chunks. Columns are counted
//! in characters.

use super::repr::{quote, repr, sorted_entries, Style};
use super::Value;
use crate::text::{is_space, split_lines};

/// Pretty-format `value` within `width` columns.
pub fn pformat(value: &Value, width: usize) -> String {
    let mut printer = Printer {
        width: isize::try_from(width).unwrap_or(isize::MAX),
        out: String::new(),
    };
    printer.format(value, 0, 0, 0);
    printer.out
}

fn char_len(s: &str) -> isize {
    isize::try_from(s.chars().count()).unwrap_or(isize::MAX)
}

/// `\S*\s*` runs of a line, without the trailing empty run.
fn word_parts(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let word_end = rest.find(is_space).unwrap_or(rest.len());
        let part_end = rest[word_end..]
            .find(|c: char| !is_space(c))
            .map_or(rest.len(), |n| word_end + n);
        parts.push(&rest[..part_end]);
        rest = &rest[part_end..];
    }
    parts
}

struct Printer {
    width: isize,
    out: String,
}

impl Printer {
    fn newline(&mut self, indent: isize) {
        self.out.push('\n');
        for _ in 0..indent {
            self.out.push(' ');
        }
    }

    /// `allowance` reserves columns for closing delimiters that follow.
    fn format(&mut self, value: &Value, indent: isize, allowance: isize, level: usize) {
        let rep = repr(value, Style::PRETTY);
        let max_width = self.width - indent - allowance;
        if char_len(&rep) > max_width {
            match value {
                Value::Dict(entries) => return self.dict(entries, indent, allowance, level + 1),
                Value::List(items) => return self.list(items, indent, allowance, level + 1),
                Value::Tuple(items) => return self.tuple(items, indent, allowance, level + 1),
                Value::Str(s) if !s.is_empty() => {
                    return self.string(s, indent, allowance, level + 1)
                }
                _ => {}
            }
        }
        self.out.push_str(&rep);
    }

    fn dict(&mut self, entries: &[(Value, Value)], indent: isize, allowance: isize, level: usize) {
        self.out.push('{');
        let ordered = sorted_entries(entries);
        let indent = indent + 1;
        let allowance = allowance + 1;
        for (i, (key, value)) in ordered.iter().enumerate() {
            let last = i + 1 == ordered.len();
            let key_rep = repr(key, Style::PRETTY);
            self.out.push_str(&key_rep);
            self.out.push_str(": ");
            self.format(
                value,
                indent + char_len(&key_rep) + 2,
                if last { allowance } else { 1 },
                level,
            );
            if !last {
                self.out.push(',');
                self.newline(indent);
            }
        }
        self.out.push('}');
    }

    fn list(&mut self, items: &[Value], indent: isize, allowance: isize, level: usize) {
        self.out.push('[');
        self.items(items, indent, allowance + 1, level);
        self.out.push(']');
    }

    fn tuple(&mut self, items: &[Value], indent: isize, allowance: isize, level: usize) {
        let end = if items.len() == 1 { ",)" } else { ")" };
        self.out.push('(');
        self.items(items, indent, allowance + char_len(end), level);
        self.out.push_str(end);
    }

    fn items(&mut self, items: &[Value], indent: isize, allowance: isize, level: usize) {
        let indent = indent + 1;
        for (i, item) in items.iter().enumerate() {
            let last = i + 1 == items.len();
            if i > 0 {
                self.out.push(',');
                self.newline(indent);
            }
            self.format(item, indent, if last { allowance } else { 1 }, level);
        }
    }

    fn string(&mut self, s: &str, mut indent: isize, mut allowance: isize, level: usize) {
        // A split string at the top level is wrapped in parentheses.
        let top_level = level == 1;
        if top_level {
            indent += 1;
            allowance += 1;
        }

        let lines = split_lines(s);
        let max_width = self.width - indent;
        let mut max_width_line = max_width;
        let mut chunks = Vec::new();

        for (i, (_, line)) in lines.iter().enumerate() {
            let last_line = i + 1 == lines.len();
            let rep = quote(line);
            if last_line {
                max_width_line -= allowance;
            }
            if char_len(&rep) <= max_width_line {
                chunks.push(rep);
                continue;
            }

            let parts = word_parts(line);
            let mut max_width_part = max_width;
            let mut current = String::new();
            for (j, part) in parts.iter().enumerate() {
                let candidate = format!("{}{}", current, part);
                if last_line && j + 1 == parts.len() {
                    max_width_part -= allowance;
                }
                if char_len(&quote(&candidate)) > max_width_part {
                    if !current.is_empty() {
                        chunks.push(quote(&current));
                    }
                    current = part.to_string();
                } else {
                    current = candidate;
                }
            }
            if !current.is_empty() {
                chunks.push(quote(&current));
            }
        }

        if chunks.len() == 1 {
            self.out.push_str(&chunks[0]);
            return;
        }

        if top_level {
            self.out.push('(');
        }
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                self.newline(indent);
            }
            self.out.push_str(chunk);
        }
        if top_level {
            self.out.push(')');
        }
    }
}
