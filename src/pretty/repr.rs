//! Single-line representations of [`Value`]s.

use std::cmp::Ordering;

use super::Value;

/// Knobs that distinguish the display form from the pretty form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    pub sort_keys: bool,
    pub underscores: bool,
}

impl Style {
    pub const DISPLAY: Style = Style {
        sort_keys: false,
        underscores: false,
    };

    pub const PRETTY: Style = Style {
        sort_keys: true,
        underscores: true,
    };
}

/// One-line representation of `value`.
pub(crate) fn repr(value: &Value, style: Style) -> String {
    let mut out = String::new();
    write_repr(value, style, &mut out);
    out
}

fn write_repr(value: &Value, style: Style, out: &mut String) {
    match value {
        Value::None => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Int(n) if style.underscores => out.push_str(&group_digits(*n)),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&float_repr(*f)),
        Value::Str(s) => out.push_str(&quote(s)),
        Value::List(items) => {
            out.push('[');
            write_seq(items, style, out);
            out.push(']');
        }
        Value::Tuple(items) => {
            out.push('(');
            write_seq(items, style, out);
            if items.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Value::Dict(entries) => {
            out.push('{');
            let ordered: Vec<&(Value, Value)> = if style.sort_keys {
                sorted_entries(entries)
            } else {
                entries.iter().collect()
            };
            for (i, (key, val)) in ordered.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(key, style, out);
                out.push_str(": ");
                write_repr(val, style, out);
            }
            out.push('}');
        }
    }
}

fn write_seq(items: &[Value], style: Style, out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_repr(item, style, out);
    }
}

/// Integer with `_` between every group of three digits.
pub(crate) fn group_digits(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}

/// Shortest round-trip float text, always with a fraction or an exponent.
pub(crate) fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = f.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", f);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            None => sci,
        };
    }

    let plain = f.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Format characters (general category Cf).
const FORMAT_CHARS: &[(u32, u32)] = &[
    (0x00ad, 0x00ad),
    (0x0600, 0x0605),
    (0x061c, 0x061c),
    (0x06dd, 0x06dd),
    (0x070f, 0x070f),
    (0x0890, 0x0891),
    (0x08e2, 0x08e2),
    (0x180e, 0x180e),
    (0x200b, 0x200f),
    (0x202a, 0x202e),
    (0x2060, 0x2064),
    (0x2066, 0x206f),
    (0xfeff, 0xfeff),
    (0xfff9, 0xfffb),
    (0x110bd, 0x110bd),
    (0x110cd, 0x110cd),
    (0x13430, 0x1343f),
    (0x1bca0, 0x1bca3),
    (0x1d173, 0x1d17a),
    (0xe0001, 0xe0001),
    (0xe0020, 0xe007f),
];

/// Private use areas (general category Co).
const PRIVATE_USE: &[(u32, u32)] = &[(0xe000, 0xf8ff), (0xf0000, 0xffffd), (0x100000, 0x10fffd)];

fn in_ranges(ranges: &[(u32, u32)], c: char) -> bool {
    let code = c as u32;
    ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

/// Whether `c` appears as itself inside a quoted string.
///
/// Control, format and private use characters are escaped, as is every
/// separator except the plain space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || in_ranges(FORMAT_CHARS, c)
        || in_ranges(PRIVATE_USE, c))
}

/// Quote a string, preferring single quotes.
pub(crate) fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code < 0x100 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Entries ordered by key. Ties keep insertion order.
pub(crate) fn sorted_entries(entries: &[(Value, Value)]) -> Vec<&(Value, Value)> {
    let mut ordered: Vec<&(Value, Value)> = entries.iter().collect();
    ordered.sort_by(|a, b| compare_keys(&a.0, &b.0));
    ordered
}

enum Number {
    Int(i128),
    Float(f64),
}

fn as_number(value: &Value) -> Option<Number> {
    match value {
        Value::Bool(b) => Some(Number::Int(i128::from(*b))),
        Value::Int(n) => Some(Number::Int(*n)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

/// Order keys by value; keys of unrelated kinds order by type name.
pub(crate) fn compare_keys(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return match (x, y) {
            (Number::Int(x), Number::Int(y)) => x.cmp(&y),
            (Number::Int(x), Number::Float(y)) => (x as f64).partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Number::Float(x), Number::Int(y)) => x.partial_cmp(&(y as f64)).unwrap_or(Ordering::Equal),
            (Number::Float(x), Number::Float(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        };
    }

    match (a, b) {
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::None, Value::None) => Ordering::Equal,
        (Value::List(x), Value::List(y)) | (Value::Tuple(x), Value::Tuple(y)) => {
            for (left, right) in x.iter().zip(y) {
                match compare_keys(left, right) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            x.len().cmp(&y.len())
        }
        _ => a.type_name().cmp(b.type_name()),
    }
}
