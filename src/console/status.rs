//! Status line formatting.
//!
//! A status line is the space-join of the colored glyph, each argument and
//! the reset code: `"{color}{glyph} {arg} {arg} {reset}"`.

use std::fmt::Display;

use crate::palette::{Color, RESET};

/// The kinds of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Message,
    Success,
    Result,
    Error,
}

impl Level {
    /// Prefix glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Level::Debug => "%",
            Level::Message => "❋",
            Level::Success => "✓",
            Level::Result => "→",
            Level::Error => "!",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Debug => Color::Blue,
            Level::Message => Color::Cyan,
            Level::Success => Color::Green,
            Level::Result => Color::Magenta,
            Level::Error => Color::Red,
        }
    }
}

/// Build one status line, including the trailing newline.
pub fn line(level: Level, args: &[&dyn Display], color: bool) -> String {
    let (open, close) = if color {
        (level.color().code(), RESET)
    } else {
        ("", "")
    };

    let mut out = format!("{}{}", open, level.glyph());
    for arg in args {
        out.push(' ');
        out.push_str(&arg.to_string());
    }
    out.push(' ');
    out.push_str(close);
    out.push('\n');
    out
}
