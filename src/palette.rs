//! Color palette for CLI output.
//!
//! Centralizes the ANSI escape codes used by the status printers, the
//! tri-state glyph and anything else that colors text.

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Semantic color names understood by the output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    /// Extended tone: bright black, rendered as gray by most terminals
    Gray,
    /// Extended tone: 256-color orange
    Orange,
}

impl Color {
    /// The escape sequence that switches the terminal to this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Reset => RESET,
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Gray => "\x1b[90m",
            Color::Orange => "\x1b[38;5;208m",
        }
    }

    /// Wrap `text` in this color followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.code(), text, RESET)
    }
}
