//! Command-line interface definitions.
//!
//! Lives in the library so completions and tests can build the same
//! `clap::Command` the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Config;

/// Terminal output helpers from the command line.
#[derive(Debug, Parser)]
#[command(name = "volant", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Read settings from a TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress `debug` lines
    #[arg(long, global = true)]
    pub no_debug: bool,

    /// Do not emit color codes around status lines
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Column budget for `dump`
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,
}

impl GlobalArgs {
    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_debug {
            config.debug = false;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(width) = self.width {
            config.width = width.max(1);
        }
        config
    }
}

/// Words of a status line
#[derive(Debug, Clone, Args)]
pub struct Words {
    /// Values to print, separated by spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Tri-state value for `mark`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkState {
    True,
    False,
    None,
}

impl From<MarkState> for Option<bool> {
    fn from(state: MarkState) -> Self {
        match state {
            MarkState::True => Some(true),
            MarkState::False => Some(false),
            MarkState::None => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a blue `%` debug line
    Debug(Words),
    /// Print a cyan `❋` message line
    Message(Words),
    /// Print a green `✓` success line
    Success(Words),
    /// Print a magenta `→` result line
    #[command(name = "result")]
    ResultLine(Words),
    /// Print a red `!` error line
    #[command(name = "error")]
    ErrorLine(Words),
    /// Print a red `!` error line and exit with status 1
    Die(Words),

    /// Print a horizontal rule
    Separator,
    /// Print text inside a box
    Heading {
        /// Heading text
        text: String,
    },

    /// Copy text to the clipboard through the terminal (OSC 52)
    Clip {
        /// Text to copy
        text: String,
    },
    /// Set the terminal window title (OSC 0)
    Title {
        /// New title
        text: String,
    },

    /// Indent text by two spaces, reading stdin when no text is given
    Indent {
        /// Text to indent
        text: Option<String>,
    },
    /// Pretty-print JSON, reading stdin when no document is given
    Dump {
        /// JSON document
        json: Option<String>,
    },
    /// Print a bulleted list
    Bullets {
        /// List items
        items: Vec<String>,
    },
    /// Print keys and values with aligned keys
    Map {
        /// Entries as KEY=VALUE
        #[arg(value_parser = parse_key_value, value_name = "KEY=VALUE")]
        entries: Vec<(String, String)>,
    },

    /// Print the check/cross/empty-set glyph
    Mark {
        #[arg(value_enum)]
        state: MarkState,
    },
    /// Abbreviate the home directory in a path as `~`
    Tilde {
        /// Path to abbreviate
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))
}
