//! Output configuration.
//!
//! The output formats themselves are fixed. Configuration only toggles
//! behavior around them: whether debug lines are shown, whether escape
//! codes are emitted, flushing, and the dump width.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Default column budget for `dump`.
pub const DEFAULT_WIDTH: usize = 76;

/// Minimum accepted dump width.
const MIN_WIDTH: usize = 1;

/// Runtime switches for a [`Console`](crate::Console).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show `debug` lines. Off is the equivalent of an optimized build.
    pub debug: bool,
    /// Emit ANSI color codes around status lines.
    pub color: bool,
    /// Flush the writer after every status line.
    pub flush: bool,
    /// Column budget for `dump` (minimum: 1).
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: true,
            color: true,
            flush: false,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    ///
    /// Reads `NO_COLOR`, `VOLANT_DEBUG` and `VOLANT_WIDTH` at call time.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using the given lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        if let Some(value) = lookup("VOLANT_DEBUG") {
            match parse_flag(&value) {
                Some(flag) => self.debug = flag,
                None => tracing::warn!(value = %value, "ignoring unrecognized VOLANT_DEBUG"),
            }
        }
        if let Some(value) = lookup("VOLANT_WIDTH") {
            match value.trim().parse::<usize>() {
                Ok(width) => self.width = width.max(MIN_WIDTH),
                Err(e) => tracing::warn!(value = %value, error = %e, "ignoring invalid VOLANT_WIDTH"),
            }
        }
        self
    }

    /// Parse configuration from a TOML document. Missing keys keep defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.width = config.width.max(MIN_WIDTH);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
