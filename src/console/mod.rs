//! Writer-backed console output.
//!
//! Every helper is split into a pure builder in one of the submodules and a
//! [`Console`] method that writes the built text to its writer.

pub mod decor;
pub mod layout;
pub mod osc;
pub mod status;

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use crate::config::Config;
use crate::error::Result;
use crate::pretty::Value;

pub use status::Level;

/// Console output bound to a writer and a [`Config`].
pub struct Console<W: Write> {
    out: W,
    config: Config,
}

impl Console<Stdout> {
    /// Console on standard output, configured from the environment.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Config::from_env())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self { out, config }
    }

    /// Consume the console, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write one status line at `level`.
    ///
    /// Debug lines are dropped when `config.debug` is off.
    pub fn status(&mut self, level: Level, args: &[&dyn Display]) -> Result<()> {
        if level == Level::Debug && !self.config.debug {
            return Ok(());
        }
        let line = status::line(level, args, self.config.color);
        self.write_str(&line)?;
        if self.config.flush {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn debug(&mut self, args: &[&dyn Display]) -> Result<()> {
        self.status(Level::Debug, args)
    }

    pub fn message(&mut self, args: &[&dyn Display]) -> Result<()> {
        self.status(Level::Message, args)
    }

    pub fn success(&mut self, args: &[&dyn Display]) -> Result<()> {
        self.status(Level::Success, args)
    }

    pub fn result(&mut self, args: &[&dyn Display]) -> Result<()> {
        self.status(Level::Result, args)
    }

    pub fn error(&mut self, args: &[&dyn Display]) -> Result<()> {
        self.status(Level::Error, args)
    }

    /// Write an error line, flush, and exit the process with status 1.
    pub fn die(&mut self, args: &[&dyn Display]) -> ! {
        let written = self
            .error(args)
            .and_then(|()| self.out.flush().map_err(Into::into));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write fatal message");
        }
        std::process::exit(1)
    }

    /// Copy `text` to the terminal's clipboard with OSC 52.
    pub fn clip(&mut self, text: &str) -> Result<()> {
        tracing::debug!(bytes = text.len(), "writing OSC 52 clipboard sequence");
        self.write_str(&osc::clipboard(text))?;
        self.out.flush()?;
        Ok(())
    }

    /// Set the terminal window title with OSC 0.
    pub fn title(&mut self, text: &str) -> Result<()> {
        tracing::debug!(title = %text, "writing OSC 0 title sequence");
        self.write_str(&osc::title(text))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn separator(&mut self) -> Result<()> {
        self.write_str(&decor::separator())
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        self.write_str(&decor::heading(text))
    }

    /// Indent the display form of `value`.
    pub fn indent(&mut self, value: &dyn Display) -> Result<()> {
        self.write_str(&layout::indent(&value.to_string()))
    }

    /// Pretty-print `value` at the configured width, indented.
    pub fn dump(&mut self, value: &Value) -> Result<()> {
        let text = layout::dump(value, self.config.width);
        self.write_str(&text)
    }

    /// [`dump`](Self::dump) any serializable value.
    pub fn dump_serialize<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = Value::from_serialize(value)?;
        self.dump(&value)
    }

    /// Write one bullet per item, as each item is produced.
    pub fn bullets<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for item in items {
            self.write_str(&layout::bullet(&item))?;
        }
        Ok(())
    }

    /// Write the tri-state glyph on its own line.
    pub fn mark(&mut self, value: Option<bool>) -> Result<()> {
        let glyph = layout::mark_with_color(value, self.config.color);
        self.write_str(&format!("{glyph}\n"))
    }

    pub fn map<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        self.write_str(&layout::map(entries))
    }
}
