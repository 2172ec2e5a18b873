//! Status line subcommands.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;

use volant::{Console, Level};

fn as_args(words: &[String]) -> Vec<&dyn Display> {
    words.iter().map(|w| w as &dyn Display).collect()
}

pub fn handle<W: Write>(console: &mut Console<W>, level: Level, words: &[String]) -> Result<()> {
    console.status(level, &as_args(words))?;
    Ok(())
}

/// Exits the process, so it is excluded from coverage.
#[cfg(not(tarpaulin_include))]
pub fn handle_die<W: Write>(console: &mut Console<W>, words: &[String]) -> ! {
    console.die(&as_args(words))
}
