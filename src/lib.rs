//! Small helpers for terminal output.
//!
//! Colorized status lines, OSC clipboard and title sequences, a horizontal
//! rule and a boxed heading, and indented pretty dumps of structured values.
//!
//! The free functions below write to standard output. They never panic: a
//! failed write is logged through `tracing` and otherwise ignored. Use a
//! [`Console`] to target another writer or to handle write errors.
//!
//! ```no_run
//! volant::heading("Release");
//! volant::success!("published", "volant", "0.1.0");
//! volant::map([("crate", "volant"), ("license", "MIT")]);
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
mod macros;
pub mod palette;
pub mod paths;
pub mod pretty;
pub mod text;

use std::fmt::Display;
use std::io::Stdout;

pub use config::Config;
pub use console::layout::mark;
pub use console::{Console, Level};
pub use error::{Error, Result};
pub use palette::Color;
pub use paths::{tilde, tilde_with_home};
pub use pretty::Value;

/// Run `op` against a console on stdout, logging any failure.
fn on_stdout<F>(what: &'static str, op: F)
where
    F: FnOnce(&mut Console<Stdout>) -> Result<()>,
{
    let mut console = Console::stdout();
    if let Err(e) = op(&mut console) {
        tracing::warn!(error = %e, op = what, "failed to write to stdout");
    }
}

/// Blue `%` line; silent when debug output is disabled.
pub fn debug(args: &[&dyn Display]) {
    on_stdout("debug", |c| c.debug(args));
}

/// Cyan `❋` line.
pub fn message(args: &[&dyn Display]) {
    on_stdout("message", |c| c.message(args));
}

/// Green `✓` line.
pub fn success(args: &[&dyn Display]) {
    on_stdout("success", |c| c.success(args));
}

/// Magenta `→` line.
pub fn result(args: &[&dyn Display]) {
    on_stdout("result", |c| c.result(args));
}

/// Red `!` line.
pub fn error(args: &[&dyn Display]) {
    on_stdout("error", |c| c.error(args));
}

/// Red `!` line, then exit with status 1.
pub fn die(args: &[&dyn Display]) -> ! {
    Console::stdout().die(args)
}

pub fn clip(text: &str) {
    on_stdout("clip", |c| c.clip(text));
}

pub fn title(text: &str) {
    on_stdout("title", |c| c.title(text));
}

pub fn separator() {
    on_stdout("separator", |c| c.separator());
}

pub fn heading(text: &str) {
    on_stdout("heading", |c| c.heading(text));
}

pub fn indent<T: Display>(value: T) {
    on_stdout("indent", |c| c.indent(&value));
}

pub fn dump<T: Into<Value>>(value: T) {
    let value = value.into();
    on_stdout("dump", |c| c.dump(&value));
}

/// Dump any `Serialize` value through its JSON data model.
pub fn dump_serialize<T: serde::Serialize + ?Sized>(value: &T) {
    on_stdout("dump", |c| c.dump_serialize(value));
}

pub fn bullets<I>(items: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    on_stdout("bullets", |c| c.bullets(items));
}

pub fn map<I, K, V>(entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    on_stdout("map", |c| c.map(entries));
}
