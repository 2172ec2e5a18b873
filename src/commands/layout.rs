//! Decoration and dump subcommands.

use std::io::Write;

use anyhow::{Context, Result};

use volant::{Console, Value};

use super::text_or_stdin;

pub fn handle_separator<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.separator()?;
    Ok(())
}

pub fn handle_heading<W: Write>(console: &mut Console<W>, text: &str) -> Result<()> {
    console.heading(text)?;
    Ok(())
}

pub fn handle_indent<W: Write>(console: &mut Console<W>, text: Option<String>) -> Result<()> {
    let text = text_or_stdin(text)?;
    console.indent(&text)?;
    Ok(())
}

/// Parse a JSON document and dump it.
pub fn handle_dump<W: Write>(console: &mut Console<W>, json: Option<String>) -> Result<()> {
    let text = text_or_stdin(json)?;
    let document: serde_json::Value =
        serde_json::from_str(&text).context("Failed to parse JSON document")?;
    console.dump(&Value::from(document))?;
    Ok(())
}

pub fn handle_bullets<W: Write>(console: &mut Console<W>, items: &[String]) -> Result<()> {
    console.bullets(items)?;
    Ok(())
}

pub fn handle_map<W: Write>(console: &mut Console<W>, entries: &[(String, String)]) -> Result<()> {
    console.map(entries.iter().map(|(k, v)| (k, v)))?;
    Ok(())
}
