//! Terminal control, mark and path subcommands.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use volant::Console;

pub fn handle_clip<W: Write>(console: &mut Console<W>, text: &str) -> Result<()> {
    console.clip(text)?;
    Ok(())
}

pub fn handle_title<W: Write>(console: &mut Console<W>, text: &str) -> Result<()> {
    console.title(text)?;
    Ok(())
}

pub fn handle_mark<W: Write>(console: &mut Console<W>, state: Option<bool>) -> Result<()> {
    console.mark(state)?;
    Ok(())
}

pub fn handle_tilde(path: &Path) -> Result<()> {
    println!("{}", volant::tilde(path));
    Ok(())
}
