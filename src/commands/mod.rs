//! Subcommand handlers.

mod layout;
mod status;
mod term;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;

use volant::cli::{Cli, Commands, GlobalArgs};
use volant::{Config, Console, Level};

/// Resolve configuration: defaults, then config file, then environment,
/// then command-line flags.
fn resolve_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
            .with_env(|key| std::env::var(key).ok()),
        None => Config::from_env(),
    };
    Ok(global.apply(config))
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli.global)?;
    tracing::debug!(?config, "resolved configuration");
    let mut console = Console::new(io::stdout().lock(), config);

    match cli.command {
        Commands::Debug(w) => status::handle(&mut console, Level::Debug, &w.words),
        Commands::Message(w) => status::handle(&mut console, Level::Message, &w.words),
        Commands::Success(w) => status::handle(&mut console, Level::Success, &w.words),
        Commands::ResultLine(w) => status::handle(&mut console, Level::Result, &w.words),
        Commands::ErrorLine(w) => status::handle(&mut console, Level::Error, &w.words),
        Commands::Die(w) => status::handle_die(&mut console, &w.words),
        Commands::Separator => layout::handle_separator(&mut console),
        Commands::Heading { text } => layout::handle_heading(&mut console, &text),
        Commands::Clip { text } => term::handle_clip(&mut console, &text),
        Commands::Title { text } => term::handle_title(&mut console, &text),
        Commands::Indent { text } => layout::handle_indent(&mut console, text),
        Commands::Dump { json } => layout::handle_dump(&mut console, json),
        Commands::Bullets { items } => layout::handle_bullets(&mut console, &items),
        Commands::Map { entries } => layout::handle_map(&mut console, &entries),
        Commands::Mark { state } => term::handle_mark(&mut console, state.into()),
        Commands::Tilde { path } => term::handle_tilde(&path),
        Commands::Completions { shell } => {
            let mut out = io::stdout();
            clap_complete::generate(shell, &mut Cli::command(), "volant", &mut out);
            out.flush()?;
            Ok(())
        }
    }
}

/// Text from the argument, or all of stdin.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}
