//! volant-tour: a walk through the library's stdout helpers.
//!
//! Each stop calls the free functions and macros the way a program linking
//! `volant` would, so their output can be checked from the outside.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Stop {
    /// One line from each status macro
    Status,
    /// Status macros without arguments
    Empty,
    /// Arguments of several `Display` types
    Mixed,
    /// Rule, heading, indent, dumps, bullets, map and escapes
    Layout,
    /// A message, then `die!`
    Die,
    /// Wait for stdin to close, then write to a stdout nobody reads
    Closed,
}

/// Walk through volant's stdout helpers
#[derive(Debug, Parser)]
#[command(name = "volant-tour", version, about, long_about = None)]
struct Tour {
    #[arg(value_enum)]
    stop: Stop,
}

#[derive(Serialize)]
struct Release {
    name: &'static str,
    downloads: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    match Tour::parse().stop {
        Stop::Status => {
            volant::debug!("An elephant never forgets.");
            volant::message!("The sleeping fox catches no poultry.");
            volant::success!("From downtown!");
            volant::result!("Upgrade complete.");
            volant::error!("Dave, my mind is going.");
        }
        Stop::Empty => {
            volant::debug!();
            volant::success!();
        }
        Stop::Mixed => {
            volant::result!("took", 3, 'm', 2.5, true, String::from("total"));
        }
        Stop::Layout => {
            volant::separator();
            volant::heading("Tour");
            volant::indent("strip \n\n me");
            volant::dump(vec![1_000_000, 2]);
            volant::dump_serialize(&Release {
                name: "volant",
                downloads: 12_000,
            });
            volant::bullets((0..3).map(|n| n * n));
            volant::map([("crate", "volant"), ("v", "0.1.0")]);
            volant::clip("hi");
            volant::title("tour");
        }
        Stop::Die => {
            volant::message!("last words");
            volant::die!("fatal", 1);
        }
        Stop::Closed => {
            io::read_to_string(io::stdin())?;
            volant::message!("unheard");
            volant::separator();
        }
    }
    Ok(())
}
