//! Command-line interface for orthofetch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **read**: Resolve one citation (or comma-joined series) to verse text
//! - **readings**: Resolve a whole readings field, bullets and composites included
//! - **today**: Show the calendar entry for a day, optionally with reading text
//! - **books**: List registry books or the chapters present in the verse store
//!
//! ## Usage
//!
//! ```text
//! # One citation
//! orthofetch read "Job 2:13-4:3"
//!
//! # Locator only, book given separately
//! orthofetch read "3:1-8, 10" --book Genesis
//!
//! # A calendar readings field
//! orthofetch readings "Composite 1 - Genesis 3:1-8 • Psalms 1:1-2; John 1:1"
//!
//! # Today's calendar entry with the reading text
//! orthofetch today --text
//!
//! # JSON output for scripting
//! orthofetch read "3[1] Kings 2.6-14" --format json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::registry::BookRegistry;
use crate::config::DataPaths;

pub mod books;
pub mod output;
pub mod read;
pub mod today;

#[derive(Parser)]
#[command(name = "orthofetch")]
#[command(version)]
#[command(about = "Resolve liturgical scripture citations and show the daily readings")]
#[command(
    long_about = "orthofetch turns lectionary citations such as \"Job 2:13-4:3\" or \"3[1] Kings 2.6-14\" into verse text.\n\nIt understands:\n- Single verses, verse ranges and ranges across chapters\n- Comma-joined series that carry book and chapter forward\n- Composite readings and bullet-separated reading lists\n- Alternate Kings/Samuel numbering"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single citation to verse text
    Read(read::ReadArgs),

    /// Resolve every citation in a readings field
    Readings(read::ReadingsArgs),

    /// Show the calendar entry for today (or another day)
    Today(today::TodayArgs),

    /// Inspect the book registry and verse store
    Books(books::BooksArgs),
}

/// Options shared by every command
#[derive(clap::Args, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding per-book verse files
    #[arg(long, global = true, env = "ORTHOFETCH_STORE")]
    pub store: Option<PathBuf>,

    /// Calendar file
    #[arg(long, global = true, env = "ORTHOFETCH_CALENDAR")]
    pub calendar: Option<PathBuf>,

    /// Path to custom book registry file
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn paths(&self) -> DataPaths {
        DataPaths::resolve(self.store.clone(), self.calendar.clone())
    }

    /// Load the custom registry if one was given, else the embedded one
    pub fn load_registry(&self) -> anyhow::Result<BookRegistry> {
        match &self.registry {
            Some(path) => BookRegistry::load_from_file(path)
                .with_context(|| format!("loading book registry {}", path.display())),
            None => Ok(BookRegistry::load_embedded()?),
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
