use std::io::{self, Read};

use clap::Args;

use crate::catalog::verses::DirectoryStore;
use crate::cli::output::print_results;
use crate::cli::GlobalOptions;
use crate::resolution::batch::BatchResolver;

#[derive(Args)]
pub struct ReadArgs {
    /// Citation, e.g. "Genesis 3:1-8, 10" (or just "3:1-8" with --book)
    #[arg(required = true)]
    pub citation: String,

    /// Book name to prefix to the citation
    #[arg(short, long)]
    pub book: Option<String>,
}

#[derive(Args)]
pub struct ReadingsArgs {
    /// Readings field as it appears in the calendar. Use '-' for stdin
    #[arg(required = true)]
    pub field: String,
}

pub fn run(args: ReadArgs, global: &GlobalOptions) -> anyhow::Result<()> {
    let citation = match &args.book {
        Some(book) => format!("{book} {}", args.citation),
        None => args.citation,
    };

    let registry = global.load_registry()?;
    let store = DirectoryStore::new(global.paths().store_dir);

    if global.verbose {
        eprintln!("Verse store: {}", store.root().display());
    }

    let batch = BatchResolver::new(&registry, &store);
    let results = batch.resolve_citation(&citation);
    print_results(&results, global.format)
}

pub fn run_readings(args: ReadingsArgs, global: &GlobalOptions) -> anyhow::Result<()> {
    let field = if args.field == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.field
    };

    if field.trim().is_empty() {
        println!("No readings today.");
        return Ok(());
    }

    let registry = global.load_registry()?;
    let store = DirectoryStore::new(global.paths().store_dir);

    if global.verbose {
        eprintln!("Verse store: {}", store.root().display());
    }

    let batch = BatchResolver::new(&registry, &store);
    let results = batch.resolve_readings(&field);
    if results.is_empty() {
        println!("No readings today.");
        return Ok(());
    }
    print_results(&results, global.format)
}
