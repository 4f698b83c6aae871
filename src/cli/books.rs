use clap::{Args, Subcommand};

use crate::catalog::verses::{DirectoryStore, VerseStore};
use crate::cli::{GlobalOptions, OutputFormat};

#[derive(Args)]
pub struct BooksArgs {
    #[command(subcommand)]
    pub command: BooksCommands,
}

#[derive(Subcommand)]
pub enum BooksCommands {
    /// List all books in the registry
    List,

    /// List the chapters of a book present in the verse store
    Chapters {
        /// Book name (aliases and "3[1] Kings" numbering accepted)
        #[arg(required = true)]
        book: String,
    },
}

pub fn run(args: BooksArgs, global: &GlobalOptions) -> anyhow::Result<()> {
    match args.command {
        BooksCommands::List => run_list(global),
        BooksCommands::Chapters { book } => run_chapters(&book, global),
    }
}

fn run_list(global: &GlobalOptions) -> anyhow::Result<()> {
    let registry = global.load_registry()?;

    match global.format {
        OutputFormat::Text => {
            println!("{:<22} {:<8} Store key", "Book", "Code");
            println!("{}", "-".repeat(50));
            for book in &registry.books {
                println!("{:<22} {:<8} {}", book.name, book.code, book.store_key);
            }
            println!("\nTotal: {} books", registry.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&registry.books)?);
        }
        OutputFormat::Tsv => {
            println!("name\tcode\tstore_key\taliases");
            for book in &registry.books {
                println!(
                    "{}\t{}\t{}\t{}",
                    book.name,
                    book.code,
                    book.store_key,
                    book.aliases.join(",")
                );
            }
        }
    }

    Ok(())
}

fn run_chapters(name: &str, global: &GlobalOptions) -> anyhow::Result<()> {
    let registry = global.load_registry()?;
    let book = registry.resolve(name)?;
    let store = DirectoryStore::new(global.paths().store_dir);
    let chapters = store.chapters(&book.store_key)?;

    match global.format {
        OutputFormat::Text => {
            let list: Vec<String> = chapters.iter().map(ToString::to_string).collect();
            println!("{} ({} chapters)", book.name, chapters.len());
            println!("{}", list.join(" "));
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "book": book.name,
                "store_key": book.store_key,
                "chapters": chapters,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("book\tchapter");
            for chapter in &chapters {
                println!("{}\t{chapter}", book.name);
            }
        }
    }

    Ok(())
}
