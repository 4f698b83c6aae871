use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod config;
mod core;
mod parsing;
mod resolution;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.global.verbose {
        EnvFilter::new("orthofetch=debug,info")
    } else {
        EnvFilter::new("orthofetch=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Read(args) => {
            cli::read::run(args, &cli.global)?;
        }
        cli::Commands::Readings(args) => {
            cli::read::run_readings(args, &cli.global)?;
        }
        cli::Commands::Today(args) => {
            cli::today::run(args, &cli.global)?;
        }
        cli::Commands::Books(args) => {
            cli::books::run(args, &cli.global)?;
        }
    }

    Ok(())
}
