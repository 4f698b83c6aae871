use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Args;

use crate::catalog::verses::DirectoryStore;
use crate::cli::output::{print_results, results_json};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::parsing::calendar::{parse_calendar_file, CalendarEntry, Field};
use crate::parsing::splitter::split_readings;
use crate::resolution::batch::BatchResolver;

#[derive(Args)]
pub struct TodayArgs {
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also print the text of each reading
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: TodayArgs, global: &GlobalOptions) -> anyhow::Result<()> {
    let paths = global.paths();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let calendar = parse_calendar_file(&paths.calendar_file)
        .with_context(|| format!("loading calendar {}", paths.calendar_file.display()))?;

    if global.verbose {
        eprintln!(
            "Loaded {} calendar entries from {}",
            calendar.len(),
            paths.calendar_file.display()
        );
    }

    let Some(entry) = calendar.entry_for(date) else {
        println!("No entry for {date} in the calendar.");
        return Ok(());
    };

    let results = if args.text && !entry.readings.trim().is_empty() {
        let registry = global.load_registry()?;
        let store = DirectoryStore::new(&paths.store_dir);
        BatchResolver::new(&registry, &store).resolve_readings(&entry.readings)
    } else {
        Vec::new()
    };

    match global.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": date.to_string(),
                "entry": entry,
                "passages": results_json(&results),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            print_entry(entry, global.format);
            if args.text {
                if entry.readings.trim().is_empty() {
                    println!("\nNo readings today.");
                } else {
                    println!();
                    print_results(&results, global.format)?;
                }
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &CalendarEntry, format: OutputFormat) {
    if matches!(format, OutputFormat::Tsv) {
        println!("field\tvalue");
        for field in Field::ALL {
            println!("{}\t{}", field.label(), entry.field(field));
        }
        return;
    }

    let width = Field::ALL
        .iter()
        .map(|f| f.label().len())
        .max()
        .unwrap_or_default();

    println!("{}", entry.header);
    for field in Field::ALL {
        let label = field.label();
        if field == Field::Readings {
            let readings = split_readings(entry.field(field));
            if readings.is_empty() {
                println!("{label:<width$}");
            }
            for (i, reading) in readings.iter().enumerate() {
                let label = if i == 0 { label } else { "" };
                println!("{label:<width$} {reading}");
            }
        } else {
            println!("{label:<width$} {}", entry.field(field));
        }
    }
}
