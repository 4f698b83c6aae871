use crate::cli::OutputFormat;
use crate::core::passage::{ResolvedPassage, VerseLine};
use crate::resolution::batch::ReadingResult;

/// Print passages in citation order, in the requested format
pub fn print_results(results: &[ReadingResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_results(results),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results_json(results))?);
        }
        OutputFormat::Tsv => print_tsv_results(results),
    }
    Ok(())
}

fn print_text_results(results: &[ReadingResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match &result.outcome {
            Ok(passage) => print_text_passage(passage, spans_chapters(result)),
            Err(e) => println!("{}: {e}", result.citation),
        }
    }
}

fn print_text_passage(passage: &ResolvedPassage, qualify_chapter: bool) {
    println!("{}", passage.header);
    for line in &passage.lines {
        if qualify_chapter {
            println!("{}:{}", line.chapter, line);
        } else {
            println!("{line}");
        }
    }
}

fn spans_chapters(result: &ReadingResult) -> bool {
    result
        .reference
        .as_ref()
        .is_some_and(crate::core::reference::CanonicalReference::spans_chapters)
}

/// JSON form of a batch: one object per result
pub fn results_json(results: &[ReadingResult]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = results
        .iter()
        .map(|result| match &result.outcome {
            Ok(passage) => serde_json::json!({
                "citation": result.citation,
                "reference": result.reference,
                "status": "ok",
                "header": passage.header,
                "lines": passage.lines.iter().map(line_json).collect::<Vec<_>>(),
            }),
            Err(e) => serde_json::json!({
                "citation": result.citation,
                "reference": result.reference,
                "status": e.kind(),
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::Value::Array(items)
}

fn line_json(line: &VerseLine) -> serde_json::Value {
    serde_json::json!({
        "chapter": line.chapter,
        "verse": line.verse,
        "text": line.text,
        "found": line.text.is_some(),
    })
}

fn print_tsv_results(results: &[ReadingResult]) {
    println!("citation\theader\tchapter\tverse\tstatus\ttext");
    for result in results {
        match &result.outcome {
            Ok(passage) => {
                for line in &passage.lines {
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        result.citation,
                        passage.header,
                        line.chapter,
                        line.verse,
                        if line.text.is_some() { "ok" } else { "verse_not_found" },
                        line.text.as_deref().unwrap_or(""),
                    );
                }
            }
            Err(e) => {
                let header = result
                    .reference
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                println!(
                    "{}\t{}\t\t\t{}\t{}",
                    result.citation,
                    header,
                    e.kind(),
                    e
                );
            }
        }
    }
}
