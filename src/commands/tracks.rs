//! `trackscope tracks` - list track labels
//!
//! Labels are unique and in dataset order; `--query` filters by a
//! case-insensitive substring.

use serde_json::json;
use trackscope_core::dataset::Dataset;
use trackscope_core::error::Result;
use trackscope_core::records::escape_quotes;

use crate::cli::Cli;
use crate::commands::format::print_records_header;
use crate::output_by_format_result;

/// Execute the tracks command
pub fn execute(
    cli: &Cli,
    dataset: &Dataset,
    query: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let mut labels = match query {
        Some(query) => dataset.search_labels(query),
        None => dataset.labels(),
    };
    let total = labels.len();
    if let Some(limit) = limit {
        labels.truncate(limit);
    }

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "dataset": dataset.source().map(|p| p.display().to_string()),
                "total": total,
                "tracks": labels,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            output_human(cli, &labels, total)
        },
        records => {
            print_records_header(
                "tracks",
                &[
                    ("count", labels.len().to_string()),
                    ("total", total.to_string()),
                ],
            );
            for label in &labels {
                println!("T \"{}\"", escape_quotes(label));
            }
        }
    )
}

fn output_human(cli: &Cli, labels: &[&str], total: usize) {
    if labels.is_empty() {
        if !cli.quiet {
            println!("No tracks found");
        }
        return;
    }

    for label in labels {
        println!("{}", label);
    }
    if labels.len() < total && !cli.quiet {
        println!("({} of {} tracks shown)", labels.len(), total);
    }
}
