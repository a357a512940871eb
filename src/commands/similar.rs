//! `trackscope similar` - tracks that sound like the given one
//!
//! Needs only the dataset; the genre model is never loaded.

use serde_json::json;
use trackscope_core::error::Result;
use trackscope_core::records::escape_quotes;
use trackscope_core::resources::DatasetHandle;
use trackscope_core::similarity::ShortfallPolicy;

use crate::cli::Cli;
use crate::commands::format::{
    neighbors_json, print_neighbor_records, print_neighbors_human, print_records_header,
};
use crate::output_by_format_result;

/// Execute the similar command
pub fn execute(
    cli: &Cli,
    handle: &DatasetHandle,
    label: &str,
    k: usize,
    policy: ShortfallPolicy,
) -> Result<()> {
    let neighbors = handle.engine(policy).similar_to(label, k)?;
    let feature_set = handle.index()?.set();

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "query": label,
                "feature_set": feature_set.to_string(),
                "neighbors": neighbors_json(&neighbors),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                println!("Tracks similar to {}:", label);
            }
            print_neighbors_human(cli, &neighbors);
        },
        records => {
            print_records_header(
                "similar",
                &[
                    ("label", format!("\"{}\"", escape_quotes(label))),
                    ("k", k.to_string()),
                    ("features", feature_set.to_string()),
                ],
            );
            print_neighbor_records(&neighbors);
        }
    )
}
