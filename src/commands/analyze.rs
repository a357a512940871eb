//! `trackscope analyze` - full report for one track
//!
//! Profile, predicted genre with probabilities, a one-line insight and the
//! most similar tracks.

use serde_json::json;
use trackscope_core::classifier::classify;
use trackscope_core::error::Result;
use trackscope_core::profile::SonicProfile;
use trackscope_core::records::escape_quotes;
use trackscope_core::resources::Resources;
use trackscope_core::similarity::ShortfallPolicy;
use trackscope_core::trace_time;

use crate::cli::Cli;
use crate::commands::format::{
    neighbors_json, prediction_json, print_neighbor_records, print_neighbors_human,
    print_prediction_human, print_prediction_records, print_profile_human, print_profile_records,
    print_records_header, print_track_record, profile_json, track_json,
};
use crate::output_by_format_result;

/// Execute the analyze command
pub fn execute(
    cli: &Cli,
    resources: &Resources,
    label: &str,
    k: usize,
    policy: ShortfallPolicy,
) -> Result<()> {
    let start = std::time::Instant::now();

    let (_, track) = resources.dataset.dataset().find_by_label(label)?;
    let profile = SonicProfile::of(track)?;
    let prediction = classify(&resources.model, track)?;
    let insight = profile.insight(prediction.genre);
    let neighbors = resources.dataset.engine(policy).similar_to(label, k)?;

    trace_time!(start, "analyze_track", neighbors = neighbors.len());

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "track": track_json(track),
                "prediction": prediction_json(&prediction),
                "insight": insight,
                "profile": profile_json(&profile),
                "neighbors": neighbors_json(&neighbors),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            print_prediction_human(track, &prediction);
            println!();
            println!("Insight: {}", insight);
            print_profile_human(&profile);
            println!();
            println!("Similar tracks:");
            print_neighbors_human(cli, &neighbors);
        },
        records => {
            print_records_header(
                "analyze",
                &[
                    ("label", format!("\"{}\"", escape_quotes(label))),
                    ("k", k.to_string()),
                ],
            );
            print_track_record(track);
            print_prediction_records(&prediction);
            println!("I \"{}\"", escape_quotes(&insight));
            print_profile_records(&profile);
            print_neighbor_records(&neighbors);
        }
    )
}
