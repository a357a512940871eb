//! `trackscope show` - profile and predicted genre of one track

use serde_json::json;
use trackscope_core::classifier::classify;
use trackscope_core::error::Result;
use trackscope_core::profile::SonicProfile;
use trackscope_core::records::escape_quotes;
use trackscope_core::resources::Resources;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::format::{
    prediction_json, print_prediction_human, print_prediction_records, print_profile_human,
    print_profile_records, print_records_header, print_track_record, profile_json, track_json,
};
use crate::output_by_format_result;

/// Execute the show command
pub fn execute(cli: &Cli, resources: &Resources, label: &str) -> Result<()> {
    let (row, track) = resources.dataset.dataset().find_by_label(label)?;
    let profile = SonicProfile::of(track)?;
    let prediction = classify(&resources.model, track)?;
    debug!(row, genre = %prediction.genre, "show_track");

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "track": track_json(track),
                "prediction": prediction_json(&prediction),
                "profile": profile_json(&profile),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            print_prediction_human(track, &prediction);
            print_profile_human(&profile);
        },
        records => {
            print_records_header("show", &[("label", format!("\"{}\"", escape_quotes(label)))]);
            print_track_record(track);
            print_prediction_records(&prediction);
            print_profile_records(&profile);
        }
    )
}
