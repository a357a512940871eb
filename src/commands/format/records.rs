//! Records output helpers
//!
//! Line prefixes: `H` header, `T` track, `P` prediction, `G` genre
//! probability, `M` metric, `I` insight, `N` neighbor.

use trackscope_core::classifier::Prediction;
use trackscope_core::profile::SonicProfile;
use trackscope_core::records::{escape_quotes, fixed};
use trackscope_core::similarity::Neighbor;
use trackscope_core::track::Track;

/// Print the header line; `extra` is appended as pre-formatted `key=value` pairs
pub fn print_records_header(mode: &str, extra: &[(&str, String)]) {
    let mut line = format!("H trackscope=1 records=1 mode={}", mode);
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}

/// `T "label"` with the dataset genre when known
pub fn print_track_record(track: &Track) {
    match &track.genre {
        Some(genre) => println!(
            "T \"{}\" genre=\"{}\"",
            escape_quotes(&track.label),
            escape_quotes(genre)
        ),
        None => println!("T \"{}\"", escape_quotes(&track.label)),
    }
}

pub fn print_prediction_records(prediction: &Prediction) {
    println!(
        "P {} {}",
        prediction.genre,
        fixed(prediction.probabilities.get(prediction.genre))
    );
    for (genre, probability) in prediction.probabilities.iter() {
        println!("G {} {}", genre, fixed(probability));
    }
}

pub fn print_profile_records(profile: &SonicProfile) {
    for metric in profile.metrics() {
        println!(
            "M {} {} \"{}\"",
            metric.name,
            fixed(metric.value),
            escape_quotes(&metric.display)
        );
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(fixed).unwrap_or_else(|| "-".to_string())
}

pub fn print_neighbor_records(neighbors: &[Neighbor<'_>]) {
    for (rank, neighbor) in neighbors.iter().enumerate() {
        println!(
            "N {} {} {} \"{}\" energy={} tempo={}",
            rank + 1,
            neighbor.index,
            fixed(neighbor.distance),
            escape_quotes(&neighbor.track.label),
            optional(neighbor.track.energy()),
            optional(neighbor.track.tempo())
        );
    }
}
