//! Human-readable printers

use trackscope_core::classifier::Prediction;
use trackscope_core::profile::SonicProfile;
use trackscope_core::similarity::Neighbor;
use trackscope_core::track::Track;

use crate::cli::Cli;

pub fn print_prediction_human(track: &Track, prediction: &Prediction) {
    println!("{}", track.label);
    let confidence = prediction.probabilities.get(prediction.genre) * 100.0;
    match &track.genre {
        Some(original) => println!(
            "  Predicted genre: {} ({:.1}%), dataset genre: {}",
            prediction.genre, confidence, original
        ),
        None => println!(
            "  Predicted genre: {} ({:.1}%)",
            prediction.genre, confidence
        ),
    }

    println!();
    println!("Probabilities:");
    for (genre, probability) in prediction.probabilities.iter() {
        println!("  {:<12} {:>6.1}%", genre.label(), probability * 100.0);
    }
}

pub fn print_profile_human(profile: &SonicProfile) {
    println!();
    println!("Sonic profile:");
    for (axis, value) in profile.radar() {
        println!("  {:<17} {:.2}", axis, value);
    }

    println!();
    println!("Key metrics:");
    for metric in profile.metrics() {
        println!("  {:<17} {}", metric.name, metric.display);
    }
}

pub fn print_neighbors_human(cli: &Cli, neighbors: &[Neighbor<'_>]) {
    if neighbors.is_empty() {
        if !cli.quiet {
            println!("No similar tracks found");
        }
        return;
    }

    for (rank, neighbor) in neighbors.iter().enumerate() {
        let mut details = format!("distance {:.3}", neighbor.distance);
        if let Some(energy) = neighbor.track.energy() {
            details.push_str(&format!(", energy {:.2}", energy));
        }
        if let Some(tempo) = neighbor.track.tempo() {
            details.push_str(&format!(", {:.0} BPM", tempo));
        }
        println!("{:>2}. {} ({})", rank + 1, neighbor.track.label, details);
    }
}
