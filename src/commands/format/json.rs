//! JSON builders

use serde_json::{json, Value};
use trackscope_core::classifier::Prediction;
use trackscope_core::profile::SonicProfile;
use trackscope_core::similarity::Neighbor;
use trackscope_core::track::Track;

/// Identity of a track: label, name, artists and dataset genre
pub fn track_json(track: &Track) -> Value {
    json!({
        "label": track.label,
        "name": track.name,
        "artists": track.artists,
        "original_genre": track.genre,
    })
}

pub fn prediction_json(prediction: &Prediction) -> Value {
    json!({
        "genre": prediction.genre,
        "confidence": prediction.probabilities.get(prediction.genre),
        "probabilities": prediction.probabilities,
    })
}

/// Raw values, radar axes and formatted metrics
pub fn profile_json(profile: &SonicProfile) -> Value {
    let radar: serde_json::Map<String, Value> = profile
        .radar()
        .iter()
        .map(|(axis, value)| (axis.to_string(), json!(value)))
        .collect();

    json!({
        "values": profile,
        "radar": radar,
        "metrics": profile.metrics(),
    })
}

pub fn neighbors_json(neighbors: &[Neighbor<'_>]) -> Value {
    neighbors
        .iter()
        .enumerate()
        .map(|(rank, neighbor)| {
            let mut entry = track_json(neighbor.track);
            if let Some(obj) = entry.as_object_mut() {
                obj.insert("rank".to_string(), json!(rank + 1));
                obj.insert("row".to_string(), json!(neighbor.index));
                obj.insert("energy".to_string(), json!(neighbor.track.energy()));
                obj.insert("tempo".to_string(), json!(neighbor.track.tempo()));
                obj.insert("distance".to_string(), json!(neighbor.distance));
            }
            entry
        })
        .collect()
}
