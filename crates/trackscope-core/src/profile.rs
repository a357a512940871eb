//! Sonic profile of a single track: radar axes, key metrics and a short
//! explanation of the predicted genre

use serde::Serialize;

use crate::classifier::Genre;
use crate::error::{Result, TrackscopeError};
use crate::track::{AudioColumn, Track};

/// Audio values behind the profile view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SonicProfile {
    pub energy: f64,
    pub danceability: f64,
    pub acousticness: f64,
    pub valence: f64,
    pub instrumentalness: f64,
    /// dB
    pub loudness: f64,
    /// BPM
    pub tempo: f64,
}

/// One formatted metric line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
    pub display: String,
}

impl SonicProfile {
    /// Collect the profile columns from a track
    pub fn of(track: &Track) -> Result<Self> {
        const NEEDED: [AudioColumn; 7] = [
            AudioColumn::Energy,
            AudioColumn::Danceability,
            AudioColumn::Acousticness,
            AudioColumn::Valence,
            AudioColumn::Instrumentalness,
            AudioColumn::Loudness,
            AudioColumn::Tempo,
        ];
        let missing: Vec<&str> = NEEDED
            .into_iter()
            .filter(|column| track.get(*column).is_none())
            .map(AudioColumn::name)
            .collect();
        if !missing.is_empty() {
            return Err(TrackscopeError::missing_columns(missing));
        }

        let value = |column| track.get(column).unwrap_or_default();
        Ok(SonicProfile {
            energy: value(AudioColumn::Energy),
            danceability: value(AudioColumn::Danceability),
            acousticness: value(AudioColumn::Acousticness),
            valence: value(AudioColumn::Valence),
            instrumentalness: value(AudioColumn::Instrumentalness),
            loudness: value(AudioColumn::Loudness),
            tempo: value(AudioColumn::Tempo),
        })
    }

    /// Radar axes, all on a 0..1 scale
    pub fn radar(&self) -> [(&'static str, f64); 5] {
        [
            ("Energy", self.energy),
            ("Danceability", self.danceability),
            ("Acousticness", self.acousticness),
            ("Valence", self.valence),
            ("Instrumentalness", self.instrumentalness),
        ]
    }

    /// Key metrics in display order: intensity, rhythm, style
    pub fn metrics(&self) -> Vec<Metric> {
        let metric = |name, value, display| Metric {
            name,
            value,
            display,
        };
        vec![
            metric("Energy", self.energy, format!("{:.2}", self.energy)),
            metric("Loudness", self.loudness, format!("{:.1} dB", self.loudness)),
            metric(
                "Danceability",
                self.danceability,
                format!("{:.2}", self.danceability),
            ),
            metric("Tempo", self.tempo, format!("{:.0} BPM", self.tempo)),
            metric(
                "Instrumentalness",
                self.instrumentalness,
                format!("{:.2}", self.instrumentalness),
            ),
            metric("Valence", self.valence, format!("{:.2}", self.valence)),
        ]
    }

    /// One sentence on what drove the predicted genre
    pub fn insight(&self, genre: Genre) -> String {
        match genre {
            Genre::Classical => format!(
                "Very high instrumentalness ({:.2}): with no voice detected, vocal genres such as Acoustic or Rock are ruled out.",
                self.instrumentalness
            ),
            Genre::HardRock => format!(
                "High loudness ({:.1} dB) and energy define this genre and set it apart from Acoustic.",
                self.loudness
            ),
            Genre::Acoustic => "Unlike Classical, instrumentalness is low (there is a voice), but energy is not high enough for Rock.".to_string(),
            Genre::Dance => format!(
                "The mix of danceability ({:.2}) and energy places this track in the {} cluster.",
                self.danceability, genre
            ),
        }
    }
}
