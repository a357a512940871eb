//! Track records and the raw audio columns they carry

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackscopeError;

/// Column holding the track title
pub const NAME_COLUMN: &str = "name";
/// Column holding the credited artists
pub const ARTISTS_COLUMN: &str = "artists";
/// Optional column with the dataset's own genre annotation
pub const GENRE_COLUMN: &str = "music_genre";

/// Raw numeric audio attribute as found in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioColumn {
    Popularity,
    DurationMs,
    Danceability,
    Energy,
    Key,
    Loudness,
    Mode,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    TimeSignature,
}

impl AudioColumn {
    /// All raw columns, in model order
    pub const ALL: [AudioColumn; 14] = [
        AudioColumn::Popularity,
        AudioColumn::DurationMs,
        AudioColumn::Danceability,
        AudioColumn::Energy,
        AudioColumn::Key,
        AudioColumn::Loudness,
        AudioColumn::Mode,
        AudioColumn::Speechiness,
        AudioColumn::Acousticness,
        AudioColumn::Instrumentalness,
        AudioColumn::Liveness,
        AudioColumn::Valence,
        AudioColumn::Tempo,
        AudioColumn::TimeSignature,
    ];

    /// CSV header name
    pub fn name(self) -> &'static str {
        match self {
            AudioColumn::Popularity => "popularity",
            AudioColumn::DurationMs => "duration_ms",
            AudioColumn::Danceability => "danceability",
            AudioColumn::Energy => "energy",
            AudioColumn::Key => "key",
            AudioColumn::Loudness => "loudness",
            AudioColumn::Mode => "mode",
            AudioColumn::Speechiness => "speechiness",
            AudioColumn::Acousticness => "acousticness",
            AudioColumn::Instrumentalness => "instrumentalness",
            AudioColumn::Liveness => "liveness",
            AudioColumn::Valence => "valence",
            AudioColumn::Tempo => "tempo",
            AudioColumn::TimeSignature => "time_signature",
        }
    }
}

impl fmt::Display for AudioColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AudioColumn {
    type Err = TrackscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AudioColumn::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| TrackscopeError::invalid_value("audio column", s))
    }
}

/// One row of the reference dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub name: String,
    pub artists: Option<String>,
    /// Genre annotation shipped with the dataset, if any
    pub genre: Option<String>,
    /// Selection label: "name - artists", or just the name
    pub label: String,
    attributes: BTreeMap<AudioColumn, f64>,
}

impl Track {
    /// Create a track; the display label is derived from name and artists.
    pub fn new(name: impl Into<String>, artists: Option<String>) -> Self {
        let name = name.into();
        let label = display_label(&name, artists.as_deref());
        Track {
            name,
            artists,
            genre: None,
            label,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_attribute(mut self, column: AudioColumn, value: f64) -> Self {
        self.attributes.insert(column, value);
        self
    }

    pub fn set_attribute(&mut self, column: AudioColumn, value: f64) {
        self.attributes.insert(column, value);
    }

    /// Value of a raw audio column, if the dataset provides it
    pub fn get(&self, column: AudioColumn) -> Option<f64> {
        self.attributes.get(&column).copied()
    }

    /// Raw audio values present on this track
    pub fn attributes(&self) -> impl Iterator<Item = (AudioColumn, f64)> + '_ {
        self.attributes.iter().map(|(column, value)| (*column, *value))
    }

    pub fn energy(&self) -> Option<f64> {
        self.get(AudioColumn::Energy)
    }

    pub fn tempo(&self) -> Option<f64> {
        self.get(AudioColumn::Tempo)
    }
}

/// Build the selection label for a track
pub fn display_label(name: &str, artists: Option<&str>) -> String {
    match artists {
        Some(artists) => format!("{} - {}", name, artists),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_artists() {
        let track = Track::new("Blinding Lights", Some("The Weeknd".into()));
        assert_eq!(track.label, "Blinding Lights - The Weeknd");
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let track = Track::new("Clair de Lune", None);
        assert_eq!(track.label, "Clair de Lune");
    }

    #[test]
    fn test_column_names_round_trip_through_from_str() {
        for column in AudioColumn::ALL {
            assert_eq!(column.name().parse::<AudioColumn>().unwrap(), column);
        }
        assert!("intensity".parse::<AudioColumn>().is_err());
    }

    #[test]
    fn test_attribute_accessors() {
        let track = Track::new("A", Some("X".into()))
            .with_attribute(AudioColumn::Energy, 0.9)
            .with_attribute(AudioColumn::Tempo, 120.0);
        assert_eq!(track.energy(), Some(0.9));
        assert_eq!(track.tempo(), Some(120.0));
        assert_eq!(track.get(AudioColumn::Valence), None);
    }
}
