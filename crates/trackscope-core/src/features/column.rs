//! Named feature columns and the two column sets the engine understands

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TrackscopeError};
use crate::track::AudioColumn;

/// A model input column: a raw audio column or one of the derived features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    Raw(AudioColumn),
    /// energy × loudness
    Intensity,
    /// danceability / (tempo + 1)
    DanceTempo,
    /// valence − energy
    ChillFactor,
}

const FULL_COLUMNS: [FeatureColumn; 17] = [
    FeatureColumn::Raw(AudioColumn::Popularity),
    FeatureColumn::Raw(AudioColumn::DurationMs),
    FeatureColumn::Raw(AudioColumn::Danceability),
    FeatureColumn::Raw(AudioColumn::Energy),
    FeatureColumn::Raw(AudioColumn::Key),
    FeatureColumn::Raw(AudioColumn::Loudness),
    FeatureColumn::Raw(AudioColumn::Mode),
    FeatureColumn::Raw(AudioColumn::Speechiness),
    FeatureColumn::Raw(AudioColumn::Acousticness),
    FeatureColumn::Raw(AudioColumn::Instrumentalness),
    FeatureColumn::Raw(AudioColumn::Liveness),
    FeatureColumn::Raw(AudioColumn::Valence),
    FeatureColumn::Raw(AudioColumn::Tempo),
    FeatureColumn::Raw(AudioColumn::TimeSignature),
    FeatureColumn::Intensity,
    FeatureColumn::DanceTempo,
    FeatureColumn::ChillFactor,
];

const BASIC_COLUMNS: [FeatureColumn; 6] = [
    FeatureColumn::Raw(AudioColumn::Energy),
    FeatureColumn::Raw(AudioColumn::Danceability),
    FeatureColumn::Raw(AudioColumn::Acousticness),
    FeatureColumn::Raw(AudioColumn::Valence),
    FeatureColumn::Raw(AudioColumn::Tempo),
    FeatureColumn::Raw(AudioColumn::Loudness),
];

impl FeatureColumn {
    /// Column name as the classifier artifact spells it
    pub fn name(self) -> &'static str {
        match self {
            FeatureColumn::Raw(column) => column.name(),
            FeatureColumn::Intensity => "intensity",
            FeatureColumn::DanceTempo => "dance_tempo",
            FeatureColumn::ChillFactor => "chill_factor",
        }
    }

    pub fn is_derived(self) -> bool {
        !matches!(self, FeatureColumn::Raw(_))
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureColumn {
    type Err = TrackscopeError;

    fn from_str(s: &str) -> Result<Self> {
        FULL_COLUMNS
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| TrackscopeError::invalid_value("feature column", s))
    }
}

/// Column set used for standardization and neighbor search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSet {
    /// 14 raw columns + intensity, dance_tempo, chill_factor
    Full,
    /// energy, danceability, acousticness, valence, tempo, loudness
    Basic,
}

impl FeatureSet {
    pub fn columns(self) -> &'static [FeatureColumn] {
        match self {
            FeatureSet::Full => &FULL_COLUMNS,
            FeatureSet::Basic => &BASIC_COLUMNS,
        }
    }

    pub fn len(self) -> usize {
        self.columns().len()
    }

    pub fn is_empty(self) -> bool {
        self.columns().is_empty()
    }

    pub fn position(self, column: FeatureColumn) -> Option<usize> {
        self.columns().iter().position(|c| *c == column)
    }

    /// Raw dataset columns needed to compute every column of this set
    pub fn raw_columns(self) -> impl Iterator<Item = AudioColumn> {
        let required: &'static [AudioColumn] = match self {
            FeatureSet::Full => &AudioColumn::ALL,
            FeatureSet::Basic => &[
                AudioColumn::Energy,
                AudioColumn::Danceability,
                AudioColumn::Acousticness,
                AudioColumn::Valence,
                AudioColumn::Tempo,
                AudioColumn::Loudness,
            ],
        };
        required.iter().copied()
    }

    /// Pick the widest set the available columns support.
    ///
    /// Falls back from `Full` to `Basic`; when neither fits, the error names
    /// the columns the full set is missing.
    pub fn resolve(available: &BTreeSet<AudioColumn>) -> Result<FeatureSet> {
        let missing_full: Vec<&str> = FeatureSet::Full
            .raw_columns()
            .filter(|column| !available.contains(column))
            .map(AudioColumn::name)
            .collect();
        if missing_full.is_empty() {
            return Ok(FeatureSet::Full);
        }

        if FeatureSet::Basic
            .raw_columns()
            .all(|column| available.contains(&column))
        {
            debug!(missing = ?missing_full, "feature_set_fallback_basic");
            return Ok(FeatureSet::Basic);
        }

        Err(TrackscopeError::missing_columns(missing_full))
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSet::Full => write!(f, "full"),
            FeatureSet::Basic => write!(f, "basic"),
        }
    }
}
