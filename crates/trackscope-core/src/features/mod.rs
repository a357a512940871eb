//! Feature derivation: raw audio columns plus three synthetic features
//!
//! Every consumer (scaler, neighbor index, classifier) addresses values by
//! [`FeatureColumn`]; positional order is an internal detail of this module.

mod column;

pub use column::{FeatureColumn, FeatureSet};

use ndarray::Array2;

use crate::dataset::Dataset;
use crate::error::{Result, TrackscopeError};
use crate::track::{AudioColumn, Track};

/// Ordered feature values for one track, tagged with the set they follow
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    set: FeatureSet,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector from values already in `set` order
    pub fn new(set: FeatureSet, values: Vec<f64>) -> Result<Self> {
        if values.len() != set.len() {
            return Err(TrackscopeError::invalid_value(
                "feature vector length",
                format!("{} (expected {} for {} set)", values.len(), set.len(), set),
            ));
        }
        Ok(FeatureVector { set, values })
    }

    pub fn set(&self) -> FeatureSet {
        self.set
    }

    /// Value of a named feature, if this vector's set carries it
    pub fn get(&self, column: FeatureColumn) -> Option<f64> {
        self.set
            .position(column)
            .map(|position| self.values[position])
    }

    /// (column, value) pairs in set order
    pub fn named(&self) -> impl Iterator<Item = (FeatureColumn, f64)> + '_ {
        self.set
            .columns()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Derive the feature vector of one track for the given set.
pub fn derive(track: &Track, set: FeatureSet) -> Result<FeatureVector> {
    let missing: Vec<&str> = set
        .raw_columns()
        .filter(|column| track.get(*column).is_none())
        .map(AudioColumn::name)
        .collect();
    if !missing.is_empty() {
        return Err(TrackscopeError::missing_columns(missing));
    }

    let mut values = Vec::with_capacity(set.len());
    for column in set.columns() {
        let value = compute(track, *column)?;
        if !value.is_finite() {
            return Err(TrackscopeError::invalid_feature(
                &track.label,
                column.name(),
                format!("non-finite value {}", value),
            ));
        }
        values.push(value);
    }

    Ok(FeatureVector { set, values })
}

/// Derive the feature matrix (one row per track, dataset order).
pub fn derive_matrix(dataset: &Dataset, set: FeatureSet) -> Result<Array2<f64>> {
    let mut flat = Vec::with_capacity(dataset.len() * set.len());
    for track in dataset.tracks() {
        flat.extend(derive(track, set)?.values);
    }
    Array2::from_shape_vec((dataset.len(), set.len()), flat)
        .map_err(|e| TrackscopeError::failed("assemble feature matrix", e))
}

fn raw(track: &Track, column: AudioColumn) -> Result<f64> {
    track
        .get(column)
        .ok_or_else(|| TrackscopeError::missing_columns([column.name()]))
}

fn compute(track: &Track, column: FeatureColumn) -> Result<f64> {
    match column {
        FeatureColumn::Raw(audio) => raw(track, audio),
        FeatureColumn::Intensity => {
            Ok(raw(track, AudioColumn::Energy)? * raw(track, AudioColumn::Loudness)?)
        }
        FeatureColumn::DanceTempo => {
            let tempo = raw(track, AudioColumn::Tempo)?;
            let denominator = tempo + 1.0;
            if denominator == 0.0 {
                return Err(TrackscopeError::invalid_feature(
                    &track.label,
                    column.name(),
                    "tempo of -1 makes the denominator zero",
                ));
            }
            Ok(raw(track, AudioColumn::Danceability)? / denominator)
        }
        FeatureColumn::ChillFactor => {
            Ok(raw(track, AudioColumn::Valence)? - raw(track, AudioColumn::Energy)?)
        }
    }
}
