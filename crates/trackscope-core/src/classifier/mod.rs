//! Genre classification against a pre-trained model artifact
//!
//! The model is trained elsewhere and exported to JSON. This module only
//! runs inference: it assembles the model's declared input columns by name
//! from a [`FeatureVector`] and maps the class scores onto [`Genre`].

mod artifact;
mod linear;
mod model;
mod tree;

pub use artifact::{
    LinearData, ModelArtifact, ModelData, TreeData, TreeEnsembleData, TreeNodeData,
};
pub use model::ModelHandle;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, TrackscopeError};
use crate::features::{derive, FeatureColumn, FeatureSet, FeatureVector};
use crate::track::Track;

/// Number of genres the classifier distinguishes
pub const GENRE_COUNT: usize = 4;

/// Predicted genre; the discriminant is the model's class index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Acoustic = 0,
    Classical = 1,
    Dance = 2,
    HardRock = 3,
}

impl Genre {
    /// All genres in class-index order
    pub const ALL: [Genre; GENRE_COUNT] =
        [Genre::Acoustic, Genre::Classical, Genre::Dance, Genre::HardRock];

    pub fn from_index(index: usize) -> Option<Genre> {
        Genre::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Acoustic => "Acoustic",
            Genre::Classical => "Classical",
            Genre::Dance => "Dance",
            Genre::HardRock => "Hard-Rock",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = TrackscopeError;

    fn from_str(s: &str) -> Result<Self> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrackscopeError::invalid_value("genre", s))
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Probability per genre, in class-index order, summing to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreProbabilities([f64; GENRE_COUNT]);

impl GenreProbabilities {
    /// Normalize raw class scores with a softmax
    pub fn from_scores(scores: [f64; GENRE_COUNT]) -> Self {
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp = scores.map(|s| (s - max).exp());
        let total: f64 = exp.iter().sum();
        GenreProbabilities(exp.map(|e| e / total))
    }

    pub fn get(&self, genre: Genre) -> f64 {
        self.0[genre.index()]
    }

    pub fn as_array(&self) -> &[f64; GENRE_COUNT] {
        &self.0
    }

    /// (genre, probability) pairs in class-index order
    pub fn iter(&self) -> impl Iterator<Item = (Genre, f64)> + '_ {
        Genre::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Most probable genre; ties go to the lowest class index
    pub fn argmax(&self) -> Genre {
        let mut best = Genre::Acoustic;
        for (genre, p) in self.iter() {
            if p > self.get(best) {
                best = genre;
            }
        }
        best
    }
}

impl Serialize for GenreProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(GENRE_COUNT))?;
        for (genre, p) in self.iter() {
            map.serialize_entry(genre.label(), &p)?;
        }
        map.end()
    }
}

/// Inference boundary for a genre model
pub trait GenreClassifier {
    /// Input columns the model expects, in its own order
    fn feature_names(&self) -> &[FeatureColumn];

    /// Class probabilities for one feature vector
    fn predict_proba(&self, features: &FeatureVector) -> Result<GenreProbabilities>;

    /// Most probable genre for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Genre> {
        Ok(self.predict_proba(features)?.argmax())
    }
}

/// Predicted genre plus the full probability vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub genre: Genre,
    pub probabilities: GenreProbabilities,
}

/// Derive the features a classifier needs from a track and predict its genre.
pub fn classify<C: GenreClassifier + ?Sized>(classifier: &C, track: &Track) -> Result<Prediction> {
    let set = input_set(classifier.feature_names());
    let features = derive(track, set)?;
    let probabilities = classifier.predict_proba(&features)?;
    Ok(Prediction {
        genre: probabilities.argmax(),
        probabilities,
    })
}

/// Smallest feature set that covers every model input
fn input_set(names: &[FeatureColumn]) -> FeatureSet {
    if names
        .iter()
        .all(|name| FeatureSet::Basic.position(*name).is_some())
    {
        FeatureSet::Basic
    } else {
        FeatureSet::Full
    }
}

/// Model input row assembled by name from a feature vector
pub(crate) fn assemble_input(
    names: &[FeatureColumn],
    features: &FeatureVector,
) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(names.len());
    let mut missing = Vec::new();
    for name in names {
        match features.get(*name) {
            Some(value) => values.push(value),
            None => missing.push(name.name()),
        }
    }
    if !missing.is_empty() {
        return Err(TrackscopeError::missing_columns(missing));
    }
    Ok(values)
}
