//! Similarity engine for finding acoustically similar tracks
//!
//! Tracks are compared by Euclidean distance between standardized feature
//! vectors. [`recommend`] fits the scaler and index on every call;
//! [`SimilarityEngine`] reuses the index fitted when the dataset was loaded.
//! Both return the same neighbors for the same inputs.

mod index;

pub use index::NeighborIndex;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::features::FeatureVector;
use crate::resources::DatasetHandle;
use crate::track::Track;

/// What to search around
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// A dataset row; that row is excluded from its own neighbors
    Row(usize),
    /// An external feature vector. The first dataset row with exactly these
    /// feature values is treated as the query itself and excluded.
    Features(FeatureVector),
}

/// Behavior when fewer than `k` neighbors exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortfallPolicy {
    /// Return every neighbor available
    #[default]
    Truncate,
    /// Fail with `InsufficientData`
    Error,
}

/// One similar track
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a> {
    /// Row index in the dataset
    pub index: usize,
    pub track: &'a Track,
    /// Euclidean distance in standardized feature space
    pub distance: f64,
}

/// Find the `k` tracks closest to `query`, fitting standardization on
/// `dataset` for this call only.
pub fn recommend<'a>(
    dataset: &'a Dataset,
    query: &Query,
    k: usize,
    policy: ShortfallPolicy,
) -> Result<Vec<Neighbor<'a>>> {
    let index = NeighborIndex::fit(dataset)?;
    collect(dataset, index.search(query, k, policy)?)
}

fn collect(dataset: &Dataset, ranked: Vec<(usize, f64)>) -> Result<Vec<Neighbor<'_>>> {
    ranked
        .into_iter()
        .map(|(index, distance)| {
            let track = dataset.get(index).ok_or_else(|| {
                crate::error::TrackscopeError::invalid_value("neighbor row", index)
            })?;
            Ok(Neighbor {
                index,
                track,
                distance,
            })
        })
        .collect()
}

/// Similarity Engine over a loaded dataset handle
pub struct SimilarityEngine<'a> {
    handle: &'a DatasetHandle,
    policy: ShortfallPolicy,
}

impl<'a> SimilarityEngine<'a> {
    /// Create a new Similarity Engine
    pub fn new(handle: &'a DatasetHandle, policy: ShortfallPolicy) -> Self {
        SimilarityEngine { handle, policy }
    }

    /// Get the `k` nearest tracks for a query
    pub fn recommend(&self, query: &Query, k: usize) -> Result<Vec<Neighbor<'a>>> {
        let ranked = self.handle.index()?.search(query, k, self.policy)?;
        collect(self.handle.dataset(), ranked)
    }

    /// Get the `k` nearest tracks for the track carrying `label`
    pub fn similar_to(&self, label: &str, k: usize) -> Result<Vec<Neighbor<'a>>> {
        let (row, _) = self.handle.dataset().find_by_label(label)?;
        self.recommend(&Query::Row(row), k)
    }
}
