//! Process-wide inputs, loaded once and shared read-only
//!
//! Nothing here is cached globally: callers build a [`Resources`] (or the
//! individual handles) at startup and pass references to whatever needs them.

use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tracing::debug;

use crate::classifier::ModelHandle;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::similarity::{NeighborIndex, ShortfallPolicy, SimilarityEngine};
use crate::trace_time;

/// A loaded dataset and its neighbor index.
///
/// The index is fitted on first use, so a dataset whose features cannot be
/// derived still serves lookups that do not need neighbors.
#[derive(Debug, Clone)]
pub struct DatasetHandle {
    dataset: Arc<Dataset>,
    index: Arc<OnceLock<NeighborIndex>>,
}

impl DatasetHandle {
    /// Load the CSV
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_dataset(Dataset::load(path)?))
    }

    /// Wrap an already loaded dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        DatasetHandle {
            dataset: Arc::new(dataset),
            index: Arc::new(OnceLock::new()),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The fitted index. A failed fit is not cached and is retried on the
    /// next call.
    pub fn index(&self) -> Result<&NeighborIndex> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let index = NeighborIndex::fit(&self.dataset)?;
        Ok(self.index.get_or_init(|| index))
    }

    /// Similarity engine reusing this handle's index
    pub fn engine(&self, policy: ShortfallPolicy) -> SimilarityEngine<'_> {
        SimilarityEngine::new(self, policy)
    }
}

/// The model and the dataset, as a pair
#[derive(Debug, Clone)]
pub struct Resources {
    pub model: ModelHandle,
    pub dataset: DatasetHandle,
}

impl Resources {
    /// Load both inputs; either failing aborts the whole load
    pub fn load(model_path: &Path, dataset_path: &Path) -> Result<Self> {
        let start = Instant::now();

        let model = ModelHandle::load(model_path)?;
        let dataset = DatasetHandle::load(dataset_path)?;

        debug!(
            algorithm = model.algorithm(),
            tracks = dataset.dataset().len(),
            "resources_loaded"
        );
        trace_time!(start, "load_resources");

        Ok(Resources { model, dataset })
    }
}
