//! Exact nearest-neighbor index over standardized feature rows

use std::time::Instant;

use ndarray::{Array1, Array2};
use tracing::debug;

use super::{Query, ShortfallPolicy};
use crate::dataset::Dataset;
use crate::error::{Result, TrackscopeError};
use crate::features::{derive_matrix, FeatureSet};
use crate::scaler::StandardScaler;
use crate::trace_time;

/// Standardized feature matrix for one dataset, fitted once and read-only after
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    set: FeatureSet,
    scaler: StandardScaler,
    raw: Array2<f64>,
    points: Array2<f64>,
}

impl NeighborIndex {
    /// Fit on the widest feature set the dataset supports
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let set = FeatureSet::resolve(dataset.columns())?;
        Self::fit_with(dataset, set)
    }

    /// Fit on an explicit feature set
    pub fn fit_with(dataset: &Dataset, set: FeatureSet) -> Result<Self> {
        let start = Instant::now();

        let raw = derive_matrix(dataset, set)?;
        let scaler = if dataset.is_empty() {
            StandardScaler::from_parts(vec![0.0; set.len()], vec![1.0; set.len()])?
        } else {
            StandardScaler::fit(&raw)?
        };
        let points = scaler.transform(&raw)?;

        debug!(rows = points.nrows(), %set, "fit_neighbor_index");
        trace_time!(start, "fit_neighbor_index");

        Ok(NeighborIndex {
            set,
            scaler,
            raw,
            points,
        })
    }

    pub fn set(&self) -> FeatureSet {
        self.set
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Row indices and distances of the `k` rows closest to `query`.
    ///
    /// The query's own row never appears. Ties keep dataset order.
    pub fn search(
        &self,
        query: &Query,
        k: usize,
        policy: ShortfallPolicy,
    ) -> Result<Vec<(usize, f64)>> {
        let (row, exclude) = self.resolve(query)?;
        let target = self.scaler.transform_row(row.view())?;

        let mut ranked: Vec<(usize, f64)> = self
            .points
            .rows()
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != exclude)
            .map(|(idx, point)| {
                let distance = (&point - &target).mapv(|d| d * d).sum().sqrt();
                (idx, distance)
            })
            .collect();

        let available = ranked.len();
        if k > available && policy == ShortfallPolicy::Error {
            return Err(TrackscopeError::InsufficientData {
                requested: k,
                available,
            });
        }

        // sort_by is stable: equal distances stay in row order
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(k);

        debug!(
            requested = k,
            returned = ranked.len(),
            excluded = ?exclude,
            "neighbor_search"
        );

        Ok(ranked)
    }

    /// Raw query row in index column order, plus the dataset row to exclude
    fn resolve(&self, query: &Query) -> Result<(Array1<f64>, Option<usize>)> {
        match query {
            Query::Row(idx) => {
                if *idx >= self.raw.nrows() {
                    return Err(TrackscopeError::invalid_value(
                        "query row",
                        format!("{} (dataset has {} rows)", idx, self.raw.nrows()),
                    ));
                }
                Ok((self.raw.row(*idx).to_owned(), Some(*idx)))
            }
            Query::Features(vector) => {
                let mut values = Vec::with_capacity(self.set.len());
                let mut missing = Vec::new();
                for column in self.set.columns() {
                    match vector.get(*column) {
                        Some(value) => values.push(value),
                        None => missing.push(column.name()),
                    }
                }
                if !missing.is_empty() {
                    return Err(TrackscopeError::missing_columns(missing));
                }

                let row = Array1::from_vec(values);
                let exclude = self
                    .raw
                    .rows()
                    .into_iter()
                    .position(|candidate| candidate == row);
                Ok((row, exclude))
            }
        }
    }
}
