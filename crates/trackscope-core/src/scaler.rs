//! Per-column standardization (zero mean, unit variance)

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::{Result, TrackscopeError};

/// Scales at or below this are treated as constant columns and left unscaled
const MIN_SCALE: f64 = 10.0 * f64::EPSILON;

/// Fitted standardization parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    means: Array1<f64>,
    scales: Array1<f64>,
}

impl StandardScaler {
    /// Fit means and population standard deviations column by column.
    ///
    /// A constant column keeps scale 1.0, so it centers to zero instead of
    /// dividing by zero.
    pub fn fit(matrix: &Array2<f64>) -> Result<Self> {
        let means = matrix
            .mean_axis(Axis(0))
            .ok_or(TrackscopeError::InsufficientData {
                requested: 1,
                available: 0,
            })?;
        let scales = matrix
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s <= MIN_SCALE { 1.0 } else { s });

        Ok(StandardScaler { means, scales })
    }

    /// Rebuild a scaler from stored parameters
    pub fn from_parts(means: Vec<f64>, scales: Vec<f64>) -> Result<Self> {
        if means.len() != scales.len() {
            return Err(TrackscopeError::invalid_value(
                "scaler parameters",
                format!("{} means vs {} scales", means.len(), scales.len()),
            ));
        }
        if let Some(bad) = scales.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(TrackscopeError::invalid_value("scaler scale", bad));
        }
        Ok(StandardScaler {
            means: Array1::from_vec(means),
            scales: Array1::from_vec(scales),
        })
    }

    pub fn dim(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> ArrayView1<'_, f64> {
        self.means.view()
    }

    pub fn scales(&self) -> ArrayView1<'_, f64> {
        self.scales.view()
    }

    /// Standardize every row of a matrix
    pub fn transform(&self, matrix: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_dim(matrix.ncols())?;
        Ok((matrix - &self.means) / &self.scales)
    }

    /// Standardize a single row
    pub fn transform_row(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        self.check_dim(row.len())?;
        Ok((&row - &self.means) / &self.scales)
    }

    fn check_dim(&self, width: usize) -> Result<()> {
        if width != self.dim() {
            return Err(TrackscopeError::invalid_value(
                "feature width",
                format!("{} (scaler fitted on {})", width, self.dim()),
            ));
        }
        Ok(())
    }
}
