//! Multinomial logistic regression inference

use ndarray::{Array1, Array2, ArrayView1};

use super::artifact::LinearData;
use super::GENRE_COUNT;
use crate::error::Result;
use crate::scaler::StandardScaler;

/// Compiled linear model: class margins are `W·x + b`
#[derive(Debug, Clone)]
pub(super) struct LinearModel {
    weights: Array2<f64>,
    intercepts: Array1<f64>,
    scaler: Option<StandardScaler>,
}

impl LinearModel {
    /// Check shapes against the declared input width. Errors are reasons for
    /// `InvalidModel`.
    pub(super) fn compile(data: &LinearData, width: usize) -> std::result::Result<Self, String> {
        if data.coefficients.len() != GENRE_COUNT {
            return Err(format!(
                "expected {} coefficient rows, found {}",
                GENRE_COUNT,
                data.coefficients.len()
            ));
        }
        if data.intercepts.len() != GENRE_COUNT {
            return Err(format!(
                "expected {} intercepts, found {}",
                GENRE_COUNT,
                data.intercepts.len()
            ));
        }
        if let Some(row) = data.coefficients.iter().position(|r| r.len() != width) {
            return Err(format!(
                "coefficient row {} has {} weights for {} features",
                row,
                data.coefficients[row].len(),
                width
            ));
        }

        let flat: Vec<f64> = data.coefficients.iter().flatten().copied().collect();
        if flat.iter().chain(&data.intercepts).any(|v| !v.is_finite()) {
            return Err("non-finite weight".to_string());
        }
        let weights =
            Array2::from_shape_vec((GENRE_COUNT, width), flat).map_err(|e| e.to_string())?;

        let scaler = match (&data.means, &data.scales) {
            (Some(means), Some(scales)) => {
                if means.len() != width {
                    return Err(format!(
                        "scaler has {} columns for {} features",
                        means.len(),
                        width
                    ));
                }
                let scaler = StandardScaler::from_parts(means.clone(), scales.clone())
                    .map_err(|e| e.to_string())?;
                Some(scaler)
            }
            (None, None) => None,
            _ => return Err("means and scales must be given together".to_string()),
        };

        Ok(LinearModel {
            weights,
            intercepts: Array1::from_vec(data.intercepts.clone()),
            scaler,
        })
    }

    pub(super) fn scores(&self, input: ArrayView1<'_, f64>) -> Result<[f64; GENRE_COUNT]> {
        let x = match &self.scaler {
            Some(scaler) => scaler.transform_row(input)?,
            None => input.to_owned(),
        };
        let margins = self.weights.dot(&x) + &self.intercepts;

        let mut scores = [0.0; GENRE_COUNT];
        for (slot, margin) in scores.iter_mut().zip(margins.iter()) {
            *slot = *margin;
        }
        Ok(scores)
    }
}
