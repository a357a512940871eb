//! On-disk JSON layout of an exported genre model

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackscopeError};

/// Exported model: declared inputs plus algorithm-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Class labels in index order; checked against the known genres when present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Input column names in the order the model consumes them
    pub feature_names: Vec<String>,
    #[serde(flatten)]
    pub model: ModelData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum ModelData {
    /// Multinomial logistic regression
    Linear(LinearData),
    /// Gradient-boosted trees with softmax over per-class margins
    TreeEnsemble(TreeEnsembleData),
}

impl ModelData {
    pub fn algorithm(&self) -> &'static str {
        match self {
            ModelData::Linear(_) => "linear",
            ModelData::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearData {
    /// One row of weights per class
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
    /// Standardization applied to inputs before the weights, if the pipeline had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub means: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsembleData {
    #[serde(default = "default_base_score")]
    pub base_score: f64,
    pub trees: Vec<TreeData>,
}

fn default_base_score() -> f64 {
    0.5
}

/// One regression tree contributing to a single class margin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeData {
    pub class: usize,
    /// Flat node list; node 0 is the root
    pub nodes: Vec<TreeNodeData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNodeData {
    /// Go to `yes` when the feature is below `threshold`, else `no`
    Split {
        feature: String,
        threshold: f64,
        yes: usize,
        no: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing: Option<usize>,
    },
    Leaf { leaf: f64 },
}

impl ModelArtifact {
    /// Read an artifact from disk
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrackscopeError::ModelNotFound {
                path: path.to_path_buf(),
            },
            _ => TrackscopeError::invalid_model(path, e),
        })?;
        serde_json::from_str(&content).map_err(|e| TrackscopeError::invalid_model(path, e))
    }

    /// Write an artifact as pretty JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
