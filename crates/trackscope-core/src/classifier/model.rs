use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use ndarray::ArrayView1;
use tracing::debug;

use super::artifact::{ModelArtifact, ModelData};
use super::linear::LinearModel;
use super::tree::TreeEnsemble;
use super::{assemble_input, Genre, GenreClassifier, GenreProbabilities};
use crate::error::{Result, TrackscopeError};
use crate::features::{FeatureColumn, FeatureVector};
use crate::trace_time;

#[derive(Debug)]
enum Compiled {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

#[derive(Debug)]
struct LoadedModel {
    inputs: Vec<FeatureColumn>,
    algorithm: &'static str,
    compiled: Compiled,
}

/// Shared, read-only handle to a loaded genre model
#[derive(Debug, Clone)]
pub struct ModelHandle {
    source: PathBuf,
    model: Arc<LoadedModel>,
}

impl ModelHandle {
    /// Load and validate a model artifact
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();

        if !path.is_file() {
            return Err(TrackscopeError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        let artifact = ModelArtifact::read(path)?;
        let handle = Self::from_artifact(&artifact, path)?;

        trace_time!(start, "load_model");
        Ok(handle)
    }

    /// Validate an in-memory artifact. `source` is only used in messages.
    pub fn from_artifact(artifact: &ModelArtifact, source: &Path) -> Result<Self> {
        let invalid = |reason: String| TrackscopeError::invalid_model(source, reason);

        if !artifact.classes.is_empty() {
            let expected: Vec<&str> = Genre::ALL.iter().map(|g| g.label()).collect();
            if artifact.classes != expected {
                return Err(invalid(format!(
                    "classes {:?} do not match {:?}",
                    artifact.classes, expected
                )));
            }
        }

        let inputs = resolve_inputs(&artifact.feature_names).map_err(invalid)?;
        let compiled = match &artifact.model {
            ModelData::Linear(data) => {
                Compiled::Linear(LinearModel::compile(data, inputs.len()).map_err(invalid)?)
            }
            ModelData::TreeEnsemble(data) => {
                Compiled::TreeEnsemble(TreeEnsemble::compile(data, &inputs).map_err(invalid)?)
            }
        };

        debug!(
            algorithm = artifact.model.algorithm(),
            features = inputs.len(),
            "model_ready"
        );

        Ok(ModelHandle {
            source: source.to_path_buf(),
            model: Arc::new(LoadedModel {
                inputs,
                algorithm: artifact.model.algorithm(),
                compiled,
            }),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// "linear" or "tree_ensemble"
    pub fn algorithm(&self) -> &'static str {
        self.model.algorithm
    }
}

/// Map declared names onto known feature columns, rejecting unknowns and repeats
fn resolve_inputs(names: &[String]) -> std::result::Result<Vec<FeatureColumn>, String> {
    if names.is_empty() {
        return Err("no feature names declared".to_string());
    }

    let mut seen = HashSet::new();
    let mut unknown = Vec::new();
    let mut inputs = Vec::with_capacity(names.len());
    for name in names {
        match name.parse::<FeatureColumn>() {
            Ok(column) => {
                if !seen.insert(column) {
                    return Err(format!("feature {} declared twice", name));
                }
                inputs.push(column);
            }
            Err(_) => unknown.push(name.as_str()),
        }
    }

    if unknown.is_empty() {
        Ok(inputs)
    } else {
        Err(format!("unknown feature names: {}", unknown.join(", ")))
    }
}

impl GenreClassifier for ModelHandle {
    fn feature_names(&self) -> &[FeatureColumn] {
        &self.model.inputs
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<GenreProbabilities> {
        let input = assemble_input(&self.model.inputs, features)?;
        let scores = match &self.model.compiled {
            Compiled::Linear(model) => model.scores(ArrayView1::from(&input[..]))?,
            Compiled::TreeEnsemble(model) => model.scores(&input),
        };
        Ok(GenreProbabilities::from_scores(scores))
    }
}
