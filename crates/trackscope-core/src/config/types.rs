//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::similarity::ShortfallPolicy;

/// Model artifact looked up when nothing else is configured
pub const DEFAULT_MODEL_PATH: &str = "modelo_xgboost_final.json";

/// Dataset looked up when nothing else is configured
pub const DEFAULT_DATASET_PATH: &str = "dataset/universal_top_spotify_songs.csv";

/// Similar tracks listed per query unless overridden
pub const DEFAULT_NEIGHBORS: usize = 4;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Exported genre model (JSON)
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Reference dataset (CSV)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Neighbor search settings
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Configuration for neighbor search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Default k
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,

    /// What to do when fewer than k other tracks exist
    #[serde(default)]
    pub shortfall: ShortfallPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model_path: default_model_path(),
            dataset_path: default_dataset_path(),
            recommend: RecommendConfig::default(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            neighbors: default_neighbors(),
            shortfall: ShortfallPolicy::default(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_neighbors() -> usize {
    DEFAULT_NEIGHBORS
}
