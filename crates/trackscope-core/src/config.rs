//! Configuration for trackscope
//!
//! Lookup order: an explicit `--config` file, `trackscope.toml` in the working
//! directory, then `config.toml` in the user config directory
//! (`$TRACKSCOPE_CONFIG_DIR` overrides it). With no file, defaults apply.
//! Relative paths inside a file are resolved against that file's directory.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{Result, TrackscopeError};

pub use types::{
    AppConfig, RecommendConfig, DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH, DEFAULT_NEIGHBORS,
};

/// Per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "trackscope.toml";

const CONFIG_DIR: &str = "trackscope";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
/// Overrides the user config directory
pub const CONFIG_DIR_ENV_VAR: &str = "TRACKSCOPE_CONFIG_DIR";

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.resolve_relative_to(base);
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackscopeError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no command could run with
    pub fn validate(&self) -> Result<()> {
        if self.recommend.neighbors == 0 {
            bail_invalid!("recommend.neighbors", "0 (must be at least 1)");
        }
        Ok(())
    }

    /// Find and load the configuration that applies in `cwd`.
    ///
    /// Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        Self::discover_with(explicit, cwd, global_config_path())
    }

    pub(crate) fn discover_with(
        explicit: Option<&Path>,
        cwd: &Path,
        global: Option<PathBuf>,
    ) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            if !path.is_file() {
                return Err(TrackscopeError::invalid_value(
                    "config file",
                    format!("{} does not exist", path.display()),
                ));
            }
            return Ok((Self::load(&path)?, Some(path)));
        }

        let candidates = std::iter::once(cwd.join(LOCAL_CONFIG_FILE)).chain(global);
        for candidate in candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "config_found");
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        debug!("config_defaults");
        let mut config = AppConfig::default();
        config.resolve_relative_to(cwd);
        Ok((config, None))
    }

    /// Apply `--model` / `--dataset` style overrides
    pub fn with_overrides(mut self, model: Option<PathBuf>, dataset: Option<PathBuf>) -> Self {
        if let Some(model) = model {
            self.model_path = model;
        }
        if let Some(dataset) = dataset {
            self.dataset_path = dataset;
        }
        self
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.model_path, &mut self.dataset_path] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// `config.toml` in the user config directory, if one can be determined
fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(GLOBAL_CONFIG_FILE))
}
