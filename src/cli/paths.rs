//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Directory that relative CLI paths and `trackscope.toml` lookup start from.
///
/// Falls back to "." if the current directory cannot be determined.
pub fn working_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a path given on the command line against `base`
pub fn resolve_arg_path(base: &Path, path: Option<&PathBuf>) -> Option<PathBuf> {
    path.map(|p| if p.is_absolute() { p.clone() } else { base.join(p) })
}
