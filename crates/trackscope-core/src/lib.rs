//! Trackscope Core Library
//!
//! Core domain logic for trackscope: loading the reference dataset and the
//! genre model, deriving audio features, predicting genres and finding
//! acoustically similar tracks.

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod format;
pub mod logging;
pub mod profile;
pub mod records;
pub mod resources;
pub mod scaler;
pub mod similarity;
pub mod track;
