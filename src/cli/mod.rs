//! CLI argument parsing for trackscope
//!
//! Global flags: --config, --model, --dataset, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{AnalyzeArgs, ShowArgs, SimilarArgs, TracksArgs};
use parse::parse_format;
pub use trackscope_core::format::OutputFormat;

/// Trackscope - genre prediction and similar-track search for music datasets
#[derive(Parser, Debug)]
#[command(name = "trackscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./trackscope.toml, then the user config dir)
    #[arg(long, global = true, env = "TRACKSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Genre model artifact (JSON)
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Reference dataset (CSV)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "trackscope_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List track labels in the dataset
    Tracks(TracksArgs),

    /// Show a track's profile and predicted genre
    Show(ShowArgs),

    /// List tracks that sound like the given one
    Similar(SimilarArgs),

    /// Full report: profile, prediction, insight and similar tracks
    Analyze(AnalyzeArgs),
}
