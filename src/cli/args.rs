//! Command argument structures

use clap::Args;

/// Arguments for the tracks command.
#[derive(Args, Debug)]
pub struct TracksArgs {
    /// Case-insensitive substring filter on the label
    #[arg(long, short = 'Q')]
    pub query: Option<String>,

    /// Maximum number of labels to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Track label ("name - artists")
    pub label: String,
}

/// Arguments for the similar command.
#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Track label ("name - artists")
    pub label: String,

    /// Number of similar tracks (default from config, 4)
    #[arg(long = "neighbors", short = 'k')]
    pub neighbors: Option<usize>,
}

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Track label ("name - artists")
    pub label: String,

    /// Number of similar tracks (default from config, 4)
    #[arg(long = "neighbors", short = 'k')]
    pub neighbors: Option<usize>,
}
