//! Command implementations for all trackscope commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use trackscope_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use trackscope_core::bail_usage;
    use trackscope_core::config::AppConfig;

    use crate::cli::{AnalyzeArgs, ShowArgs, SimilarArgs, TracksArgs};
    use crate::commands::{analyze, show, similar, tracks};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Tracks(args) => execute_tracks(ctx, args),
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Similar(args) => execute_similar(ctx, args),
            Commands::Analyze(args) => execute_analyze(ctx, args),
        }
    }

    fn execute_tracks(ctx: &CommandContext, args: &TracksArgs) -> Result<()> {
        if args.query.as_deref().is_some_and(|q| q.trim().is_empty()) {
            bail_usage!("--query must not be empty");
        }
        let config = ctx.config()?;
        let handle = ctx.load_dataset(&config)?;
        tracks::execute(
            ctx.cli,
            handle.dataset(),
            args.query.as_deref(),
            args.limit,
        )
    }

    fn execute_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
        let config = ctx.config()?;
        let resources = ctx.load_resources(&config)?;
        show::execute(ctx.cli, &resources, &args.label)
    }

    fn execute_similar(ctx: &CommandContext, args: &SimilarArgs) -> Result<()> {
        let config = ctx.config()?;
        let k = neighbor_count(&config, args.neighbors)?;
        let handle = ctx.load_dataset(&config)?;
        similar::execute(
            ctx.cli,
            &handle,
            &args.label,
            k,
            config.recommend.shortfall,
        )
    }

    fn execute_analyze(ctx: &CommandContext, args: &AnalyzeArgs) -> Result<()> {
        let config = ctx.config()?;
        let k = neighbor_count(&config, args.neighbors)?;
        let resources = ctx.load_resources(&config)?;
        analyze::execute(
            ctx.cli,
            &resources,
            &args.label,
            k,
            config.recommend.shortfall,
        )
    }

    /// `--neighbors` if given, else the configured default
    fn neighbor_count(config: &AppConfig, requested: Option<usize>) -> Result<usize> {
        match requested {
            Some(0) => bail_usage!("--neighbors must be at least 1"),
            Some(k) => Ok(k),
            None => Ok(config.recommend.neighbors),
        }
    }
}
