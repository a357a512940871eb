//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use trackscope_core::config::AppConfig;
use trackscope_core::error::Result;
use trackscope_core::resources::{DatasetHandle, Resources};
use trackscope_core::trace_time;

use crate::cli::paths::resolve_arg_path;
use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a PathBuf, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Discovered configuration with `--model` / `--dataset` applied
    pub fn config(&self) -> Result<AppConfig> {
        let (config, source) = AppConfig::discover(self.cli.config.as_deref(), self.cwd)?;
        debug!(
            source = ?source,
            elapsed = ?self.start.elapsed(),
            "load_config"
        );

        Ok(config.with_overrides(
            resolve_arg_path(self.cwd, self.cli.model.as_ref()),
            resolve_arg_path(self.cwd, self.cli.dataset.as_ref()),
        ))
    }

    /// Dataset and neighbor index only
    pub fn load_dataset(&self, config: &AppConfig) -> Result<DatasetHandle> {
        let handle = DatasetHandle::load(&config.dataset_path)?;
        trace_time!(self.start, "load_dataset");
        Ok(handle)
    }

    /// Model and dataset together
    pub fn load_resources(&self, config: &AppConfig) -> Result<Resources> {
        Resources::load(&config.model_path, &config.dataset_path)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("trackscope {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Genre prediction and similar-track search for music datasets.");
        println!();
        println!("Run `trackscope --help` for usage information.");
        Ok(())
    }
}
