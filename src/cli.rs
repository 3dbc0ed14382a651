// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::{DateStyle, OutputFormat};

/// Command-line arguments for `milestones`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "milestones",
    version,
    about = "Derive a dated milestone schedule from an anchor date and a task table.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the timeline file (TOML).
    ///
    /// Default: `Timeline.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Timeline.toml")]
    pub config: String,

    /// Anchor date (YYYY-MM-DD) for the root task.
    ///
    /// Overrides `[config].anchor` from the timeline file.
    #[arg(long, value_name = "DATE")]
    pub anchor: Option<String>,

    /// Output format for the resolved schedule.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Date style for text output.
    #[arg(long, value_enum, default_value_t = DateStyle::Long)]
    pub date_style: DateStyle,

    /// Skip dependency graph checks; broken references become per-task
    /// diagnostics instead of a load error.
    #[arg(long)]
    pub lenient: bool,

    /// Validate and print the dependency tree, but don't resolve dates.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 2 when any task could not be dated.
    #[arg(long)]
    pub strict_exit: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MILESTONES_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
