// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod render;
pub mod schedule;
pub mod types;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_with_mode;
use crate::errors::{Result, TimelineError};
use crate::schedule::{parse_anchor, resolve};
use crate::types::{OutputFormat, ValidationMode};

/// What a finished invocation produced, so `main` can pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every task was dated (or a dry run was printed).
    Complete,
    /// Some tasks were skipped; carries how many.
    Incomplete(usize),
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - timeline file loading + validation
/// - anchor selection (flag, then `[config].anchor`)
/// - resolution
/// - rendering to stdout
pub fn run(args: &CliArgs) -> Result<RunOutcome> {
    let config_path = PathBuf::from(&args.config);
    let mode = args.lenient.then_some(ValidationMode::Lenient);
    let timeline = load_with_mode(&config_path, mode)?;

    info!(
        path = %config_path.display(),
        tasks = timeline.tasks().len(),
        validation = ?timeline.validation(),
        "timeline loaded"
    );

    if args.dry_run {
        print!("{}", render::render_plan(timeline.tasks()));
        debug!("dry-run complete (no resolution)");
        return Ok(RunOutcome::Complete);
    }

    let anchor_text = args.anchor.as_deref().or(timeline.anchor()).ok_or_else(|| {
        TimelineError::InvalidAnchorDate(
            "no anchor date given (pass --anchor or set [config].anchor)".to_string(),
        )
    })?;
    let anchor = parse_anchor(anchor_text)?;

    let result = resolve(anchor, timeline.tasks());
    info!(
        %anchor,
        resolved = result.resolved.len(),
        skipped = result.diagnostics.len(),
        "schedule resolved"
    );

    match args.format {
        OutputFormat::Text => print!("{}", render::render_text(&result, args.date_style)),
        OutputFormat::Json => println!("{}", render::render_json(&result)?),
    }

    if result.is_complete() {
        Ok(RunOutcome::Complete)
    } else {
        Ok(RunOutcome::Incomplete(result.diagnostics.len()))
    }
}
