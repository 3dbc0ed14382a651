// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawTimelineFile, TimelineFile};
use crate::errors::Result;
use crate::types::ValidationMode;

/// Load a timeline file from a given path and return the raw `RawTimelineFile`.
///
/// This only performs TOML deserialization; it does **not** check the task
/// table. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawTimelineFile> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading timeline file");
    let contents = fs::read_to_string(path)?;

    let raw: RawTimelineFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a timeline file and validate it using the mode declared in the file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<TimelineFile> {
    load_with_mode(path, None)
}

/// Load a timeline file, optionally overriding its `[config].validation`.
pub fn load_with_mode(
    path: impl AsRef<Path>,
    mode: Option<ValidationMode>,
) -> Result<TimelineFile> {
    let mut raw = load_from_path(path)?;
    if let Some(mode) = mode {
        raw.config.validation = mode;
    }
    TimelineFile::try_from(raw)
}

/// Parse and validate a timeline from TOML text.
pub fn parse_str(contents: &str) -> Result<TimelineFile> {
    let raw: RawTimelineFile = toml::from_str(contents)?;
    TimelineFile::try_from(raw)
}

