// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Only fatal conditions live here. A task whose predecessor has no date is
//! not an error: it is reported as a [`crate::schedule::Diagnostic`] next to
//! whatever did resolve.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("Invalid anchor date: {0}")]
    InvalidAnchorDate(String),

    #[error("Invalid dependency graph: {0}")]
    InvalidDependencyGraph(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
