// src/config/mod.rs

//! Timeline file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a timeline file from disk or a string (`loader.rs`).
//! - Validate the task table and its dependency graph (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_with_mode, parse_str};
pub use model::{ConfigSection, RawTimelineFile, TimelineFile};
