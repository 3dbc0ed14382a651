// src/config/model.rs

use serde::Deserialize;

use crate::schedule::TaskDefinition;
use crate::types::ValidationMode;

/// Timeline file exactly as read from TOML, before validation.
///
/// ```toml
/// [config]
/// validation = "strict"
/// anchor = "2025-01-01"
///
/// [[task]]
/// name = "Business Case"
///
/// [[task]]
/// name = "Business Case Approval"
/// offset = 7
/// depends_on = "Business Case"
/// ```
///
/// `[[task]]` is an array of tables so the authored order survives parsing;
/// resolution runs in exactly that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimelineFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub task: Vec<TaskDefinition>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"strict"` (default) or `"lenient"`.
    #[serde(default)]
    pub validation: ValidationMode,

    /// Anchor date used when none is given on the command line.
    #[serde(default)]
    pub anchor: Option<String>,
}

/// A validated timeline: the task table plus its settings.
///
/// Only obtainable through `TryFrom<RawTimelineFile>`, so holding one means
/// the checks for its validation mode have passed.
#[derive(Debug, Clone)]
pub struct TimelineFile {
    validation: ValidationMode,
    anchor: Option<String>,
    tasks: Vec<TaskDefinition>,
}

impl TimelineFile {
    pub(crate) fn new_unchecked(
        validation: ValidationMode,
        anchor: Option<String>,
        tasks: Vec<TaskDefinition>,
    ) -> Self {
        Self {
            validation,
            anchor,
            tasks,
        }
    }

    /// Task table in authored order.
    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Default anchor text from `[config].anchor`.
    ///
    /// Left unparsed: a command-line anchor replaces it without ever looking
    /// at it.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}
