// src/schedule/task.rs

//! Task table types and the result of a resolution pass.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task names are plain strings; they double as lookup keys.
pub type TaskName = String;

/// One authored row of the dependency table.
///
/// ```toml
/// [[task]]
/// name = "Design Review"
/// offset = 14
/// depends_on = "Initial Design"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDefinition {
    pub name: TaskName,

    /// Days after the predecessor's date. Ignored for roots.
    #[serde(default, rename = "offset")]
    pub offset_days: u32,

    /// Predecessor name; `None` marks the root that sits on the anchor date.
    #[serde(default)]
    pub depends_on: Option<TaskName>,
}

impl TaskDefinition {
    pub fn root(name: impl Into<TaskName>) -> Self {
        Self {
            name: name.into(),
            offset_days: 0,
            depends_on: None,
        }
    }

    pub fn after(name: impl Into<TaskName>, dependency: impl Into<TaskName>, offset_days: u32) -> Self {
        Self {
            name: name.into(),
            offset_days,
            depends_on: Some(dependency.into()),
        }
    }

    pub fn is_root(&self) -> bool {
        self.depends_on.is_none()
    }
}

/// A task definition together with its computed calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTask {
    pub name: TaskName,
    pub offset_days: u32,
    pub depends_on: Option<TaskName>,
    pub date: NaiveDate,
}

impl ResolvedTask {
    pub(crate) fn new(def: &TaskDefinition, date: NaiveDate) -> Self {
        Self {
            name: def.name.clone(),
            offset_days: def.offset_days,
            depends_on: def.depends_on.clone(),
            date,
        }
    }
}

/// Why a task was left out of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The predecessor had no date when this task was reached: it is unknown,
    /// was skipped itself, or appears later in the table.
    UnresolvedDependency { dependency: TaskName },
    /// Adding the offset ran past the last representable calendar date.
    DateOutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnresolvedDependency { .. } => f.write_str("unresolved dependency"),
            SkipReason::DateOutOfRange => f.write_str("date out of range"),
        }
    }
}

/// Per-task, non-fatal record of a task that could not be dated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub task_name: TaskName,
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.task_name, self.reason)
    }
}

/// Output of one resolution pass.
///
/// `resolved` keeps the authored order with skipped tasks left out;
/// `diagnostics` lists the skipped tasks in the order they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolutionResult {
    pub resolved: Vec<ResolvedTask>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionResult {
    /// `true` when every task in the table received a date.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedTask> {
        self.resolved.iter().find(|t| t.name == name)
    }

    pub fn date_of(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).map(|t| t.date)
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.diagnostics.iter().any(|d| d.task_name == name)
    }
}
