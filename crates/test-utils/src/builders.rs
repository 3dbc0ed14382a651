#![allow(dead_code)]

use milestones::config::{RawTimelineFile, TimelineFile};
use milestones::errors::Result;
use milestones::schedule::TaskDefinition;
use milestones::types::ValidationMode;

/// Builder for timeline files to simplify test setup.
pub struct TimelineBuilder {
    raw: RawTimelineFile,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawTimelineFile::default(),
        }
    }

    pub fn root(mut self, name: &str) -> Self {
        self.raw.task.push(TaskDefinition::root(name));
        self
    }

    pub fn task(mut self, name: &str, depends_on: &str, offset: u32) -> Self {
        self.raw
            .task
            .push(TaskDefinition::after(name, depends_on, offset));
        self
    }

    pub fn lenient(mut self) -> Self {
        self.raw.config.validation = ValidationMode::Lenient;
        self
    }

    pub fn anchor(mut self, anchor: &str) -> Self {
        self.raw.config.anchor = Some(anchor.to_string());
        self
    }

    /// The task table as authored, without validation.
    pub fn tasks(&self) -> Vec<TaskDefinition> {
        self.raw.task.clone()
    }

    pub fn try_build(self) -> Result<TimelineFile> {
        TimelineFile::try_from(self.raw)
    }

    pub fn build(self) -> TimelineFile {
        self.try_build()
            .expect("Failed to build valid timeline from builder")
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `n` tasks chained off a single root: `task_0` is the root and
/// `task_i` lands `offset` days after `task_{i-1}`.
pub fn linear_chain(n: usize, offset: u32) -> Vec<TaskDefinition> {
    (0..n)
        .map(|i| {
            if i == 0 {
                TaskDefinition::root("task_0")
            } else {
                TaskDefinition::after(format!("task_{i}"), format!("task_{}", i - 1), offset)
            }
        })
        .collect()
}
