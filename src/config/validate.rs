// src/config/validate.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::config::model::{RawTimelineFile, TimelineFile};
use crate::errors::{Result, TimelineError};
use crate::types::ValidationMode;

impl TryFrom<RawTimelineFile> for TimelineFile {
    type Error = TimelineError;

    fn try_from(raw: RawTimelineFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_timeline(&raw)?;

        Ok(TimelineFile::new_unchecked(
            raw.config.validation,
            raw.config.anchor,
            raw.task,
        ))
    }
}

fn validate_raw_timeline(raw: &RawTimelineFile) -> Result<()> {
    ensure_has_tasks(raw)?;
    validate_task_names(raw)?;

    match raw.config.validation {
        ValidationMode::Strict => {
            validate_single_root(raw)?;
            validate_task_dependencies(raw)?;
            validate_dag(raw)?;
            validate_authored_order(raw)?;
        }
        ValidationMode::Lenient => {
            debug!("lenient validation: dependency graph checks skipped");
        }
    }

    Ok(())
}

fn ensure_has_tasks(raw: &RawTimelineFile) -> Result<()> {
    if raw.task.is_empty() {
        return Err(TimelineError::ConfigError(
            "timeline must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_names(raw: &RawTimelineFile) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (idx, task) in raw.task.iter().enumerate() {
        if task.name.trim().is_empty() {
            return Err(TimelineError::ConfigError(format!(
                "task #{} has an empty name",
                idx + 1
            )));
        }
        if let Some(first) = seen.insert(task.name.as_str(), idx) {
            return Err(TimelineError::ConfigError(format!(
                "task '{}' is defined twice (entries #{} and #{})",
                task.name,
                first + 1,
                idx + 1
            )));
        }
    }
    Ok(())
}

fn validate_single_root(raw: &RawTimelineFile) -> Result<()> {
    let roots: Vec<&str> = raw
        .task
        .iter()
        .filter(|t| t.is_root())
        .map(|t| t.name.as_str())
        .collect();

    match roots.len() {
        1 => Ok(()),
        0 => Err(TimelineError::InvalidDependencyGraph(
            "no root task: exactly one task must omit `depends_on`".to_string(),
        )),
        _ => Err(TimelineError::InvalidDependencyGraph(format!(
            "multiple root tasks {:?}: exactly one task may omit `depends_on`",
            roots
        ))),
    }
}

fn validate_task_dependencies(raw: &RawTimelineFile) -> Result<()> {
    for task in raw.task.iter() {
        let Some(dep) = task.depends_on.as_ref() else {
            continue;
        };
        if dep == &task.name {
            return Err(TimelineError::InvalidDependencyGraph(format!(
                "task '{}' cannot depend on itself",
                task.name
            )));
        }
        if !raw.task.iter().any(|t| &t.name == dep) {
            return Err(TimelineError::InvalidDependencyGraph(format!(
                "task '{}' has unknown dependency '{}' in `depends_on`",
                task.name, dep
            )));
        }
    }
    Ok(())
}

fn validate_dag(raw: &RawTimelineFile) -> Result<()> {
    // Edge direction: dependency -> task.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in raw.task.iter() {
        graph.add_node(task.name.as_str());
    }

    for task in raw.task.iter() {
        if let Some(dep) = task.depends_on.as_ref() {
            graph.add_edge(dep.as_str(), task.name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TimelineError::InvalidDependencyGraph(format!(
            "cycle detected in task graph involving task '{}'",
            cycle.node_id()
        ))),
    }
}

/// Resolution never reorders, so a predecessor listed later would leave its
/// dependents undated.
fn validate_authored_order(raw: &RawTimelineFile) -> Result<()> {
    let position: HashMap<&str, usize> = raw
        .task
        .iter()
        .enumerate()
        .map(|(idx, t)| (t.name.as_str(), idx))
        .collect();

    for (idx, task) in raw.task.iter().enumerate() {
        let Some(dep) = task.depends_on.as_deref() else {
            continue;
        };
        if let Some(&dep_idx) = position.get(dep) {
            if dep_idx > idx {
                return Err(TimelineError::InvalidDependencyGraph(format!(
                    "task '{}' depends on '{}', which is listed after it",
                    task.name, dep
                )));
            }
        }
    }
    Ok(())
}
