// src/render.rs

//! Presentation of plans and resolved schedules.
//!
//! Everything here returns a `String`; printing is left to the caller.

use std::collections::HashSet;
use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

use crate::errors::Result;
use crate::schedule::{ResolutionResult, TaskDefinition, TaskGraph};
use crate::types::DateStyle;

/// Long human-readable date with an ordinal day, e.g. `March 22nd, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Long => format_long_date(date),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}

/// One line per resolved task, names padded to a common width, followed by
/// a `skipped:` block when any task could not be dated.
pub fn render_text(result: &ResolutionResult, style: DateStyle) -> String {
    let width = result
        .resolved
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for task in &result.resolved {
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            task.name,
            format_date(task.date, style),
            width = width
        );
    }

    if !result.diagnostics.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "skipped ({}):", result.diagnostics.len());
        for diag in &result.diagnostics {
            let _ = writeln!(out, "  - {diag}");
        }
    }

    out
}

pub fn render_json(result: &ResolutionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Dry-run view: the dependency tree from each root, offsets shown as `+Nd`.
///
/// Tasks that no root reaches (unknown or cyclic predecessors, only possible
/// under lenient validation) are listed under `detached:`.
pub fn render_plan(tasks: &[TaskDefinition]) -> String {
    let graph = TaskGraph::from_tasks(tasks);
    let mut out = String::new();
    let mut visited: HashSet<&str> = HashSet::new();

    let _ = writeln!(out, "tasks ({}):", graph.len());
    for root in graph.roots() {
        write_subtree(&mut out, tasks, &graph, root, 1, &mut visited);
    }

    let detached: Vec<&TaskDefinition> = tasks
        .iter()
        .filter(|t| !visited.contains(t.name.as_str()))
        .collect();
    if !detached.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "detached ({}):", detached.len());
        for task in detached {
            let _ = writeln!(
                out,
                "  - {} (+{}d after '{}')",
                task.name,
                task.offset_days,
                task.depends_on.as_deref().unwrap_or("")
            );
        }
    }

    out
}

fn write_subtree<'a>(
    out: &mut String,
    tasks: &'a [TaskDefinition],
    graph: &'a TaskGraph,
    name: &'a str,
    depth: usize,
    visited: &mut HashSet<&'a str>,
) {
    if !visited.insert(name) {
        return;
    }

    let indent = "  ".repeat(depth);
    match tasks.iter().find(|t| t.name == name) {
        Some(task) if !task.is_root() => {
            let _ = writeln!(out, "{indent}- {name} (+{}d)", task.offset_days);
        }
        _ => {
            let _ = writeln!(out, "{indent}- {name} (anchor)");
        }
    }

    for child in graph.dependents_of(name) {
        write_subtree(out, tasks, graph, child.as_str(), depth + 1, visited);
    }
}
