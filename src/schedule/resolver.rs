// src/schedule/resolver.rs

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::schedule::anchor::parse_anchor;
use crate::schedule::task::{Diagnostic, ResolutionResult, ResolvedTask, SkipReason, TaskDefinition};

/// Date every task in `tasks` from `anchor`, in authored order.
///
/// This is a single forward pass:
/// - a root (`depends_on = None`) sits on the anchor date; its offset is ignored
/// - any other task lands `offset_days` after its predecessor's date
/// - a task whose predecessor has no date yet is skipped and reported as a
///   [`Diagnostic`]; because it never receives a date, everything downstream
///   of it is skipped too
///
/// Tasks are never reordered or revisited. Identical inputs always produce
/// identical results.
pub fn resolve(anchor: NaiveDate, tasks: &[TaskDefinition]) -> ResolutionResult {
    let mut dates: HashMap<&str, NaiveDate> = HashMap::with_capacity(tasks.len());
    let mut result = ResolutionResult {
        resolved: Vec::with_capacity(tasks.len()),
        diagnostics: Vec::new(),
    };

    for task in tasks {
        let date = match task.depends_on.as_deref() {
            None => anchor,
            Some(dep) => match dates.get(dep) {
                None => {
                    warn!(
                        task = %task.name,
                        dependency = %dep,
                        "skipping task: dependency has no resolved date"
                    );
                    result.diagnostics.push(Diagnostic {
                        task_name: task.name.clone(),
                        reason: SkipReason::UnresolvedDependency {
                            dependency: dep.to_string(),
                        },
                    });
                    continue;
                }
                Some(base) => match base.checked_add_days(Days::new(u64::from(task.offset_days))) {
                    Some(date) => date,
                    None => {
                        warn!(
                            task = %task.name,
                            offset_days = task.offset_days,
                            "skipping task: date out of range"
                        );
                        result.diagnostics.push(Diagnostic {
                            task_name: task.name.clone(),
                            reason: SkipReason::DateOutOfRange,
                        });
                        continue;
                    }
                },
            },
        };

        debug!(task = %task.name, %date, "resolved task");
        dates.insert(task.name.as_str(), date);
        result.resolved.push(ResolvedTask::new(task, date));
    }

    result
}

/// Like [`resolve`], but parses the anchor first.
///
/// An anchor that is not a calendar date fails with
/// [`crate::errors::TimelineError::InvalidAnchorDate`] before any task is
/// looked at.
pub fn resolve_str(anchor: &str, tasks: &[TaskDefinition]) -> Result<ResolutionResult> {
    let anchor = parse_anchor(anchor)?;
    Ok(resolve(anchor, tasks))
}
