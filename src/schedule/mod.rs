// src/schedule/mod.rs

//! Schedule resolution.
//!
//! - [`task`] holds the task table types and the resolution result.
//! - [`anchor`] turns user input into a normalized anchor date.
//! - [`resolver`] is the single forward pass that dates every task.
//! - [`graph`] is a read-only adjacency view used for planning output.

pub mod anchor;
pub mod graph;
pub mod resolver;
pub mod task;

pub use anchor::parse_anchor;
pub use graph::TaskGraph;
pub use resolver::{resolve, resolve_str};
pub use task::{Diagnostic, ResolutionResult, ResolvedTask, SkipReason, TaskDefinition, TaskName};
