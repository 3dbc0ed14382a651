// src/schedule/graph.rs

use std::collections::HashMap;

use crate::schedule::task::{TaskDefinition, TaskName};

/// Internal node structure: the single predecessor and the direct dependents.
#[derive(Debug, Clone, Default)]
struct TaskNode {
    dependency: Option<TaskName>,
    /// Direct dependents in authored order.
    dependents: Vec<TaskName>,
}

/// Read-only adjacency view over a task table, keyed by task name.
///
/// Nothing here is validated: a `depends_on` naming an unknown task is kept
/// as-is and simply never shows up as a node.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    order: Vec<TaskName>,
    nodes: HashMap<TaskName, TaskNode>,
}

impl TaskGraph {
    pub fn from_tasks(tasks: &[TaskDefinition]) -> Self {
        let mut order = Vec::with_capacity(tasks.len());
        let mut nodes: HashMap<TaskName, TaskNode> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            if !nodes.contains_key(&task.name) {
                order.push(task.name.clone());
            }
            nodes.entry(task.name.clone()).or_default().dependency = task.depends_on.clone();
        }

        for task in tasks {
            if let Some(dep) = task.depends_on.as_ref() {
                if let Some(dep_node) = nodes.get_mut(dep) {
                    dep_node.dependents.push(task.name.clone());
                }
            }
        }

        Self { order, nodes }
    }

    fn tasks(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Tasks without a predecessor, in authored order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.tasks()
            .filter(move |name| self.dependency_of(name).is_none())
    }

    pub fn dependency_of(&self, name: &str) -> Option<&str> {
        self.nodes.get(name).and_then(|n| n.dependency.as_deref())
    }

    pub fn dependents_of(&self, name: &str) -> &[TaskName] {
        self.nodes
            .get(name)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
