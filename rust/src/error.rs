//! Error types for critical path scheduling.

use thiserror::Error;

use crate::models::ActivityId;

/// Errors that can occur while building or scheduling an activity network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriticalPathError {
    /// The successor graph reachable from the supplied activities is not a DAG.
    ///
    /// `cycles` lists the activity names of every strongly connected component
    /// that forms a cycle. It is empty when cycle diagnosis is disabled.
    #[error("Cyclic dependency detected in activity graph{}", format_cycles(.cycles))]
    CyclicDependency { cycles: Vec<Vec<String>> },
    /// An activity id that does not belong to the network was referenced.
    #[error("Activity not found: {0}")]
    UnknownActivity(ActivityId),
    /// The network already holds as many activities as ids can address.
    #[error("Activity network is full: ids are limited to {} activities", u64::from(u32::MAX) + 1)]
    TooManyActivities,
    /// A scheduled acyclic graph produced no zero-float start activity.
    #[error("No start activity with zero total float; schedule is inconsistent")]
    NoCriticalStart,
}

impl CriticalPathError {
    /// Whether this error reports a cyclic activity graph.
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Self::CyclicDependency { .. })
    }
}

fn format_cycles(cycles: &[Vec<String>]) -> String {
    if cycles.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = cycles
        .iter()
        .map(|members| format!("[{}]", members.join(", ")))
        .collect();
    format!(": {}", rendered.join(", "))
}
