//! Types for critical path scheduling.

use crate::models::ActivityId;

/// Per-activity timing computed by the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActivityTiming {
    /// Earliest possible start (from forward pass).
    pub early_start: u64,
    /// Earliest possible finish (from forward pass).
    pub early_finish: u64,
    /// Latest allowable start (from backward pass).
    pub latest_start: u64,
    /// Latest allowable finish (from backward pass).
    pub latest_finish: u64,
    /// Cost of the longest path from this activity to any terminal, inclusive.
    pub critical_cost: u64,
}

impl ActivityTiming {
    /// Total float = latest_start - early_start.
    pub fn total_float(&self) -> u64 {
        self.latest_start.saturating_sub(self.early_start)
    }

    pub fn is_critical(&self) -> bool {
        self.total_float() == 0
    }
}

/// Result of scheduling an activity network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPathResult {
    /// Zero-float activities from one start activity to one terminal activity.
    ///
    /// Ties are broken by the caller's root order for the start activity and by
    /// each activity's successor insertion order for every later hop.
    pub critical_path: Vec<ActivityId>,
    /// Total project duration.
    pub project_critical_cost: u64,
    /// Every scheduled activity, predecessors before successors.
    pub topological_order: Vec<ActivityId>,
    /// All activities with zero total float, in graph order.
    ///
    /// May include activities not on `critical_path` when several parallel
    /// critical paths of equal length exist.
    pub critical_activities: Vec<ActivityId>,
}

impl CriticalPathResult {
    pub fn is_empty(&self) -> bool {
        self.critical_path.is_empty()
    }
}
