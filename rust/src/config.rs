//! Configuration types for the critical path method.

use crate::logging::VERBOSITY_SILENT;

/// How latest start/finish times are derived in the backward pass.
///
/// Both methods produce identical timings on any acyclic graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackwardPassMethod {
    /// `latest_start = project_critical_cost - critical_cost`
    #[default]
    CriticalCost,
    /// `latest_finish = min(successor.latest_start)`, defaulting to the project
    /// critical cost for terminal activities.
    SuccessorRecursion,
}

/// How the critical path walk picks the next activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathHopRule {
    /// First successor, in insertion order, with zero total float.
    #[default]
    FirstZeroFloat,
    /// First zero-float successor that starts exactly when the current
    /// activity finishes. The path's costs then always sum to the project
    /// critical cost.
    TightEdge,
}

/// Configuration for a critical path run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriticalPathConfig {
    /// Backward pass formulation.
    pub backward_pass: BackwardPassMethod,
    /// Successor selection while walking the critical path.
    pub hop_rule: PathHopRule,
    /// Run strongly connected component analysis on cyclic input so the error
    /// names the activities on each cycle.
    pub diagnose_cycles: bool,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for CriticalPathConfig {
    fn default() -> Self {
        Self {
            backward_pass: BackwardPassMethod::default(),
            hop_rule: PathHopRule::default(),
            diagnose_cycles: true,
            verbosity: VERBOSITY_SILENT,
        }
    }
}
