//! Critical path calculation using forward and backward passes.
//!
//! All passes work on dense node indices in a precomputed topological order
//! and write into a `Vec<ActivityTiming>` indexed by node. Nothing here
//! touches the activity network; the scheduler commits the timings once every
//! pass has succeeded.

use crate::config::BackwardPassMethod;
use crate::graph::Graph;
use crate::interner::NodeId;

use super::types::ActivityTiming;

/// Timings for every node of a graph plus the project duration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleTimings {
    /// Indexed by node.
    pub timings: Vec<ActivityTiming>,
    pub project_critical_cost: u64,
}

/// Run all passes over `graph`, given per-node costs and a topological order.
pub fn calculate_timings(
    graph: &Graph,
    costs: &[u64],
    topo_order: &[NodeId],
    method: BackwardPassMethod,
) -> ScheduleTimings {
    let mut timings = vec![ActivityTiming::default(); graph.node_count()];

    forward_pass(graph, costs, topo_order, &mut timings);
    critical_cost_pass(graph, costs, topo_order, &mut timings);
    let project_critical_cost = project_critical_cost(graph, &timings);

    match method {
        BackwardPassMethod::CriticalCost => {
            backward_pass_from_critical_cost(costs, project_critical_cost, &mut timings)
        }
        BackwardPassMethod::SuccessorRecursion => backward_pass_recursive(
            graph,
            costs,
            topo_order,
            project_critical_cost,
            &mut timings,
        ),
    }

    ScheduleTimings {
        timings,
        project_critical_cost,
    }
}

/// Earliest start = max of all predecessor finishes (0 for start nodes).
pub fn forward_pass(
    graph: &Graph,
    costs: &[u64],
    topo_order: &[NodeId],
    timings: &mut [ActivityTiming],
) {
    for &node in topo_order {
        let early_start = graph
            .predecessors(node)
            .iter()
            .map(|&p| timings[p].early_finish)
            .max()
            .unwrap_or(0);

        timings[node].early_start = early_start;
        timings[node].early_finish = early_start + costs[node];
    }
}

/// Critical cost = own cost + max successor critical cost, bottom-up.
pub fn critical_cost_pass(
    graph: &Graph,
    costs: &[u64],
    topo_order: &[NodeId],
    timings: &mut [ActivityTiming],
) {
    for &node in topo_order.iter().rev() {
        let downstream = graph
            .successors(node)
            .iter()
            .map(|&s| timings[s].critical_cost)
            .max()
            .unwrap_or(0);

        timings[node].critical_cost = costs[node] + downstream;
    }
}

/// Maximum critical cost over all start nodes (total project duration).
pub fn project_critical_cost(graph: &Graph, timings: &[ActivityTiming]) -> u64 {
    graph
        .start_nodes()
        .map(|node| timings[node].critical_cost)
        .max()
        .unwrap_or(0)
}

/// Latest start = project critical cost - critical cost.
pub fn backward_pass_from_critical_cost(
    costs: &[u64],
    project_critical_cost: u64,
    timings: &mut [ActivityTiming],
) {
    for (node, timing) in timings.iter_mut().enumerate() {
        timing.latest_start = project_critical_cost - timing.critical_cost;
        timing.latest_finish = timing.latest_start + costs[node];
    }
}

/// Latest finish = min of all successor latest starts, in reverse topological order.
pub fn backward_pass_recursive(
    graph: &Graph,
    costs: &[u64],
    topo_order: &[NodeId],
    project_critical_cost: u64,
    timings: &mut [ActivityTiming],
) {
    for &node in topo_order.iter().rev() {
        let latest_finish = graph
            .successors(node)
            .iter()
            .map(|&s| timings[s].latest_start)
            .min()
            .unwrap_or(project_critical_cost);

        timings[node].latest_finish = latest_finish;
        timings[node].latest_start = latest_finish - costs[node];
    }
}
