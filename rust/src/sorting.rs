//! Topological ordering and cycle detection.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::interner::NodeId;

/// Nodes left unsorted because they sit on, or downstream of, a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetected {
    /// Nodes whose in-degree never dropped to zero, in node order.
    pub unresolved: Vec<NodeId>,
}

/// Perform topological sort of the graph using Kahn's algorithm.
///
/// Returns node indices such that every edge points from an earlier node to a
/// later one, start nodes first. Ready nodes are consumed in FIFO order seeded
/// in node order, so the result is stable for a given graph.
///
/// Fails with [`CycleDetected`] when some edges remain unconsumed after no
/// zero in-degree node is left.
pub fn topological_sort(graph: &Graph) -> Result<Vec<NodeId>, CycleDetected> {
    // Calculate in-degrees (number of unconsumed predecessor edges)
    let mut in_degree: Vec<usize> = graph
        .nodes()
        .map(|node| graph.predecessors(node).len())
        .collect();

    let mut queue: VecDeque<NodeId> = graph.start_nodes().collect();
    let mut result: Vec<NodeId> = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        result.push(node);

        for &successor in graph.successors(node) {
            in_degree[successor] -= 1;
            if in_degree[successor] == 0 {
                queue.push_back(successor);
            }
        }
    }

    if result.len() != graph.node_count() {
        let unresolved = graph.nodes().filter(|&n| in_degree[n] > 0).collect();
        return Err(CycleDetected { unresolved });
    }

    Ok(result)
}
