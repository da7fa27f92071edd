//! Critical path extraction from scheduled timings.

use crate::config::PathHopRule;
use crate::error::CriticalPathError;
use crate::graph::Graph;
use crate::interner::NodeId;

use super::types::ActivityTiming;

/// Walk the zero-float chain from a start node to a terminal node.
///
/// The start is the first zero-float start node in graph node order (the
/// caller's root order). Each hop takes the first successor, in the activity's
/// successor insertion order, that satisfies `hop_rule`. The walk stops at the
/// first node with no qualifying successor, which on a scheduled DAG is a
/// terminal node.
///
/// With [`PathHopRule::TightEdge`] a zero-float successor that is critical only
/// through some other predecessor is skipped, so the path's costs sum to the
/// project critical cost. [`PathHopRule::FirstZeroFloat`] gives no such
/// guarantee.
///
/// An empty graph yields an empty path. A non-empty scheduled DAG always has a
/// zero-float start node; its absence is reported as
/// [`CriticalPathError::NoCriticalStart`].
pub fn extract_critical_path(
    graph: &Graph,
    timings: &[ActivityTiming],
    hop_rule: PathHopRule,
) -> Result<Vec<NodeId>, CriticalPathError> {
    if graph.is_empty() {
        return Ok(Vec::new());
    }

    let mut current = graph
        .start_nodes()
        .find(|&node| timings[node].is_critical())
        .ok_or(CriticalPathError::NoCriticalStart)?;

    let mut path = vec![current];
    while let Some(&next) = graph.successors(current).iter().find(|&&successor| {
        let timing = &timings[successor];
        match hop_rule {
            PathHopRule::FirstZeroFloat => timing.is_critical(),
            PathHopRule::TightEdge => {
                timing.is_critical() && timing.early_start == timings[current].early_finish
            }
        }
    }) {
        path.push(next);
        current = next;
    }

    Ok(path)
}

/// Every zero-float node, in node order.
pub fn critical_nodes(graph: &Graph, timings: &[ActivityTiming]) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|&node| timings[node].is_critical())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityId, ActivityNetwork};

    fn timing(early_start: u64, latest_start: u64) -> ActivityTiming {
        ActivityTiming {
            early_start,
            latest_start,
            ..ActivityTiming::default()
        }
    }

    #[test]
    fn test_first_zero_float_successor_wins() {
        let mut network = ActivityNetwork::new();
        let end = network.add_activity("end", 0);
        let x = network.add_activity_with_successors("x", 1, &[end]).unwrap();
        let y = network.add_activity_with_successors("y", 1, &[end]).unwrap();
        let z = network.add_activity_with_successors("z", 1, &[end]).unwrap();
        let start = network
            .add_activity_with_successors("start", 0, &[x, y, z])
            .unwrap();

        let graph = Graph::from_activities(&network, &[start]).unwrap();
        let mut timings = vec![ActivityTiming::default(); graph.node_count()];
        timings[graph.node(x).unwrap()] = timing(0, 4);
        timings[graph.node(y).unwrap()] = timing(0, 0);
        timings[graph.node(z).unwrap()] = timing(0, 0);

        let path = extract_critical_path(&graph, &timings, PathHopRule::FirstZeroFloat).unwrap();
        let ids: Vec<_> = path.iter().map(|&n| graph.activity(n)).collect();
        assert_eq!(ids, vec![start, y, end]);

        let critical: Vec<_> = critical_nodes(&graph, &timings)
            .into_iter()
            .map(|n| graph.activity(n))
            .collect();
        assert_eq!(critical, vec![start, y, z, end]);
    }

    /// S(0) -> [X(1), W(5)], X -> [Y(1), Z(5)], W -> [Y]. Y is critical only
    /// through W, so the edge X -> Y has slack while X -> Z does not.
    fn slack_edge_network() -> (Graph, Vec<ActivityTiming>, [ActivityId; 5]) {
        let mut network = ActivityNetwork::new();
        let y = network.add_activity("Y", 1);
        let z = network.add_activity("Z", 5);
        let x = network.add_activity_with_successors("X", 1, &[y, z]).unwrap();
        let w = network.add_activity_with_successors("W", 5, &[y]).unwrap();
        let s = network.add_activity_with_successors("S", 0, &[x, w]).unwrap();

        let graph = Graph::from_activities(&network, &[s]).unwrap();
        let mut timings = vec![ActivityTiming::default(); graph.node_count()];
        for (id, early_start, cost) in [(s, 0, 0), (x, 0, 1), (w, 0, 5), (y, 5, 1), (z, 1, 5)] {
            timings[graph.node(id).unwrap()] = ActivityTiming {
                early_start,
                early_finish: early_start + cost,
                latest_start: early_start,
                latest_finish: early_start + cost,
                critical_cost: 0,
            };
        }
        (graph, timings, [s, x, w, y, z])
    }

    #[test]
    fn test_first_zero_float_follows_slack_edge() {
        let (graph, timings, [s, x, _, y, _]) = slack_edge_network();

        let path = extract_critical_path(&graph, &timings, PathHopRule::FirstZeroFloat).unwrap();
        let ids: Vec<_> = path.iter().map(|&n| graph.activity(n)).collect();
        assert_eq!(ids, vec![s, x, y]);
    }

    #[test]
    fn test_tight_edge_skips_zero_float_successor_on_slack_edge() {
        let (graph, timings, [s, x, _, _, z]) = slack_edge_network();

        let path = extract_critical_path(&graph, &timings, PathHopRule::TightEdge).unwrap();
        let ids: Vec<_> = path.iter().map(|&n| graph.activity(n)).collect();
        assert_eq!(ids, vec![s, x, z]);
    }

    #[test]
    fn test_missing_critical_start_is_reported() {
        let mut network = ActivityNetwork::new();
        let a = network.add_activity("a", 1);
        let graph = Graph::from_activities(&network, &[a]).unwrap();

        let timings = vec![timing(0, 3)];
        assert_eq!(
            extract_critical_path(&graph, &timings, PathHopRule::FirstZeroFloat),
            Err(CriticalPathError::NoCriticalStart)
        );
    }

    #[test]
    fn test_empty_graph_has_empty_path() {
        let network = ActivityNetwork::new();
        let graph = Graph::from_activities(&network, &[]).unwrap();
        let path = extract_critical_path(&graph, &[], PathHopRule::default()).unwrap();
        assert_eq!(path, Vec::<NodeId>::new());
    }
}
