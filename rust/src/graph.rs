//! Graph construction from activity successor relations.
//!
//! Starting from a root set, the builder walks every successor link with an
//! explicit work-list, numbering each activity once. The result is an
//! index-based adjacency view in both directions; cycles are tolerated here
//! and rejected later by the topological sort.

use std::collections::VecDeque;

use crate::error::CriticalPathError;
use crate::interner::{ActivityInterner, NodeId};
use crate::models::{ActivityId, ActivityNetwork};

/// Directed successor/predecessor adjacency over the reachable activities.
///
/// Node order is stable: the roots first, in the order given (duplicates
/// dropped), followed by newly discovered activities in breadth-first
/// discovery order along each activity's successor list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    interner: ActivityInterner,
    successors: Vec<Vec<NodeId>>,
    predecessors: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Discover every activity reachable from `roots` and build adjacency lists.
    ///
    /// An empty root set yields an empty graph.
    pub fn from_activities(
        network: &ActivityNetwork,
        roots: &[ActivityId],
    ) -> Result<Self, CriticalPathError> {
        let mut graph = Self {
            interner: ActivityInterner::with_capacity(roots.len()),
            ..Self::default()
        };
        let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(roots.len());

        for &root in roots {
            if !network.contains(root) {
                return Err(CriticalPathError::UnknownActivity(root));
            }
            if let Some(node) = graph.add_node(root) {
                queue.push_back(node);
            }
        }

        while let Some(node) = queue.pop_front() {
            let activity = graph.interner.activities()[node];
            for &successor in network[activity].successors() {
                let successor_node = match graph.add_node(successor) {
                    Some(new_node) => {
                        queue.push_back(new_node);
                        new_node
                    }
                    None => match graph.interner.get(successor) {
                        Some(existing) => existing,
                        None => continue,
                    },
                };
                graph.successors[node].push(successor_node);
                graph.predecessors[successor_node].push(node);
                graph.edge_count += 1;
            }
        }

        Ok(graph)
    }

    /// Intern an activity; returns the node only when it was not seen before.
    fn add_node(&mut self, id: ActivityId) -> Option<NodeId> {
        let (node, is_new) = self.interner.intern(id);
        if !is_new {
            return None;
        }
        self.successors.push(Vec::new());
        self.predecessors.push(Vec::new());
        Some(node)
    }

    pub fn node_count(&self) -> usize {
        self.interner.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// All node indices in node order.
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.node_count()
    }

    /// Activity id behind a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn activity(&self, node: NodeId) -> ActivityId {
        self.interner.activities()[node]
    }

    /// Activity ids in node order.
    pub fn activities(&self) -> &[ActivityId] {
        self.interner.activities()
    }

    /// Node index of an activity, if it is part of this graph.
    pub fn node(&self, id: ActivityId) -> Option<NodeId> {
        self.interner.get(id)
    }

    /// Successor nodes, in the activity's successor order.
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        &self.successors[node]
    }

    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        &self.predecessors[node]
    }

    /// Nodes without predecessors, in node order.
    pub fn start_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|&n| self.predecessors[n].is_empty())
    }

    /// Nodes without successors, in node order.
    pub fn terminal_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|&n| self.successors[n].is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roots() {
        let network = ActivityNetwork::new();
        let graph = Graph::from_activities(&network, &[]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.start_nodes().count(), 0);
    }

    #[test]
    fn test_discovers_unlisted_successors() {
        let mut network = ActivityNetwork::new();
        let finish = network.add_activity("Finish", 0);
        let b = network.add_activity_with_successors("B", 2, &[finish]).unwrap();
        let a = network.add_activity_with_successors("A", 1, &[b]).unwrap();

        // Only the head of the chain is supplied
        let graph = Graph::from_activities(&network, &[a]).unwrap();

        assert_eq!(graph.activities(), &[a, b, finish]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(0), &[1]);
        assert_eq!(graph.predecessors(2), &[1]);
        assert_eq!(graph.start_nodes().collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.terminal_nodes().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_roots_keep_caller_order() {
        let mut network = ActivityNetwork::new();
        let finish = network.add_activity("Finish", 0);
        let a = network.add_activity_with_successors("A", 1, &[finish]).unwrap();
        let b = network.add_activity_with_successors("B", 1, &[finish]).unwrap();

        let graph = Graph::from_activities(&network, &[b, finish, a, b]).unwrap();

        assert_eq!(graph.activities(), &[b, finish, a]);
        assert_eq!(graph.node(a), Some(2));
        assert_eq!(graph.predecessors(1), &[0, 2]);
        assert_eq!(graph.start_nodes().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_cycle_is_tolerated() {
        let mut network = ActivityNetwork::new();
        let a = network.add_activity("A", 1);
        let b = network.add_activity_with_successors("B", 1, &[a]).unwrap();
        network.add_successor(a, b).unwrap();

        let graph = Graph::from_activities(&network, &[a]).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.start_nodes().count(), 0);
    }

    #[test]
    fn test_unknown_root_rejected() {
        let network = ActivityNetwork::new();
        let missing = ActivityId::from_raw(0);
        assert_eq!(
            Graph::from_activities(&network, &[missing]).unwrap_err(),
            CriticalPathError::UnknownActivity(missing)
        );
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut network = ActivityNetwork::with_capacity(100_000);
        let mut next = network.add_activity("end", 1);
        for i in 0..99_999 {
            next = network
                .add_activity_with_successors(format!("n{i}"), 1, &[next])
                .unwrap();
        }

        let graph = Graph::from_activities(&network, &[next]).unwrap();
        assert_eq!(graph.node_count(), 100_000);
        assert_eq!(graph.edge_count(), 99_999);
    }
}
