//! Tarjan's strongly connected components, used to diagnose cyclic input.
//!
//! The traversal is iterative with an explicit call stack so long chains do
//! not exhaust the thread stack. Components are reported only when they form
//! a cycle: more than one member, or a single member with an edge to itself.
//! This never influences scheduling results.

use crate::graph::Graph;
use crate::interner::NodeId;

/// Find every cyclic strongly connected component of `graph`.
///
/// Members of each component are listed in node order. Components come out in
/// the order Tarjan's algorithm completes them (reverse topological order of
/// the condensed graph).
pub fn find_cycles(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut finder = TarjanFinder::new(graph);
    for node in graph.nodes() {
        if finder.index[node].is_none() {
            finder.strong_connect(node);
        }
    }
    finder.components
}

struct TarjanFinder<'a> {
    graph: &'a Graph,
    /// Discovery index per node; `None` until visited
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeId>,
    next_index: usize,
    components: Vec<Vec<NodeId>>,
}

impl<'a> TarjanFinder<'a> {
    fn new(graph: &'a Graph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            index: vec![None; n],
            low_link: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn discover(&mut self, node: NodeId) {
        self.index[node] = Some(self.next_index);
        self.low_link[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    fn strong_connect(&mut self, root: NodeId) {
        self.discover(root);
        // (node, position of the next successor to examine)
        let mut call_stack: Vec<(NodeId, usize)> = vec![(root, 0)];

        while let Some(frame) = call_stack.last_mut() {
            let (node, cursor) = *frame;

            if let Some(&successor) = self.graph.successors(node).get(cursor) {
                frame.1 += 1;
                match self.index[successor] {
                    None => {
                        self.discover(successor);
                        call_stack.push((successor, 0));
                    }
                    Some(successor_index) if self.on_stack[successor] => {
                        self.low_link[node] = self.low_link[node].min(successor_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            call_stack.pop();
            if let Some(&(parent, _)) = call_stack.last() {
                self.low_link[parent] = self.low_link[parent].min(self.low_link[node]);
            }

            if Some(self.low_link[node]) == self.index[node] {
                self.pop_component(node);
            }
        }
    }

    fn pop_component(&mut self, root: NodeId) {
        let mut members = Vec::new();
        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            members.push(member);
            if member == root {
                break;
            }
        }

        let is_cycle = members.len() > 1 || self.graph.successors(root).contains(&root);
        if is_cycle {
            members.sort_unstable();
            self.components.push(members);
        }
    }
}
