//! Dense node numbering for activity ids.
//!
//! Maps the (possibly sparse) activity ids reachable from a root set to
//! consecutive node indices so graph passes can use plain vectors.

use rustc_hash::FxHashMap;

use crate::models::ActivityId;

/// Dense node index inside a [`crate::graph::Graph`].
pub type NodeId = usize;

/// Bidirectional mapping between activity ids and dense node indices.
#[derive(Debug, Clone)]
pub struct ActivityInterner {
    to_node: FxHashMap<ActivityId, NodeId>,
    from_node: Vec<ActivityId>,
}

impl ActivityInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_node: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_node: Vec::with_capacity(capacity),
        }
    }

    /// Intern an activity, returning its node index and whether it was new.
    pub fn intern(&mut self, id: ActivityId) -> (NodeId, bool) {
        if let Some(&node) = self.to_node.get(&id) {
            return (node, false);
        }
        let node = self.from_node.len();
        self.from_node.push(id);
        self.to_node.insert(id, node);
        (node, true)
    }

    #[inline]
    pub fn get(&self, id: ActivityId) -> Option<NodeId> {
        self.to_node.get(&id).copied()
    }

    /// Activity ids in node order.
    pub fn activities(&self) -> &[ActivityId] {
        &self.from_node
    }

    pub fn len(&self) -> usize {
        self.from_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_node.is_empty()
    }
}

impl Default for ActivityInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
