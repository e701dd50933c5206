use std::collections::HashSet;

use crate::NodeId;

/// Everything one turn's search threads through its phases.
pub struct SearchContext<S> {
    pub root: NodeId,
    pub root_snapshot: S,
    pub path: Vec<NodeId>,
    pub visited: HashSet<NodeId>,
}

impl<S> SearchContext<S> {
    pub fn new(root: NodeId, root_snapshot: S) -> Self {
        Self {
            root,
            root_snapshot,
            path: Vec::with_capacity(64),
            visited: HashSet::with_capacity(64),
        }
    }

    /// Starts a fresh descent from the root.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
        self.path.push(self.root);
        self.visited.insert(self.root);
    }

    /// Records a step of the descent. Returns false if the node is already on the path.
    pub fn push(&mut self, node: NodeId) -> bool {
        if !self.visited.insert(node) {
            return false;
        }

        self.path.push(node);
        true
    }
}
