use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{SearchNode, SelectionMode, TieBreak};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(Index);

#[derive(Debug, Clone)]
pub struct Edge<A> {
    action: A,
    child: NodeId,
}

impl<A> Edge<A> {
    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn child(&self) -> NodeId {
        self.child
    }
}

#[derive(Debug)]
struct GraphNode<A, F> {
    node: SearchNode<A>,
    fingerprint: F,
    children: Vec<Edge<A>>,
    parents: Vec<NodeId>,
}

/// Search nodes keyed by canonical state fingerprint, connected by action labeled edges.
///
/// Different action sequences reaching the same fingerprint share one node, so this is a DAG
/// rather than a tree. Nodes are never removed.
#[derive(Debug)]
pub struct SearchGraph<A, F> {
    nodes: Arena<GraphNode<A, F>>,
    transpositions: HashMap<F, NodeId>,
}

impl<A, F> SearchGraph<A, F>
where
    F: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            transpositions: HashMap::new(),
        }
    }

    /// Registers `node` under `fingerprint`. If the fingerprint is already known the existing node
    /// is kept and `node` is dropped.
    pub fn add_node(&mut self, fingerprint: F, node: SearchNode<A>) -> NodeId {
        if let Some(existing) = self.transpositions.get(&fingerprint) {
            return *existing;
        }

        let index = self.nodes.insert(GraphNode {
            node,
            fingerprint: fingerprint.clone(),
            children: Vec::new(),
            parents: Vec::new(),
        });

        let id = NodeId(index);
        self.transpositions.insert(fingerprint, id);
        id
    }

    /// Links `parent` to the node for `fingerprint` through `action`, creating the child from
    /// `node` when the fingerprint is new. Returns the child actually linked.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        fingerprint: F,
        node: SearchNode<A>,
        action: A,
    ) -> NodeId
    where
        A: PartialEq,
    {
        if let Some(edge) = self.nodes[parent.0]
            .children
            .iter()
            .find(|edge| edge.action == action)
        {
            return edge.child;
        }

        let child = self.add_node(fingerprint, node);

        self.nodes[parent.0].children.push(Edge { action, child });

        let parents = &mut self.nodes[child.0].parents;
        if !parents.contains(&parent) {
            parents.push(parent);
        }

        child
    }

    pub fn get(&self, fingerprint: &F) -> Option<NodeId> {
        self.transpositions.get(fingerprint).copied()
    }

    pub fn node(&self, id: NodeId) -> &SearchNode<A> {
        &self.nodes[id.0].node
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<A> {
        &mut self.nodes[id.0].node
    }

    pub fn fingerprint(&self, id: NodeId) -> &F {
        &self.nodes[id.0].fingerprint
    }

    pub fn edges(&self, id: NodeId) -> &[Edge<A>] {
        &self.nodes[id.0].children
    }

    /// One entry per edge in expansion order. A child reachable by two actions appears twice.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges(id).iter().map(|edge| edge.child).collect()
    }

    pub fn parents(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].parents
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        !self.nodes[id.0].children.is_empty()
    }

    pub fn action_between(&self, parent: NodeId, child: NodeId) -> Option<&A> {
        self.edges(parent)
            .iter()
            .find(|edge| edge.child == child)
            .map(|edge| &edge.action)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|(index, _)| NodeId(index))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Highest scoring edge out of `id`, or `None` when the node has no children.
    pub fn best_edge<R>(
        &self,
        id: NodeId,
        mode: SelectionMode,
        tie_break: TieBreak,
        rng: &mut R,
    ) -> Option<&Edge<A>>
    where
        R: Rng + ?Sized,
    {
        let parent_visits = self.node(id).visits();
        let scored = self.edges(id).iter().map(|edge| {
            let child = self.node(edge.child);
            let score = match mode {
                SelectionMode::Explore {
                    exploration_constant,
                } => child.ucb_score(parent_visits, exploration_constant),
                SelectionMode::Final(final_selection) => child.final_score(final_selection),
            };

            (edge, score)
        });

        match tie_break {
            TieBreak::FirstEncountered => {
                let mut best: Option<(&Edge<A>, f32)> = None;
                for (edge, score) in scored {
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((edge, score));
                    }
                }

                best.map(|(edge, _)| edge)
            }
            TieBreak::Random => scored
                .max_set_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .choose(rng)
                .map(|(edge, _)| *edge),
        }
    }

    pub fn best_child<R>(
        &self,
        id: NodeId,
        mode: SelectionMode,
        tie_break: TieBreak,
        rng: &mut R,
    ) -> Option<NodeId>
    where
        R: Rng + ?Sized,
    {
        self.best_edge(id, mode, tie_break, rng)
            .map(|edge| edge.child)
    }

    /// True when every node after the first has the node before it as its only parent. Such a
    /// path is the only one from its first node to its last, so it is also the shortest.
    pub fn is_only_path(&self, path: &[NodeId]) -> bool {
        path.windows(2)
            .all(|pair| self.parents(pair[1]) == [pair[0]])
    }

    /// Shortest path from `ancestor` to `descendant` along child edges, inclusive of both ends.
    /// Ties between equally short paths go to the edges expanded first.
    pub fn path_between(&self, ancestor: NodeId, descendant: NodeId) -> Option<Vec<NodeId>> {
        let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([ancestor]);

        while let Some(current) = queue.pop_front() {
            if current == descendant {
                let mut path = vec![current];
                let mut cursor = current;
                while let Some(previous) = came_from.get(&cursor) {
                    path.push(*previous);
                    cursor = *previous;
                }

                path.reverse();
                return Some(path);
            }

            for edge in self.edges(current) {
                if edge.child != ancestor && !came_from.contains_key(&edge.child) {
                    came_from.insert(edge.child, current);
                    queue.push_back(edge.child);
                }
            }
        }

        None
    }
}

impl<A, F> Default for SearchGraph<A, F>
where
    F: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
