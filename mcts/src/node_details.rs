use std::fmt::{self, Debug, Display, Formatter};

use itertools::Itertools;

use crate::NodeId;

/// Statistics of a node and of each of its outgoing edges, best edge first.
pub struct NodeDetails<A> {
    pub visits: usize,
    pub avg_score: f32,
    pub children: Vec<EdgeDetails<A>>,
}

pub struct EdgeDetails<A> {
    pub action: A,
    pub child: NodeId,
    pub visits: usize,
    pub avg_score: f32,
    pub ucb: f32,
}

impl<A: Debug> Display for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = self
            .children
            .iter()
            .map(|edge| format!("\n\t({})", edge))
            .join(",");

        write!(
            f,
            "N: {visits}, Q: {avg_score:.3}, Actions: [{actions}]",
            visits = self.visits,
            avg_score = self.avg_score,
            actions = actions
        )
    }
}

impl<A: Debug> Debug for NodeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl<A: Debug> Display for EdgeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "A: {action:?}, N: {visits}, Q: {avg_score:.3}, UCB: {ucb:.3}",
            action = self.action,
            visits = self.visits,
            avg_score = self.avg_score,
            ucb = self.ucb
        )
    }
}

impl<A: Debug> Debug for EdgeDetails<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
