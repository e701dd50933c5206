use common::div_or_zero;
use engine::PlayerId;

use crate::FinalSelection;

/// Score returned for a child that has never been visited while exploring. It outranks every
/// finite score so that all children are tried once before any is exploited.
pub const UNVISITED_SCORE: f32 = f32::INFINITY;

/// One decision point in the search graph.
///
/// `owner` is the player who made the choice this node represents, which for the root is the
/// player to move in the real game. Every score credited to the node is taken from that player's
/// perspective.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    visits: usize,
    total_score: f32,
    owner: PlayerId,
    depth: usize,
    incoming_action: Option<A>,
}

impl<A> SearchNode<A> {
    pub fn root(owner: PlayerId) -> Self {
        Self {
            visits: 0,
            total_score: 0.0,
            owner,
            depth: 0,
            incoming_action: None,
        }
    }

    pub fn new(owner: PlayerId, depth: usize, incoming_action: A) -> Self {
        Self {
            visits: 0,
            total_score: 0.0,
            owner,
            depth,
            incoming_action: Some(incoming_action),
        }
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn total_score(&self) -> f32 {
        self.total_score
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The action from the parent that created this node. A transposed node keeps the action of
    /// its first parent; the graph's edge labels cover the others.
    pub fn incoming_action(&self) -> Option<&A> {
        self.incoming_action.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.incoming_action.is_none()
    }

    pub fn avg_score(&self) -> f32 {
        div_or_zero(self.total_score, self.visits as f32)
    }

    /// Credits one completed simulation.
    pub fn record(&mut self, score: f32) {
        self.visits += 1;
        self.total_score += score;
    }

    pub fn set_visits(&mut self, visits: usize) {
        self.visits = visits;
    }

    pub fn set_total_score(&mut self, total_score: f32) {
        self.total_score = total_score;
    }

    /// UCB1 score of this node as a child of a parent with `parent_visits` visits.
    pub fn ucb_score(&self, parent_visits: usize, exploration_constant: f32) -> f32 {
        if self.visits == 0 {
            return UNVISITED_SCORE;
        }

        // A transposed child can be visited through another parent before this one.
        let parent_visits = parent_visits.max(1) as f32;
        let visits = self.visits as f32;

        self.avg_score() + exploration_constant * (parent_visits.ln() / visits).sqrt()
    }

    /// Score used to pick the move actually played. Unvisited children are never preferred.
    pub fn final_score(&self, final_selection: FinalSelection) -> f32 {
        if self.visits == 0 {
            return f32::NEG_INFINITY;
        }

        match final_selection {
            FinalSelection::AverageScore => self.avg_score(),
            FinalSelection::Visits => self.visits as f32,
        }
    }
}
