use std::collections::HashSet;

use log::{debug, trace};
use rand::prelude::StdRng;
use rand::seq::SliceRandom;

use common::create_rng;
use engine::{GameAdapter, PlayerId, Value};

use crate::{
    BackpropagationPath, EdgeDetails, NodeDetails, NodeId, SearchContext, SearchError,
    SearchGraph, SearchNode, SearchOptions, SelectionMode,
};

/// Monte Carlo tree search over a mutable game adapter.
///
/// The graph is kept for the lifetime of the engine, so a game played with one engine reuses the
/// statistics gathered below the moves actually taken. Each simulation restores the adapter to
/// the turn's root snapshot, selects, expands, rolls out to the end of the game and
/// backpropagates the final scores.
pub struct SearchEngine<G>
where
    G: GameAdapter,
{
    graph: SearchGraph<G::Action, G::Fingerprint>,
    options: SearchOptions,
    rng: StdRng,
}

impl<G> SearchEngine<G>
where
    G: GameAdapter,
{
    pub fn new(options: SearchOptions) -> Self {
        let rng = create_rng(options.seed);

        Self {
            graph: SearchGraph::new(),
            options,
            rng,
        }
    }

    pub fn graph(&self) -> &SearchGraph<G::Action, G::Fingerprint> {
        &self.graph
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// The node for the adapter's current state, created as a root if the state is new.
    pub fn root_for(&mut self, game: &G) -> NodeId {
        self.graph.add_node(
            game.canonical_fingerprint(),
            SearchNode::root(game.current_player()),
        )
    }

    /// Runs `num_simulations` simulations from `root` and returns the child to play together with
    /// the action leading to it. The adapter is left in the state it was in when called.
    pub fn run_turn(
        &mut self,
        game: &mut G,
        root: NodeId,
        root_player: PlayerId,
        num_simulations: usize,
    ) -> Result<(NodeId, G::Action), SearchError> {
        let actual = game.current_player();
        if actual != root_player {
            return Err(SearchError::PlayerMismatch {
                expected: root_player,
                actual,
            });
        }

        if game.canonical_fingerprint() != *self.graph.fingerprint(root) {
            return Err(SearchError::RootMismatch);
        }

        let mut ctx = SearchContext::new(root, game.snapshot());
        let root_visits = self.graph.node(root).visits();

        let outcome = (0..num_simulations).try_for_each(|_| self.simulate(game, &mut ctx));
        game.restore(&ctx.root_snapshot);
        outcome?;

        debug_assert_eq!(
            self.graph.node(root).visits(),
            root_visits + num_simulations,
            "Every simulation must credit the root exactly once"
        );

        let (child, action) = self.best_action(root)?;

        debug!(
            "Searched {} simulations for player {}, graph size {}: {}",
            num_simulations,
            root_player,
            self.graph.len(),
            self.node_details(root)
        );

        Ok((child, action))
    }

    fn simulate(
        &mut self,
        game: &mut G,
        ctx: &mut SearchContext<G::Snapshot>,
    ) -> Result<(), SearchError> {
        game.restore(&ctx.root_snapshot);
        if game.canonical_fingerprint() != *self.graph.fingerprint(ctx.root) {
            return Err(SearchError::RestoreMismatch);
        }

        let selected = self.select_rollout_node(game, ctx)?;

        trace!(
            "Selected node at depth {} after {} steps",
            self.graph.node(selected).depth(),
            ctx.path.len() - 1
        );

        let scores = self.rollout(game)?;
        self.backpropagate(ctx, selected, &scores)
    }

    /// Descends from the turn's root along the best exploring children, applying each action to
    /// `game`, and returns the node to roll out from. Expands the node where the descent stops
    /// unless the game is over there.
    pub fn select_rollout_node(
        &mut self,
        game: &mut G,
        ctx: &mut SearchContext<G::Snapshot>,
    ) -> Result<NodeId, SearchError> {
        ctx.clear();

        let mut current = ctx.root;

        loop {
            if game.is_game_over() {
                return Ok(current);
            }

            if self.graph.node(current).visits() == 0 || !self.graph.has_children(current) {
                break;
            }

            let Some((action, child)) = self.best_exploring_edge(current) else {
                break;
            };

            // Repeating fingerprints would otherwise loop forever.
            if !ctx.push(child) {
                return Ok(current);
            }

            let player = game.current_player();
            game.apply_action(&action, player);
            current = child;
        }

        let unvisited = self.graph.node(current).visits() == 0;

        self.expand_node(game, current)?;

        if unvisited && current != ctx.root {
            return Ok(current);
        }

        let Some((action, child)) = self.best_exploring_edge(current) else {
            return Ok(current);
        };

        if !ctx.push(child) {
            return Ok(current);
        }

        let player = game.current_player();
        game.apply_action(&action, player);

        Ok(child)
    }

    /// Adds one child per legal action of the state `game` is currently in, which must be the
    /// state of `node`. A node that already has children is left untouched.
    pub fn expand_node(&mut self, game: &mut G, node: NodeId) -> Result<(), SearchError> {
        if self.graph.has_children(node) {
            return Ok(());
        }

        let depth = self.graph.node(node).depth();
        let actions = game.legal_actions(false);

        if actions.is_empty() {
            return if game.is_game_over() {
                Ok(())
            } else {
                Err(SearchError::NoLegalActions { depth })
            };
        }

        let snapshot = game.snapshot();
        let player = game.current_player();

        for action in actions {
            game.apply_action(&action, player);
            let fingerprint = game.canonical_fingerprint();
            game.restore(&snapshot);

            self.graph.add_child(
                node,
                fingerprint,
                SearchNode::new(player, depth + 1, action.clone()),
                action,
            );
        }

        Ok(())
    }

    /// Plays uniformly random actions until the game is over and returns the final scores.
    pub fn rollout(&mut self, game: &mut G) -> Result<G::Scores, SearchError> {
        let mut depth = 0;

        while !game.is_game_over() {
            let mut actions = if self.options.heuristic_rollouts {
                game.legal_actions(true)
            } else {
                Vec::new()
            };

            if actions.is_empty() {
                if self.options.heuristic_rollouts {
                    trace!("No heuristic actions at rollout depth {}, using all", depth);
                }

                actions = game.legal_actions(false);
            }

            let action = actions
                .choose(&mut self.rng)
                .ok_or(SearchError::NoLegalActions { depth })?
                .clone();

            let player = game.current_player();
            game.apply_action(&action, player);
            depth += 1;
        }

        Ok(game.scores())
    }

    /// Credits one visit and the owner's score to every node between the turn's root and
    /// `selected`.
    pub fn backpropagate(
        &mut self,
        ctx: &SearchContext<G::Snapshot>,
        selected: NodeId,
        scores: &G::Scores,
    ) -> Result<(), SearchError> {
        match self.options.backpropagation {
            BackpropagationPath::ShortestPath
                if ctx.path.last() == Some(&selected) && self.graph.is_only_path(&ctx.path) =>
            {
                self.credit(&ctx.path, scores);
            }
            BackpropagationPath::ShortestPath => {
                let path = self
                    .graph
                    .path_between(ctx.root, selected)
                    .ok_or(SearchError::NoPath)?;

                self.credit(&path, scores);
            }
            BackpropagationPath::Descent => {
                debug_assert_eq!(ctx.path.last(), Some(&selected));
                self.credit(&ctx.path, scores);
            }
        }

        Ok(())
    }

    fn credit(&mut self, path: &[NodeId], scores: &G::Scores) {
        for &id in path {
            let node = self.graph.node_mut(id);
            let score = scores.get_value_for_player(node.owner());
            node.record(score);
        }
    }

    fn best_exploring_edge(&mut self, id: NodeId) -> Option<(G::Action, NodeId)> {
        let mode = SelectionMode::Explore {
            exploration_constant: self.options.exploration_constant,
        };

        self.graph
            .best_edge(id, mode, self.options.tie_break, &mut self.rng)
            .map(|edge| (edge.action().clone(), edge.child()))
    }

    /// The child to play from `root` according to the configured final selection.
    pub fn best_action(&mut self, root: NodeId) -> Result<(NodeId, G::Action), SearchError> {
        let mode = SelectionMode::Final(self.options.final_selection);

        self.graph
            .best_edge(root, mode, self.options.tie_break, &mut self.rng)
            .map(|edge| (edge.child(), edge.action().clone()))
            .ok_or(SearchError::NoChildren)
    }

    /// Statistics of `id` and its children, ordered by final selection score. Children with equal
    /// scores keep their expansion order.
    pub fn node_details(&self, id: NodeId) -> NodeDetails<G::Action> {
        let node = self.graph.node(id);
        let final_selection = self.options.final_selection;

        let mut children: Vec<_> = self
            .graph
            .edges(id)
            .iter()
            .map(|edge| {
                let child = self.graph.node(edge.child());
                let details = EdgeDetails {
                    action: edge.action().clone(),
                    child: edge.child(),
                    visits: child.visits(),
                    avg_score: child.avg_score(),
                    ucb: child.ucb_score(node.visits(), self.options.exploration_constant),
                };

                (child.final_score(final_selection), details)
            })
            .collect();

        children.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        NodeDetails {
            visits: node.visits(),
            avg_score: node.avg_score(),
            children: children.into_iter().map(|(_, details)| details).collect(),
        }
    }

    /// The line of best visited children from `id`, at most `max_depth` long.
    pub fn principal_variation(&self, id: NodeId, max_depth: usize) -> Vec<EdgeDetails<G::Action>> {
        let mut line = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = id;

        while line.len() < max_depth {
            let Some(best) = self.node_details(current).children.into_iter().next() else {
                break;
            };

            if best.visits == 0 || !seen.insert(best.child) {
                break;
            }

            current = best.child;
            line.push(best);
        }

        line
    }
}
