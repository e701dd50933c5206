use anyhow::{bail, Result};
use log::{debug, info};

use engine::{GameAdapter, PlayerId};
use mcts::{NodeId, SearchEngine};

use crate::{PlayOptions, SimulationBudget};

#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord<A> {
    pub turn: usize,
    pub player: PlayerId,
    pub simulations: usize,
    pub action: A,
}

#[derive(Debug, Clone)]
pub struct GameOutcome<A, S> {
    pub scores: S,
    pub turns: Vec<TurnRecord<A>>,
}

/// Plays one game to the end, searching before every move.
///
/// The search graph lives as long as the driver, so each turn starts from the child chosen on
/// the previous turn together with the statistics already gathered below it.
pub struct TurnDriver<G>
where
    G: GameAdapter,
{
    game: G,
    engine: SearchEngine<G>,
    budget: SimulationBudget,
    current: NodeId,
    max_turns: Option<usize>,
    turns: Vec<TurnRecord<G::Action>>,
}

impl<G> TurnDriver<G>
where
    G: GameAdapter,
{
    pub fn new(game: G, options: PlayOptions) -> Self {
        let mut engine = SearchEngine::new(options.search);
        let current = engine.root_for(&game);
        let budget = SimulationBudget::new(
            options.schedule,
            options.simulations,
            options.min_simulations,
        );

        Self {
            game,
            engine,
            budget,
            current,
            max_turns: options.max_turns,
            turns: Vec::new(),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn engine(&self) -> &SearchEngine<G> {
        &self.engine
    }

    pub fn current_node(&self) -> NodeId {
        self.current
    }

    pub fn turns(&self) -> &[TurnRecord<G::Action>] {
        &self.turns
    }

    /// Searches from the current node, plays the chosen action on the real game and moves the
    /// current node to the matching child. If the game does not reach the child's state the move
    /// is undone and an error returned, leaving the driver as it was before the turn.
    pub fn play_turn(&mut self) -> Result<&TurnRecord<G::Action>> {
        if self.game.is_game_over() {
            bail!("Cannot play a turn, the game is already over");
        }

        let turn = self.budget.turn();
        let player = self.game.current_player();
        let simulations = self.budget.current();

        let (child, action) =
            self.engine
                .run_turn(&mut self.game, self.current, player, simulations)?;

        let before = self.game.snapshot();
        self.game.apply_action(&action, player);

        let fingerprint = self.game.canonical_fingerprint();
        let expected = self.engine.graph().fingerprint(child);
        if fingerprint != *expected {
            // Undo the move so the game still matches the current node.
            self.game.restore(&before);
            bail!(
                "Playing {:?} reached {:?} but the search expected {:?}",
                action,
                fingerprint,
                expected
            );
        }

        info!(
            "Turn {}: player {} played {:?} after {} simulations",
            turn, player, action, simulations
        );

        if let Some(board) = self.game.render() {
            debug!("\n{}", board);
        }

        self.current = child;
        self.budget.advance();
        self.turns.push(TurnRecord {
            turn,
            player,
            simulations,
            action,
        });

        let record = self.turns.len() - 1;
        Ok(&self.turns[record])
    }

    /// Plays turns until the game is over and returns the final scores.
    pub fn play(mut self) -> Result<GameOutcome<G::Action, G::Scores>> {
        while !self.game.is_game_over() {
            if let Some(max_turns) = self.max_turns {
                if self.turns.len() >= max_turns {
                    bail!("The game did not finish within {} turns", max_turns);
                }
            }

            self.play_turn()?;
        }

        info!(
            "Game over after {} turns, search graph holds {} nodes",
            self.turns.len(),
            self.engine.graph().len()
        );

        Ok(GameOutcome {
            scores: self.game.scores(),
            turns: self.turns,
        })
    }
}
