use std::fmt::Debug;
use std::hash::Hash;

use super::value::Value;

pub type PlayerId = usize;

/// The contract a game implements to be searched.
///
/// The adapter is a single mutable game object. The search repeatedly rewinds it with
/// `restore(snapshot)` so that `restore(snapshot())` must leave the adapter behaviorally
/// indistinguishable from the moment the snapshot was taken, for any number of cycles.
pub trait GameAdapter {
    type Action: Clone + Eq + Debug;
    type Snapshot: Clone;
    type Fingerprint: Hash + Eq + Clone + Debug;
    type Scores: Value;

    fn current_player(&self) -> PlayerId;

    /// All currently legal actions. When `restrict_to_heuristic` is set an adapter may return a
    /// narrower subset of good moves, or the full set if it has no such notion.
    fn legal_actions(&self, restrict_to_heuristic: bool) -> Vec<Self::Action>;

    /// Must be deterministic given the same state and action.
    fn apply_action(&mut self, action: &Self::Action, player: PlayerId);

    fn is_game_over(&self) -> bool;

    /// Only required to be meaningful once `is_game_over` is true.
    fn scores(&self) -> Self::Scores;

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: &Self::Snapshot);

    /// Equal for behaviorally identical states, different otherwise.
    fn canonical_fingerprint(&self) -> Self::Fingerprint;

    fn render(&self) -> Option<String> {
        None
    }
}
