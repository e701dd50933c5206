use engine::PlayerId;
use thiserror::Error;

/// Errors raised by the search.
///
/// Adapter contract violations mean the statistics can no longer be trusted, so they end the
/// turn rather than being absorbed.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Adapter reported no legal actions for a state that is not game over (depth {depth})")]
    NoLegalActions { depth: usize },

    #[error("Restoring the snapshot did not reproduce the state it was taken from")]
    RestoreMismatch,

    #[error("The search was asked to decide for player {expected} but player {actual} is to move")]
    PlayerMismatch { expected: PlayerId, actual: PlayerId },

    #[error("The game state does not match the fingerprint of the search root")]
    RootMismatch,

    #[error("The root has no children to choose from. Run at least one simulation first")]
    NoChildren,

    #[error("The selected node is not reachable from the search root")]
    NoPath,
}
