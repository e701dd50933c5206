mod error;
pub mod mcts;
mod node;
mod node_details;
mod node_graph;
pub mod options;
mod search_context;
pub mod selection_strategy;
#[cfg(test)]
mod test_games;

pub use error::*;
pub use mcts::*;
pub use node::*;
pub use node_details::*;
pub use node_graph::*;
pub use options::*;
pub use search_context::*;
pub use selection_strategy::*;
