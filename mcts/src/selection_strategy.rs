use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// How the move actually played is picked among the root's children once searching is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSelection {
    AverageScore,
    /// More robust against noisy scores.
    Visits,
}

/// How children with equal scores are separated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first child in expansion order wins.
    FirstEncountered,
    /// Uniformly among the tied children, drawn from the search's seeded rng.
    Random,
}

/// Which nodes receive the result of a rollout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackpropagationPath {
    /// Shortest path in the graph from the turn's root to the rolled out node.
    ShortestPath,
    /// The nodes the selection actually walked through.
    Descent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionMode {
    Explore { exploration_constant: f32 },
    Final(FinalSelection),
}

impl FromStr for FinalSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average_score" | "score" => Ok(Self::AverageScore),
            "visits" => Ok(Self::Visits),
            _ => Err(anyhow!("Unknown final selection: {}", s)),
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "first_encountered" => Ok(Self::FirstEncountered),
            "random" => Ok(Self::Random),
            _ => Err(anyhow!("Unknown tie break: {}", s)),
        }
    }
}

impl FromStr for BackpropagationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortest_path" => Ok(Self::ShortestPath),
            "descent" => Ok(Self::Descent),
            _ => Err(anyhow!("Unknown backpropagation path: {}", s)),
        }
    }
}
