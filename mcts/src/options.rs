use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use crate::{BackpropagationPath, FinalSelection, TieBreak};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchOptions {
    pub exploration_constant: f32,
    pub final_selection: FinalSelection,
    pub tie_break: TieBreak,
    pub heuristic_rollouts: bool,
    pub backpropagation: BackpropagationPath,
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            exploration_constant: std::f32::consts::SQRT_2,
            final_selection: FinalSelection::AverageScore,
            tie_break: TieBreak::FirstEncountered,
            heuristic_rollouts: false,
            backpropagation: BackpropagationPath::ShortestPath,
            seed: None,
        }
    }
}

impl Config for SearchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            exploration_constant: config
                .get("exploration_constant")
                .and_then(|v| v.as_f32())
                .unwrap_or(defaults.exploration_constant),
            final_selection: config
                .get("final_selection")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.final_selection),
            tie_break: config
                .get("tie_break")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.tie_break),
            heuristic_rollouts: config
                .get("heuristic_rollouts")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.heuristic_rollouts),
            backpropagation: config
                .get("backpropagation")
                .and_then(|v| v.as_string())
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(defaults.backpropagation),
            seed: config.get("seed").and_then(|v| v.as_u64()),
        })
    }
}
