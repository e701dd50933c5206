use anyhow::{ensure, Result};
use common::{Config, ConfigLoader};
use mcts::SearchOptions;
use serde::{Deserialize, Serialize};

use crate::SimulationSchedule;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayOptions {
    pub search: SearchOptions,
    pub simulations: usize,
    pub schedule: SimulationSchedule,
    pub min_simulations: usize,
    pub max_turns: Option<usize>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            simulations: 1000,
            schedule: SimulationSchedule::Constant,
            min_simulations: 1,
            max_turns: None,
        }
    }
}

impl Config for PlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let decay_factor = config
            .get("decay_factor")
            .and_then(|v| v.as_f32())
            .unwrap_or(SimulationSchedule::DEFAULT_DECAY_FACTOR);

        ensure!(
            decay_factor > 0.0 && decay_factor <= 1.0,
            "decay_factor must be within (0, 1], got {}",
            decay_factor
        );

        let schedule = match config
            .get("schedule")
            .and_then(|v| v.as_string())
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(defaults.schedule)
        {
            SimulationSchedule::Decay(_) => SimulationSchedule::Decay(decay_factor),
            schedule => schedule,
        };

        Ok(Self {
            search: SearchOptions::load(config)?,
            simulations: config
                .get("simulations")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.simulations),
            schedule,
            min_simulations: config
                .get("min_simulations")
                .and_then(|v| v.as_usize())
                .unwrap_or(defaults.min_simulations)
                .max(1),
            max_turns: config.get("max_turns").and_then(|v| v.as_usize()),
        })
    }
}
