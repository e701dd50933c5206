use std::str::FromStr;

use anyhow::{anyhow, Error};
use log::debug;
use serde::{Deserialize, Serialize};

/// How the number of simulations changes from one turn to the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationSchedule {
    /// The same number every turn.
    Constant,
    /// Half of the previous turn's number.
    Halve,
    /// The previous turn's number scaled by a factor.
    Decay(f32),
    /// The configured number divided by the turn number.
    Budget,
}

impl SimulationSchedule {
    pub const DEFAULT_DECAY_FACTOR: f32 = 0.9;
}

impl FromStr for SimulationSchedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constant" => Ok(Self::Constant),
            "halve" => Ok(Self::Halve),
            "decay" => Ok(Self::Decay(Self::DEFAULT_DECAY_FACTOR)),
            "budget" => Ok(Self::Budget),
            _ => Err(anyhow!("Unknown simulation schedule: {}", s)),
        }
    }
}

/// Tracks the simulations to run on each turn of one game.
#[derive(Debug, Clone)]
pub struct SimulationBudget {
    schedule: SimulationSchedule,
    simulations: usize,
    min_simulations: usize,
    remaining: f64,
    turn: usize,
}

impl SimulationBudget {
    pub fn new(schedule: SimulationSchedule, simulations: usize, min_simulations: usize) -> Self {
        Self {
            schedule,
            simulations,
            min_simulations,
            remaining: simulations as f64,
            turn: 1,
        }
    }

    /// The one based number of the turn the budget is currently for.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Simulations for the current turn, never fewer than the configured minimum.
    pub fn current(&self) -> usize {
        let simulations = match self.schedule {
            SimulationSchedule::Constant => self.simulations,
            SimulationSchedule::Halve | SimulationSchedule::Decay(_) => self.remaining as usize,
            SimulationSchedule::Budget => self.simulations / self.turn,
        };

        simulations.max(self.min_simulations)
    }

    pub fn advance(&mut self) {
        self.turn += 1;

        match self.schedule {
            SimulationSchedule::Halve => self.remaining /= 2.0,
            SimulationSchedule::Decay(factor) => self.remaining *= factor as f64,
            SimulationSchedule::Constant | SimulationSchedule::Budget => {}
        }

        debug!(
            "Turn {} will run {} simulations",
            self.turn,
            self.current()
        );
    }
}
