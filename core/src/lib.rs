use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use obs::*;
pub use state::*;

mod counts;
mod engine;
mod error;
mod flood;
mod generator;
mod grid;
mod obs;
mod state;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    /// Probability that any given cell holds a mine, within `[0, 1]`; the
    /// endpoints are accepted but make every episode trivial.
    pub mine_prob: f64,
    /// Chebyshev radius of the mine-count neighborhood, at least 1. Radius 1
    /// is the classic 8-cell neighborhood.
    pub context_radius: usize,
}

impl BoardConfig {
    pub fn new(height: usize, width: usize, mine_prob: f64, context_radius: usize) -> Result<Self> {
        let config = Self {
            height,
            width,
            mine_prob,
            context_radius,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(EnvError::EmptyBoard);
        }
        let cells = self.height.checked_mul(self.width).unwrap_or(usize::MAX);
        if cells > MAX_CELLS {
            return Err(EnvError::BoardTooLarge {
                cells,
                max: MAX_CELLS,
            });
        }
        if !(0.0..=1.0).contains(&self.mine_prob) {
            return Err(EnvError::MineProbOutOfRange(self.mine_prob));
        }
        if self.context_radius == 0 {
            return Err(EnvError::ZeroRadius);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> usize {
        self.height * self.width
    }

    /// Cells inside the Chebyshev box around a cell, the cell itself
    /// excluded; normalizes the count channel of the observation.
    pub const fn neighborhood_size(&self) -> usize {
        let side = self.context_radius.saturating_mul(2).saturating_add(1);
        side.saturating_mul(side) - 1
    }

    /// Propagation rounds after which any flood front must have converged:
    /// a round either reveals at least one new cell or leaves the set
    /// fixed, and a board has only `height * width` cells. `max(height,
    /// width)` is not enough: a zero corridor can wind around mine walls.
    pub const fn flood_rounds(&self) -> usize {
        self.total_cells()
    }
}

impl Default for BoardConfig {
    /// 16x16 board with 40 expected mines and the 8-cell neighborhood.
    fn default() -> Self {
        Self {
            height: 16,
            width: 16,
            mine_prob: 0.15625,
            context_radius: 1,
        }
    }
}

/// Reward shaping applied by [`BatchEnv::step`]; magnitudes are a training
/// concern, not part of the game rules.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Granted once per safe cell a step newly reveals, floods included.
    pub reveal_reward: f32,
    /// Granted on top when a step reveals the last hidden safe cell.
    pub win_bonus: f32,
    /// Granted when a step reveals a mine. Negative by convention.
    pub loss_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            reveal_reward: 0.1,
            win_bonus: 1.0,
            loss_penalty: -1.0,
        }
    }
}
