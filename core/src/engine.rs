use ndarray::{Array1, Array2, Array3, Array4, Axis, Zip};

use crate::*;

/// Batched lockstep Minesweeper engine. Holds configuration only; every
/// method is a pure function of its inputs, so one engine can drive any
/// number of concurrent rollouts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatchEnv {
    config: BoardConfig,
    rewards: RewardConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepOutput {
    pub state: BatchedState,
    /// Per-board reward for this transition, 0.0 on boards that were
    /// already finished.
    pub reward: Array1<f32>,
    /// Mirrors `state.done()` so the common poll needs no extra call.
    pub done: Array1<bool>,
}

impl BatchEnv {
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_rewards(config, RewardConfig::default())
    }

    pub fn with_rewards(config: BoardConfig, rewards: RewardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rewards })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }

    /// Deals a fresh batch of fully hidden boards. The same seed deals the
    /// same boards, and board `i` is the same board at any batch size.
    /// There is no first-click safety: the very first reveal can hit a mine.
    pub fn reset(&self, seed: u64, batch_size: usize) -> Result<BatchedState> {
        if batch_size == 0 {
            return Err(EnvError::EmptyBatch);
        }
        let mines = BernoulliGenerator::new(seed).generate(&self.config, batch_size);
        Ok(BatchedState::from_mines(mines))
    }

    /// Advances every board by one reveal action, given as a row-major flat
    /// cell index per board. Finished boards ignore their entry entirely;
    /// on every live board the action must address an in-range hidden cell,
    /// otherwise the whole step fails upfront and no board moves.
    pub fn step(&self, state: &BatchedState, actions: &[usize]) -> Result<StepOutput> {
        let (batch, height, width) = state.dim();
        debug_assert_eq!((height, width), (self.config.height, self.config.width));
        if actions.len() != batch {
            return Err(EnvError::ActionCountMismatch {
                expected: batch,
                got: actions.len(),
            });
        }

        let cells = height * width;
        let mines = state.mines();
        let revealed_before = state.revealed();
        let done_before = state.done();
        let won_before = state.won();

        // reject bad actions before anything moves
        for (board, &action) in actions.iter().enumerate() {
            if done_before[board] {
                continue;
            }
            if action >= cells {
                return Err(EnvError::ActionOutOfRange {
                    board,
                    action,
                    cells,
                });
            }
            let (row, col) = grid::unflatten(action, width);
            if revealed_before[[board, row, col]] {
                return Err(EnvError::ActionAlreadyRevealed { board, action });
            }
        }

        let counts = counts::neighbor_mine_counts(&mines, self.config.context_radius);

        // scatter the touched cell of every live board
        let mut touched = revealed_before.to_owned();
        let mut hit_mine = Array1::from_elem(batch, false);
        for (board, &action) in actions.iter().enumerate() {
            if done_before[board] {
                continue;
            }
            let (row, col) = grid::unflatten(action, width);
            touched[[board, row, col]] = true;
            hit_mine[board] = mines[[board, row, col]];
        }

        let flooded = flood::flood_reveal(
            &mines,
            &counts,
            touched,
            self.config.context_radius,
            self.config.flood_rounds(),
        );

        let newly_safe = Zip::from(&flooded)
            .and(&revealed_before)
            .and(&mines)
            .map_collect(|&now, &before, &mine| u32::from(now && !before && !mine))
            .sum_axis(Axis(2))
            .sum_axis(Axis(1));
        let hidden_safe = Zip::from(&flooded)
            .and(&mines)
            .map_collect(|&now, &mine| u32::from(!now && !mine))
            .sum_axis(Axis(2))
            .sum_axis(Axis(1));

        let won_now = Zip::from(&done_before)
            .and(&hit_mine)
            .and(&hidden_safe)
            .map_collect(|&was_done, &hit, &left| !was_done && !hit && left == 0);
        let done_after = Zip::from(&done_before)
            .and(&hit_mine)
            .and(&won_now)
            .map_collect(|&was_done, &hit, &won| was_done || hit || won);
        let won_after = Zip::from(&won_before)
            .and(&won_now)
            .map_collect(|&was, &now| was || now);

        let shaping = self.rewards;
        let reward = Zip::from(&done_before)
            .and(&hit_mine)
            .and(&newly_safe)
            .and(&won_now)
            .map_collect(|&was_done, &hit, &newly, &won| {
                if was_done {
                    0.0
                } else if hit {
                    shaping.loss_penalty
                } else {
                    let bonus = if won { shaping.win_bonus } else { 0.0 };
                    newly as f32 * shaping.reveal_reward + bonus
                }
            });

        let state = state.advance(flooded, done_after.clone(), won_after);
        Ok(StepOutput {
            state,
            reward,
            done: done_after,
        })
    }

    /// Per-board legality of every flat cell index, shaped
    /// `(batch, height * width)`: true iff the board is live and the cell is
    /// still hidden, exactly the actions [`step`](Self::step) accepts.
    pub fn legal_mask(&self, state: &BatchedState) -> Array2<bool> {
        let (batch, height, width) = state.dim();
        debug_assert_eq!((height, width), (self.config.height, self.config.width));
        let revealed = state.revealed();
        let done = state.done();
        Array2::from_shape_fn((batch, height * width), |(board, cell)| {
            let (row, col) = grid::unflatten(cell, width);
            !done[board] && !revealed[[board, row, col]]
        })
    }

    /// Agent-visible observation tensor, shaped
    /// `(batch, OBS_CHANNELS, height, width)`. Hidden cells look identical
    /// whether or not they hold a mine.
    pub fn observe(&self, state: &BatchedState) -> Array4<f32> {
        let (_, height, width) = state.dim();
        debug_assert_eq!((height, width), (self.config.height, self.config.width));
        let mines = state.mines();
        let counts = counts::neighbor_mine_counts(&mines, self.config.context_radius);
        obs::encode(
            &mines,
            &state.revealed(),
            &counts,
            self.config.neighborhood_size() as f32,
        )
    }

    /// Per-cell classification for rendering and evaluation, derived on
    /// demand.
    pub fn cell_states(&self, state: &BatchedState) -> Array3<CellState> {
        let mines = state.mines();
        let revealed = state.revealed();
        let counts = counts::neighbor_mine_counts(&mines, self.config.context_radius);
        Zip::from(&revealed)
            .and(&mines)
            .and(&counts)
            .map_collect(|&r, &mine, &count| {
                if !r {
                    CellState::Hidden
                } else if mine {
                    CellState::Exploded
                } else {
                    CellState::Revealed(count)
                }
            })
    }
}
