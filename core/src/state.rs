use ndarray::{ArcArray, Array1, Array3, ArrayView1, ArrayView3, Ix3};
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible classification of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed(NeighborCount),
    Exploded,
}

/// Snapshot of a whole batch of boards. Snapshots are values: stepping
/// returns a fresh one and never mutates its input, with the mine layout
/// shared between successive snapshots instead of copied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchedState {
    mines: ArcArray<bool, Ix3>,
    revealed: Array3<bool>,
    done: Array1<bool>,
    won: Array1<bool>,
}

impl BatchedState {
    /// All-hidden starting state over a fixed `(batch, height, width)` mine
    /// layout.
    pub fn from_mines(mines: Array3<bool>) -> Self {
        let dim = mines.dim();
        Self {
            mines: mines.into_shared(),
            revealed: Array3::from_elem(dim, false),
            done: Array1::from_elem(dim.0, false),
            won: Array1::from_elem(dim.0, false),
        }
    }

    pub(crate) fn advance(
        &self,
        revealed: Array3<bool>,
        done: Array1<bool>,
        won: Array1<bool>,
    ) -> Self {
        Self {
            mines: self.mines.clone(),
            revealed,
            done,
            won,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.mines.dim().0
    }

    pub fn height(&self) -> usize {
        self.mines.dim().1
    }

    pub fn width(&self) -> usize {
        self.mines.dim().2
    }

    pub fn dim(&self) -> (usize, usize, usize) {
        self.mines.dim()
    }

    /// Ground-truth mine layout. This is the hidden half of the POMDP;
    /// observations never read it for unrevealed cells.
    pub fn mines(&self) -> ArrayView3<'_, bool> {
        self.mines.view()
    }

    pub fn revealed(&self) -> ArrayView3<'_, bool> {
        self.revealed.view()
    }

    pub fn done(&self) -> ArrayView1<'_, bool> {
        self.done.view()
    }

    /// Set only for boards that finished without revealing a mine, so `won`
    /// implies `done`.
    pub fn won(&self) -> ArrayView1<'_, bool> {
        self.won.view()
    }
}
