use ndarray::{Array3, ArrayView3};

use crate::*;

/// Mines inside the Chebyshev-radius box of every cell, the cell itself
/// excluded. Pure function of the layout, recomputed on demand rather than
/// cached in state.
pub(crate) fn neighbor_mine_counts(
    mines: &ArrayView3<'_, bool>,
    radius: usize,
) -> Array3<NeighborCount> {
    let (batch, height, width) = mines.dim();
    Array3::from_shape_fn((batch, height, width), |(board, row, col)| {
        grid::neighbors((row, col), (height, width), radius)
            .filter(|&(nr, nc)| mines[[board, nr, nc]])
            .count()
            .try_into()
            .unwrap()
    })
}
