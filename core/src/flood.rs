use ndarray::{Array3, ArrayView3};

use crate::*;

/// Expands `revealed` through zero-count regions with a fixed number of
/// batch-uniform rounds. Mines never qualify as sources and are never
/// revealed, so a revealed mine on a lost board cannot seed propagation even
/// when its own count is zero. Rounds are idempotent after convergence,
/// which lets every board run the same `rounds` regardless of how far its
/// front actually travels.
pub(crate) fn flood_reveal(
    mines: &ArrayView3<'_, bool>,
    counts: &Array3<NeighborCount>,
    revealed: Array3<bool>,
    radius: usize,
    rounds: usize,
) -> Array3<bool> {
    let mut revealed = revealed;
    for _ in 0..rounds {
        revealed = flood_round(mines, counts, &revealed, radius);
    }
    revealed
}

/// One round: a hidden safe cell becomes revealed iff some cell in its
/// radius box is already revealed, safe, and has a zero count. Reads the
/// previous tensor and writes a fresh one, so visit order cannot matter.
fn flood_round(
    mines: &ArrayView3<'_, bool>,
    counts: &Array3<NeighborCount>,
    revealed: &Array3<bool>,
    radius: usize,
) -> Array3<bool> {
    let (_, height, width) = revealed.dim();
    Array3::from_shape_fn(revealed.dim(), |(board, row, col)| {
        if revealed[[board, row, col]] {
            return true;
        }
        if mines[[board, row, col]] {
            return false;
        }
        grid::neighbors((row, col), (height, width), radius).any(|(nr, nc)| {
            revealed[[board, nr, nc]]
                && !mines[[board, nr, nc]]
                && counts[[board, nr, nc]] == 0
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Axis;
    use proptest::prelude::*;

    fn flood(
        mines: &Array3<bool>,
        revealed: Array3<bool>,
        radius: usize,
        rounds: usize,
    ) -> Array3<bool> {
        let counts = counts::neighbor_mine_counts(&mines.view(), radius);
        flood_reveal(&mines.view(), &counts, revealed, radius, rounds)
    }

    fn revealed_at(dim: (usize, usize, usize), cells: &[(usize, usize)]) -> Array3<bool> {
        let mut revealed = Array3::from_elem(dim, false);
        for &(row, col) in cells {
            revealed[[0, row, col]] = true;
        }
        revealed
    }

    #[test]
    fn mine_free_board_floods_entirely() {
        let mines = Array3::from_elem((1, 4, 4), false);
        let out = flood(&mines, revealed_at((1, 4, 4), &[(0, 0)]), 1, 4);
        assert!(out.iter().all(|&r| r));
    }

    #[test]
    fn flood_stops_at_the_numbered_boundary() {
        // mine at cell 3 of a 1x7 strip: cells 0..=1 have zero counts,
        // cell 2 is the numbered boundary, cells 4..=6 stay hidden
        let mut mines = Array3::from_elem((1, 1, 7), false);
        mines[[0, 0, 3]] = true;
        let out = flood(&mines, revealed_at((1, 1, 7), &[(0, 0)]), 1, 7);
        assert_eq!(
            out.as_slice().unwrap(),
            &[true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn touching_a_numbered_cell_floods_nothing() {
        let mut mines = Array3::from_elem((1, 3, 3), false);
        mines[[0, 0, 0]] = true;
        let out = flood(&mines, revealed_at((1, 3, 3), &[(1, 1)]), 1, 3);
        assert_eq!(out.iter().filter(|&&r| r).count(), 1);
    }

    #[test]
    fn a_revealed_mine_never_seeds_propagation() {
        // the lone mine on a 2x2 board has a zero count of its own; once
        // revealed it must not flood its neighbors open
        let mut mines = Array3::from_elem((1, 2, 2), false);
        mines[[0, 0, 0]] = true;
        let out = flood(&mines, revealed_at((1, 2, 2), &[(0, 0)]), 1, 2);
        assert_eq!(out.iter().filter(|&&r| r).count(), 1);
    }

    #[test]
    fn mines_are_never_revealed_by_flooding() {
        let mut mines = Array3::from_elem((1, 5, 5), false);
        mines[[0, 4, 4]] = true;
        let out = flood(&mines, revealed_at((1, 5, 5), &[(0, 0)]), 1, 5);
        assert!(!out[[0, 4, 4]]);
        assert_eq!(out.iter().filter(|&&r| r).count(), 24);
    }

    #[test]
    fn flood_follows_a_corridor_around_a_mine_ring() {
        // mines ring the center at Chebyshev distance 2, leaving the
        // border as one zero corridor; the far side of the corridor is 12
        // in-corridor steps from the touched corner, more than either
        // board side
        let mut mines = Array3::from_elem((1, 9, 9), false);
        for row in 2..=6 {
            for col in 2..=6 {
                if row == 2 || row == 6 || col == 2 || col == 6 {
                    mines[[0, row, col]] = true;
                }
            }
        }
        let out = flood(&mines, revealed_at((1, 9, 9), &[(0, 0)]), 1, 81);
        assert!(out[[0, 8, 4]]);
        assert!(!out[[0, 4, 4]]);
        assert_eq!(out.iter().filter(|&&r| r).count(), 56);
    }

    #[test]
    fn extra_rounds_change_nothing_after_convergence() {
        let mut mines = Array3::from_elem((1, 4, 6), false);
        mines[[0, 2, 2]] = true;
        let seed = revealed_at((1, 4, 6), &[(0, 5)]);
        let converged = flood(&mines, seed.clone(), 1, 6);
        let overshot = flood(&mines, seed, 1, 20);
        assert_eq!(converged, overshot);
    }

    #[test]
    fn boards_flood_independently() {
        let mut mines = Array3::from_elem((2, 3, 3), false);
        mines[[1, 1, 1]] = true;
        let mut revealed = Array3::from_elem((2, 3, 3), false);
        revealed[[0, 0, 0]] = true;
        let out = flood(&mines, revealed, 1, 3);
        assert!(out.index_axis(Axis(0), 0).iter().all(|&r| r));
        assert!(out.index_axis(Axis(0), 1).iter().all(|&r| !r));
    }

    proptest! {
        #[test]
        fn flooding_converges_within_the_round_budget(
            seed in any::<u64>(),
            touch in 0usize..36,
        ) {
            let config = BoardConfig {
                height: 6,
                width: 6,
                mine_prob: 0.2,
                context_radius: 1,
            };
            let mines = BernoulliGenerator::new(seed).generate(&config, 2);
            let counts = counts::neighbor_mine_counts(&mines.view(), 1);
            let mut touched = Array3::from_elem((2, 6, 6), false);
            let (row, col) = (touch / 6, touch % 6);
            touched[[0, row, col]] = true;
            touched[[1, row, col]] = true;

            let rounds = config.flood_rounds();
            let converged = flood_reveal(&mines.view(), &counts, touched, 1, rounds);
            let overshot = flood_reveal(&mines.view(), &counts, converged.clone(), 1, rounds);
            prop_assert_eq!(&converged, &overshot);

            // only the touched cell may sit on a revealed mine
            for ((board, r, c), &open) in converged.indexed_iter() {
                if open && mines[[board, r, c]] {
                    prop_assert_eq!((r, c), (row, col));
                }
            }
        }
    }
}
