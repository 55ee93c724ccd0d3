use ndarray::{Array3, Array4, ArrayView3, Axis, Zip};

use crate::*;

/// Channels in the observation tensor, in order.
pub const OBS_CHANNELS: usize = 3;
/// 1.0 where the cell is still hidden.
pub const CHANNEL_HIDDEN: usize = 0;
/// Neighbor mine count of revealed safe cells, scaled into `[0, 1]` by the
/// neighborhood size; 0.0 elsewhere.
pub const CHANNEL_COUNT: usize = 1;
/// 1.0 on a revealed mine, the terminal frame of a lost board.
pub const CHANNEL_EXPLODED: usize = 2;

/// Encodes the agent-visible `(batch, channel, height, width)` tensor. A
/// hidden cell contributes `(1, 0, 0)` whether or not it holds a mine.
pub(crate) fn encode(
    mines: &ArrayView3<'_, bool>,
    revealed: &ArrayView3<'_, bool>,
    counts: &Array3<NeighborCount>,
    count_norm: f32,
) -> Array4<f32> {
    let (batch, height, width) = mines.dim();
    let mut obs = Array4::zeros((batch, OBS_CHANNELS, height, width));

    let mut hidden = obs.index_axis_mut(Axis(1), CHANNEL_HIDDEN);
    Zip::from(&mut hidden).and(revealed).for_each(|out, &r| {
        *out = if r { 0.0 } else { 1.0 };
    });

    let mut count = obs.index_axis_mut(Axis(1), CHANNEL_COUNT);
    Zip::from(&mut count)
        .and(revealed)
        .and(mines)
        .and(counts)
        .for_each(|out, &r, &m, &c| {
            *out = if r && !m { f32::from(c) / count_norm } else { 0.0 };
        });

    let mut exploded = obs.index_axis_mut(Axis(1), CHANNEL_EXPLODED);
    Zip::from(&mut exploded)
        .and(revealed)
        .and(mines)
        .for_each(|out, &r, &m| {
            *out = if r && m { 1.0 } else { 0.0 };
        });

    obs
}
