use ndarray::Array3;

use crate::*;

pub use bernoulli::*;

mod bernoulli;

pub trait MineGenerator {
    /// One `(batch, height, width)` layout, `true` where a mine sits.
    fn generate(&self, config: &BoardConfig, batch_size: usize) -> Array3<bool>;
}
