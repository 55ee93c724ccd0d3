use super::*;

/// Purely random per-cell Bernoulli placement. Board `i` draws from a stream
/// seeded with `seed ^ i`, so a board's layout depends only on the seed and
/// its index, never on the batch size it was generated in.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for BernoulliGenerator {
    fn generate(&self, config: &BoardConfig, batch_size: usize) -> Array3<bool> {
        use rand::prelude::*;

        let p = config.mine_prob;
        if p == 0.0 || p == 1.0 {
            log::warn!("Degenerate mine probability {}, every board is trivial", p);
        }

        let cells = config.total_cells();
        let mut layout = Vec::with_capacity(batch_size * cells);
        for board in 0..batch_size {
            let mut rng = SmallRng::seed_from_u64(self.seed ^ board as u64);
            layout.extend((0..cells).map(|_| rng.random::<f64>() < p));
        }

        Array3::from_shape_vec((batch_size, config.height, config.width), layout)
            .expect("layout length should match the batch shape")
    }
}
