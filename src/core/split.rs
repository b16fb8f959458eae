use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One breed's images partitioned into the three output splits.
#[derive(Debug, Clone, Default)]
pub struct SplitSets {
    pub train: Vec<PathBuf>,
    pub validation: Vec<PathBuf>,
    pub test: Vec<PathBuf>,
}

impl SplitSets {
    pub fn total(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }
}

/// Number of items carved off for a fractional holdout.
///
/// Ceiling rounding: a 30% holdout of 20 items is exactly 6, of 10 items 3,
/// of 11 items 4.
fn carve_size(total: usize, fraction: f64) -> usize {
    ((total as f64) * fraction).ceil() as usize
}

/// Deterministic two-stage split.
///
/// Stage one shuffles the pool with an RNG seeded from `seed` and carves off
/// the holdout; stage two re-seeds, shuffles the holdout, and carves off the
/// test set, leaving the remainder as validation. Exact membership is a
/// function of the seed alone; exact target proportions are not guaranteed on
/// small counts because of rounding.
pub fn split_two_stage(
    images: &[PathBuf],
    holdout_fraction: f64,
    test_fraction: f64,
    seed: u64,
) -> SplitSets {
    if images.is_empty() {
        return SplitSets::default();
    }

    let mut pool: Vec<PathBuf> = images.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    pool.shuffle(&mut rng);

    let holdout_len = carve_size(pool.len(), holdout_fraction).min(pool.len());
    let mut holdout = pool.split_off(pool.len() - holdout_len);
    let train = pool;

    let mut rng = StdRng::seed_from_u64(seed);
    holdout.shuffle(&mut rng);

    let test_len = carve_size(holdout.len(), test_fraction).min(holdout.len());
    let test = holdout.split_off(holdout.len() - test_len);
    let validation = holdout;

    SplitSets {
        train,
        validation,
        test,
    }
}
