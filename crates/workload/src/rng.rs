//! Seeded randomness for reproducible workloads
//!
//! Every stochastic choice in a workload derives from one of the seeds below.
//! A fresh generator is created at the start of each body's setup phase, so
//! two runs of the same body see identical key orders.

use mapbench_core::Key;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seed for key permutations used by the benchmark bodies
pub const WORKLOAD_SEED: u64 = 0;

/// Seed for action sequence generation
pub const ACTION_SEED: u64 = 0;

/// Create the generator a body draws from
pub fn workload_rng() -> StdRng {
    StdRng::seed_from_u64(WORKLOAD_SEED)
}

/// Refill `keys` with `0..count` and shuffle them
///
/// The buffer is reused across iterations to keep allocation out of setup.
pub fn fill_shuffled<K: Key>(keys: &mut Vec<K>, count: usize, rng: &mut StdRng) {
    keys.clear();
    keys.extend((0..count).map(K::from_index));
    keys.shuffle(rng);
}
