//! Workload engine for mapbench
//!
//! This crate turns the adapter contract from `mapbench-core` into timed
//! workloads:
//! - actions: deterministic interleaved insert/erase sequence generation
//! - context: the RunContext seam between bodies and the iteration harness
//! - bodies: the workload catalogue (insert, erase, find, mixed, rehash)
//! - rng: fixed seeds and shuffling helpers
//!
//! Bodies know nothing about the harness that drives them. They receive a
//! [`RunContext`], take iteration tokens from it, and wrap exactly the
//! operations under test in [`RunContext::measure`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod bodies;
pub mod context;
pub mod rng;

pub use actions::{generate_actions, verify_actions};
pub use bodies::{
    erase_random, erase_sequential, find_half_hit, find_miss, find_random, find_sequential,
    insert_erase_random, insert_random, insert_sequential, rehash, Workload,
    REHASH_MIN_PROBES, REHASH_SPIKE_FACTOR, REHASH_WARMUP,
};
pub use context::RunContext;
pub use rng::{fill_shuffled, workload_rng, ACTION_SEED, WORKLOAD_SEED};
