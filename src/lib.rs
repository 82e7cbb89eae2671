//! mapbench - reproducible workload benchmarks for associative containers
//!
//! mapbench runs the same catalogue of workloads (insert, erase, find, mixed
//! insert/erase and rehash) against several map implementations, so their
//! costs can be compared on equal terms.
//!
//! # Quick Start
//!
//! ```
//! use mapbench::{find_miss, RunContext, StdHashMapFamily};
//!
//! let mut ctx = RunContext::new(1_000, 3);
//! find_miss::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
//! assert_eq!(ctx.completed_iterations(), 3);
//! ```
//!
//! # Architecture
//!
//! - `mapbench-core`: the adapter contract and the shipped container families
//! - `mapbench-workload`: action generation, the run context and the bodies
//! - `mapbench-registry`: deferred registration and size sweeps
//!
//! The `mapbench` binary lives in `mapbench-cli` and drives the registry
//! through criterion.

pub use mapbench_core::*;
pub use mapbench_registry::*;
pub use mapbench_workload::*;
