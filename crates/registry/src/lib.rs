//! Deferred benchmark registration for mapbench
//!
//! - sweep: run modes and the size lists each descriptor runs across
//! - descriptor: a named benchmark body plus its sweep
//! - registry: the ordered, sealable collection of descriptors
//! - catalogue: the benchmark suite instantiated per container family
//!
//! The entry point registers, then materializes once the run mode is known:
//!
//! ```
//! use mapbench_core::StdHashMapFamily;
//! use mapbench_registry::{register_suite, Registry, RunMode};
//!
//! let registry = Registry::new();
//! register_suite::<StdHashMapFamily>(&registry).unwrap();
//!
//! let benchmarks = registry.materialize(RunMode::Short);
//! assert_eq!(benchmarks.len(), 12);
//! assert_eq!(benchmarks[0].sizes, &[10_000, 250_000]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalogue;
pub mod descriptor;
pub mod registry;
pub mod sweep;

pub use catalogue::{
    register_all_families, register_family_by_name, register_suite, suite, suite_len, SUITE_SIZE,
};
pub use descriptor::{BenchFn, Descriptor};
pub use registry::{register_benchmark, MaterializedBenchmark, Registry, RegistryState};
pub use sweep::{
    sizes, RunMode, Sweep, FULL_SHORT_SIZES, FULL_STANDARD_SIZES, SHORT_SHORT_SIZES,
    SHORT_STANDARD_SIZES,
};
