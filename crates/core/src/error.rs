//! Error type shared by every mapbench crate
//!
//! One enum covers verification failures raised by benchmark bodies and the
//! registration mistakes caught by the registry.
//!
//! Every variant describes a defect in the harness or in the container under
//! test. Nothing here is transient: callers that run benchmarks treat any
//! error as fatal and stop the run.

use thiserror::Error;

/// Result type alias for mapbench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the benchmark harness
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lookup or erase count did not match what the body set up
    #[error("{body}: expected {expected} got {actual}")]
    Verification {
        /// Benchmark body that ran the check
        body: &'static str,
        /// Count implied by the setup phase
        expected: u64,
        /// Count observed in the measured phase
        actual: u64,
    },

    /// Replaying an action sequence did not insert and erase every id once
    #[error("replay: expected {expected} got {inserted} inserted, {deleted} deleted")]
    ReplayMismatch {
        /// Number of ids in the sequence
        expected: u64,
        /// Successful inserts observed
        inserted: u64,
        /// Successful erases observed
        deleted: u64,
    },

    /// Lookups of keys that were never inserted found something
    #[error("{body}: should not be able to find any element, found {found}")]
    UnexpectedHits {
        /// Benchmark body that ran the check
        body: &'static str,
        /// Number of lookups that hit
        found: u64,
    },

    /// A generated action sequence violates its ordering invariants
    #[error("Invalid action sequence: {0}")]
    InvalidSequence(String),

    /// A benchmark with the same name is already registered
    #[error("Benchmark already registered: {0}")]
    DuplicateBenchmark(String),

    /// Registration attempted after the registry was materialized
    #[error("Registry is sealed, cannot register {0}")]
    RegistrySealed(String),

    /// A container family name that no adapter is shipped for
    #[error("Unknown container family: {0}")]
    UnknownFamily(String),
}

impl Error {
    /// Build a verification error from element counts
    pub fn verification(body: &'static str, expected: usize, actual: usize) -> Self {
        Error::Verification {
            body,
            expected: expected as u64,
            actual: actual as u64,
        }
    }
}
