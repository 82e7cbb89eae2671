//! Run modes and input-size sweeps
//!
//! | mode | standard sweep | short sweep |
//! |------|----------------|-------------|
//! | full | 1000 .. 1000000 (8 sizes) | 1000 .. 100000 (7 sizes) |
//! | short | 10000, 250000 | 1024, 8192 |

/// How much of the size space a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunMode {
    /// Every size of every sweep
    #[default]
    Full,
    /// Two representative sizes per sweep, for smoke testing
    Short,
}

impl RunMode {
    /// Mode selected by the `--short` flag
    pub fn from_short_flag(short: bool) -> Self {
        if short {
            RunMode::Short
        } else {
            RunMode::Full
        }
    }
}

/// Which list of sizes a descriptor runs across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sweep {
    /// The default, longer list
    #[default]
    Standard,
    /// A shorter list for workloads that are costlier per input size
    Short,
}

/// Standard-sweep sizes in full mode
pub const FULL_STANDARD_SIZES: [usize; 8] = [
    1_000, 10_000, 50_000, 100_000, 250_000, 500_000, 750_000, 1_000_000,
];

/// Short-sweep sizes in full mode
pub const FULL_SHORT_SIZES: [usize; 7] = [1_000, 5_000, 10_000, 25_000, 50_000, 75_000, 100_000];

/// Standard-sweep sizes in short mode
pub const SHORT_STANDARD_SIZES: [usize; 2] = [10_000, 250_000];

/// Short-sweep sizes in short mode
pub const SHORT_SHORT_SIZES: [usize; 2] = [1_024, 8_192];

/// Input sizes for a sweep under a run mode
pub fn sizes(mode: RunMode, sweep: Sweep) -> &'static [usize] {
    match (mode, sweep) {
        (RunMode::Full, Sweep::Standard) => &FULL_STANDARD_SIZES,
        (RunMode::Full, Sweep::Short) => &FULL_SHORT_SIZES,
        (RunMode::Short, Sweep::Standard) => &SHORT_STANDARD_SIZES,
        (RunMode::Short, Sweep::Short) => &SHORT_SHORT_SIZES,
    }
}
