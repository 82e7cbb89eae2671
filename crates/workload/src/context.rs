//! Run context handed to benchmark bodies
//!
//! The context is the seam between a body and whatever iteration harness
//! drives it. It carries:
//! - the input size for this run (`range`)
//! - a finite, non-restartable supply of iteration tokens
//! - a scoped measurement window: only closures passed to [`RunContext::measure`]
//!   are timed
//! - explicitly injected durations, for bodies that time themselves
//!
//! # Usage
//!
//! ```
//! use mapbench_workload::RunContext;
//!
//! let mut ctx = RunContext::new(1000, 3);
//! let mut total = 0u64;
//! while ctx.next_iteration() {
//!     // setup, untimed
//!     let keys: Vec<u64> = (0..ctx.range() as u64).collect();
//!     // measured
//!     total += ctx.measure(|| keys.iter().sum::<u64>());
//! }
//! assert_eq!(ctx.completed_iterations(), 3);
//! assert!(total > 0);
//! ```

use std::time::{Duration, Instant};

/// Per-run state shared between a body and its iteration harness
#[derive(Debug)]
pub struct RunContext {
    range: usize,
    remaining: u64,
    completed: u64,
    elapsed: Duration,
    recorded: u64,
}

impl RunContext {
    /// Create a context for `iterations` timed iterations at input size `range`
    pub fn new(range: usize, iterations: u64) -> Self {
        Self {
            range,
            remaining: iterations,
            completed: 0,
            elapsed: Duration::ZERO,
            recorded: 0,
        }
    }

    /// Input size for this run
    #[inline]
    pub fn range(&self) -> usize {
        self.range
    }

    /// Take the next iteration token
    ///
    /// Returns `true` exactly as many times as iterations were requested, then
    /// `false` forever.
    #[inline]
    pub fn next_iteration(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.completed += 1;
        true
    }

    /// Run `f` inside the measurement window
    ///
    /// Only the time spent in `f` is added to the elapsed total.
    #[inline]
    pub fn measure<R, F: FnOnce() -> R>(&mut self, f: F) -> R {
        let start = Instant::now();
        let result = f();
        self.elapsed += start.elapsed();
        result
    }

    /// Inject a measured duration computed by the body itself
    pub fn record(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.recorded += 1;
    }

    /// Total time spent inside measurement windows plus recorded durations
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of iteration tokens handed out so far
    pub fn completed_iterations(&self) -> u64 {
        self.completed
    }

    /// Number of durations injected with [`RunContext::record`]
    pub fn recorded_samples(&self) -> u64 {
        self.recorded
    }
}
