//! Benchmark descriptors
//!
//! A descriptor pairs a human-readable name with a body and the sweep it runs
//! across. Descriptors are immutable once built and are shared out of the
//! registry as `Arc<Descriptor>`.

use std::sync::Arc;

use mapbench_core::Result;
use mapbench_workload::RunContext;

use crate::sweep::Sweep;

/// A benchmark body after monomorphization
///
/// Bodies may be invoked many times, once per harness sample, so they must be
/// callable through a shared reference.
pub type BenchFn = Arc<dyn Fn(&mut RunContext) -> Result<()> + Send + Sync>;

/// A registered benchmark
#[derive(Clone)]
pub struct Descriptor {
    name: String,
    body: BenchFn,
    sweep: Sweep,
}

impl Descriptor {
    /// Create a descriptor running across the standard sweep
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut RunContext) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
            sweep: Sweep::Standard,
        }
    }

    /// Create a descriptor running across the short sweep
    pub fn new_short<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut RunContext) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(name, body).with_sweep(Sweep::Short)
    }

    /// Replace the sweep
    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Name, e.g. `Find_Miss<i64, i64, std::HashMap>`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sweep this descriptor runs across
    pub fn sweep(&self) -> Sweep {
        self.sweep
    }

    /// True for descriptors on the short sweep
    pub fn is_short_form(&self) -> bool {
        self.sweep == Sweep::Short
    }

    /// Run the body once against `ctx`
    pub fn run(&self, ctx: &mut RunContext) -> Result<()> {
        (self.body)(ctx)
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("sweep", &self.sweep)
            .finish()
    }
}
