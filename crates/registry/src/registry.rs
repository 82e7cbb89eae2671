//! Deferred Benchmark Registry
//!
//! Holds every benchmark descriptor the integrator wants measured, in
//! registration order, until the entry point knows the run mode.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty --register--> Populated --materialize--> Materialized --mark_executed--> Executed
//! ```
//!
//! Registration is only legal before materialization. Materializing pairs each
//! descriptor with the sizes of its sweep under the selected run mode and
//! seals the registry.
//!
//! ## Registration
//!
//! Catalogue entries register explicitly, before the entry point does any
//! real work:
//!
//! ```ignore
//! use mapbench_registry::{register_suite, Registry};
//! use mapbench_core::StdHashMapFamily;
//!
//! register_suite::<StdHashMapFamily>(Registry::global())?;
//! ```
//!
//! Nothing depends on static initialization order: the shared instance is
//! created on first access and every call site goes through it.

use std::sync::Arc;

use mapbench_core::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::info;

use crate::descriptor::Descriptor;
use crate::sweep::{sizes, RunMode};

/// Where the registry is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Nothing registered yet
    Empty,
    /// At least one descriptor registered, still accepting more
    Populated,
    /// Sizes attached, no further registration
    Materialized,
    /// Handed to the iteration harness
    Executed,
}

/// A descriptor paired with the input sizes it runs across
#[derive(Debug, Clone)]
pub struct MaterializedBenchmark {
    /// The registered benchmark
    pub descriptor: Arc<Descriptor>,
    /// Input sizes for the selected run mode
    pub sizes: &'static [usize],
}

impl MaterializedBenchmark {
    /// Descriptor name
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }
}

struct Inner {
    descriptors: Vec<Arc<Descriptor>>,
    state: RegistryState,
}

/// Append-only, insertion-ordered collection of benchmark descriptors
pub struct Registry {
    inner: RwLock<Inner>,
}

/// Process-wide registry, created on first call to [`Registry::global`]
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

impl Registry {
    /// Create an empty registry
    ///
    /// Most callers want [`Registry::global`]; private instances are useful in
    /// tests.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                descriptors: Vec::new(),
                state: RegistryState::Empty,
            }),
        }
    }

    /// The shared process-wide registry
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Append a descriptor
    ///
    /// # Errors
    ///
    /// - [`Error::RegistrySealed`] once the registry has been materialized
    /// - [`Error::DuplicateBenchmark`] if the name is already registered
    pub fn register(&self, descriptor: Descriptor) -> Result<()> {
        let mut inner = self.inner.write();

        if matches!(
            inner.state,
            RegistryState::Materialized | RegistryState::Executed
        ) {
            return Err(Error::RegistrySealed(descriptor.name().to_string()));
        }
        if inner
            .descriptors
            .iter()
            .any(|existing| existing.name() == descriptor.name())
        {
            return Err(Error::DuplicateBenchmark(descriptor.name().to_string()));
        }

        info!(
            name = descriptor.name(),
            sweep = ?descriptor.sweep(),
            "Registered benchmark"
        );
        inner.descriptors.push(Arc::new(descriptor));
        inner.state = RegistryState::Populated;
        Ok(())
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.inner.read().descriptors.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.inner.read().descriptors.is_empty()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        self.inner.read().state
    }

    /// Snapshot of registered descriptors, in registration order
    pub fn descriptors(&self) -> Vec<Arc<Descriptor>> {
        self.inner.read().descriptors.clone()
    }

    /// Attach input sizes for `mode` and seal the registry
    ///
    /// Can be called again after sealing; it returns the same descriptors in
    /// the same order.
    pub fn materialize(&self, mode: RunMode) -> Vec<MaterializedBenchmark> {
        let mut inner = self.inner.write();
        if inner.state != RegistryState::Executed {
            inner.state = RegistryState::Materialized;
        }

        let materialized: Vec<MaterializedBenchmark> = inner
            .descriptors
            .iter()
            .map(|descriptor| MaterializedBenchmark {
                descriptor: Arc::clone(descriptor),
                sizes: sizes(mode, descriptor.sweep()),
            })
            .collect();

        info!(
            benchmarks = materialized.len(),
            mode = ?mode,
            "Materialized benchmark registry"
        );
        materialized
    }

    /// Record that materialized benchmarks were handed to the harness
    pub fn mark_executed(&self) {
        self.inner.write().state = RegistryState::Executed;
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Registry")
            .field("len", &inner.descriptors.len())
            .field("state", &inner.state)
            .finish()
    }
}

/// Register a descriptor in the process-wide registry
pub fn register_benchmark(descriptor: Descriptor) -> Result<()> {
    Registry::global().register(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::Sweep;

    fn noop(name: &str) -> Descriptor {
        Descriptor::new(name, |_ctx| Ok(()))
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = Registry::new();
        registry.register(noop("D1")).unwrap();
        registry.register(noop("D2")).unwrap();
        registry.register(noop("D3")).unwrap();

        let names: Vec<String> = registry
            .descriptors()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["D1", "D2", "D3"]);
    }

    #[test]
    fn test_registry_state_machine() {
        let registry = Registry::new();
        assert_eq!(registry.state(), RegistryState::Empty);

        registry.register(noop("a")).unwrap();
        assert_eq!(registry.state(), RegistryState::Populated);

        registry.materialize(RunMode::Short);
        assert_eq!(registry.state(), RegistryState::Materialized);

        registry.mark_executed();
        assert_eq!(registry.state(), RegistryState::Executed);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let registry = Registry::new();
        registry.register(noop("same")).unwrap();
        let err = registry.register(noop("same")).unwrap_err();
        assert_eq!(err, Error::DuplicateBenchmark("same".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_sealed_after_materialize() {
        let registry = Registry::new();
        registry.register(noop("first")).unwrap();
        registry.materialize(RunMode::Full);

        let err = registry.register(noop("late")).unwrap_err();
        assert!(matches!(err, Error::RegistrySealed(name) if name == "late"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_materialize_attaches_sweeps() {
        let registry = Registry::new();
        registry.register(noop("standard")).unwrap();
        registry
            .register(noop("short").with_sweep(Sweep::Short))
            .unwrap();

        let short_run = registry.materialize(RunMode::Short);
        assert_eq!(short_run[0].sizes, &[10_000, 250_000]);
        assert_eq!(short_run[1].sizes, &[1_024, 8_192]);

        let full_run = registry.materialize(RunMode::Full);
        assert_eq!(full_run[0].sizes.len(), 8);
        assert_eq!(full_run[1].sizes.len(), 7);
        assert_eq!(full_run[1].name(), "short");
    }

    #[test]
    fn test_materialize_empty_registry() {
        let registry = Registry::new();
        assert!(registry.materialize(RunMode::Full).is_empty());
        assert!(registry.is_empty());
    }
}
