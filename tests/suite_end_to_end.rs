//! Suite End-to-End Tests
//!
//! Register every family, materialize in short mode, and drive each
//! descriptor the way the runner does: fresh context per sample, body run,
//! measured time read back.

use std::time::Duration;

use mapbench::{
    register_all_families, register_family_by_name, Error, Registry, RegistryState, RunContext,
    suite_len, BTreeMapFamily, DashMapFamily, FxHashMapFamily, HashbrownFamily, RunMode,
    StdHashMapFamily, SHORT_SHORT_SIZES, SHORT_STANDARD_SIZES,
};

fn run_sample(benchmark: &mapbench::MaterializedBenchmark, size: usize, iters: u64) -> Duration {
    let mut ctx = RunContext::new(size, iters);
    benchmark
        .descriptor
        .run(&mut ctx)
        .unwrap_or_else(|e| panic!("{} at {}: {}", benchmark.name(), size, e));
    assert_eq!(ctx.completed_iterations(), iters, "{}", benchmark.name());
    ctx.elapsed()
}

#[test]
fn test_full_catalogue_short_mode() {
    let registry = Registry::new();
    register_all_families(&registry).unwrap();

    let benchmarks = registry.materialize(RunMode::Short);
    let expected = suite_len::<StdHashMapFamily>()
        + suite_len::<FxHashMapFamily>()
        + suite_len::<HashbrownFamily>()
        + suite_len::<BTreeMapFamily>()
        + suite_len::<DashMapFamily>();
    assert_eq!(benchmarks.len(), expected);
    assert!(!benchmarks
        .iter()
        .any(|b| b.name() == "Rehash<i64, i64, BTreeMap>"));
    registry.mark_executed();
    assert_eq!(registry.state(), RegistryState::Executed);

    for benchmark in &benchmarks {
        let expected: &[usize] = if benchmark.descriptor.is_short_form() {
            &SHORT_SHORT_SIZES
        } else {
            &SHORT_STANDARD_SIZES
        };
        assert_eq!(benchmark.sizes, expected, "{}", benchmark.name());

        // Smallest size only; the larger one is covered by the workload tests
        run_sample(benchmark, benchmark.sizes[0], 1);
    }
}

#[test]
fn test_repeated_samples_reuse_descriptor() {
    let registry = Registry::new();
    register_family_by_name(&registry, "hashbrown::HashMap").unwrap();

    let benchmarks = registry.materialize(RunMode::Short);
    let mixed = benchmarks
        .iter()
        .find(|b| b.name() == "Insert_Erase_Random<i64, hashbrown::HashMap>")
        .unwrap();

    for iters in [1, 2, 4] {
        run_sample(mixed, 1_024, iters);
    }
}

#[test]
fn test_rehash_reports_positive_cost() {
    let registry = Registry::new();
    register_family_by_name(&registry, "std::HashMap").unwrap();

    let benchmarks = registry.materialize(RunMode::Short);
    let rehash = benchmarks
        .iter()
        .find(|b| b.name().starts_with("Rehash"))
        .unwrap();
    assert!(rehash.descriptor.is_short_form());
    assert!(run_sample(rehash, rehash.sizes[0], 3) > Duration::ZERO);
}

#[test]
fn test_unknown_family_registers_nothing() {
    let registry = Registry::new();
    let err = register_family_by_name(&registry, "std::unordered_map").unwrap_err();
    assert!(matches!(err, Error::UnknownFamily(_)));
    assert_eq!(registry.state(), RegistryState::Empty);
}
