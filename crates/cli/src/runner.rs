//! Criterion driver.
//!
//! Each materialized descriptor becomes one criterion group, with one bench
//! id per input size. Criterion decides the iteration count; the body gets it
//! through a fresh [`RunContext`] and hands back only the time it measured.

use std::process;

use criterion::{BenchmarkId, Criterion};
use mapbench_core::Error;
use mapbench_registry::{MaterializedBenchmark, Registry};
use mapbench_workload::RunContext;
use tracing::{debug, error, info, warn};

use crate::config::RunConfig;

/// Terminate the process after a body reported an error
///
/// Verification failures are never retried.
pub fn abort_run(name: &str, err: &Error) -> ! {
    error!(benchmark = name, error = %err, "Benchmark failed verification");
    eprintln!("{}: {}", name, err);
    process::exit(1);
}

/// Benchmarks from `registry` that pass the configured name and family filters
pub fn select(registry: &Registry, config: &RunConfig) -> Vec<MaterializedBenchmark> {
    registry
        .materialize(config.mode)
        .into_iter()
        .filter(|benchmark| config.selects(benchmark.name()))
        .collect()
}

/// One line per benchmark: name followed by its sizes
pub fn format_listing(benchmarks: &[MaterializedBenchmark]) -> String {
    let mut out = String::new();
    for benchmark in benchmarks {
        let sizes: Vec<String> = benchmark.sizes.iter().map(|s| s.to_string()).collect();
        out.push_str(benchmark.name());
        out.push_str(": ");
        out.push_str(&sizes.join(", "));
        out.push('\n');
    }
    out
}

fn bench_one(criterion: &mut Criterion, benchmark: &MaterializedBenchmark) {
    let mut group = criterion.benchmark_group(benchmark.name());

    for &size in benchmark.sizes {
        debug!(benchmark = benchmark.name(), size, "Dispatching");
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_custom(|iters| {
                let mut ctx = RunContext::new(size, iters);
                if let Err(err) = benchmark.descriptor.run(&mut ctx) {
                    abort_run(benchmark.name(), &err);
                }
                ctx.elapsed()
            });
        });
    }

    group.finish();
}

/// Materialize the registry and run (or list) the selected benchmarks
///
/// Returns the number of benchmarks selected.
pub fn run_benchmarks(registry: &Registry, config: &RunConfig) -> anyhow::Result<usize> {
    let benchmarks = select(registry, config);
    if benchmarks.is_empty() {
        warn!(filter = ?config.filter, family = ?config.family, "No benchmarks selected");
    }

    if config.list {
        print!("{}", format_listing(&benchmarks));
        return Ok(benchmarks.len());
    }

    info!(
        benchmarks = benchmarks.len(),
        mode = ?config.mode,
        "Starting benchmark run"
    );
    registry.mark_executed();

    let mut criterion = config.criterion();
    for benchmark in &benchmarks {
        bench_one(&mut criterion, benchmark);
    }
    criterion.final_summary();

    Ok(benchmarks.len())
}
