//! mapbench: workload benchmarks for associative containers.
//!
//! Registers the benchmark catalogue for every family before parsing flags,
//! then materializes the registry for the selected run mode and hands each
//! benchmark that passes `--filter` and `--family` to criterion.
//!
//! ```text
//! mapbench [--short] [--filter SUBSTR] [--family NAME] [--list]
//! ```

mod commands;
mod config;
mod logging;
mod runner;

use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::ArgMatches;
use mapbench_registry::{register_all_families, Registry};

use commands::build_cli;
use config::RunConfig;

fn main() {
    logging::init_logging();

    let registry = Registry::global();
    if let Err(e) = register_all_families(registry).context("failed to register benchmarks") {
        exit_with(e);
    }

    let matches = parse_args();
    let config = RunConfig::from_matches(&matches);

    if let Err(e) = runner::run_benchmarks(registry, &config) {
        exit_with(e);
    }
}

fn exit_with(e: anyhow::Error) -> ! {
    eprintln!("Error: {:#}", e);
    process::exit(1);
}

/// Parse process arguments
///
/// `--help` and `--version` exit 0. Any other parse failure exits 1 before a
/// benchmark runs.
fn parse_args() -> ArgMatches {
    match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}
