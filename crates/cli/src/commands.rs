//! Clap command definition.
//!
//! Builds the `clap::Command` for the `mapbench` binary. Everything the
//! runner needs comes from flags; there are no subcommands.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use mapbench_core::FAMILY_NAMES;

/// Criterion refuses smaller samples
pub const MIN_SAMPLE_SIZE: u64 = 10;

/// Build the CLI command
pub fn build_cli() -> Command {
    Command::new("mapbench")
        .about("Workload benchmarks for associative containers")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("short")
                .short('s')
                .long("short")
                .help("Run two representative sizes per sweep instead of the full sweep")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .value_name("SUBSTR")
                .help("Only run benchmarks whose name contains SUBSTR"),
        )
        .arg(
            Arg::new("family")
                .long("family")
                .value_name("NAME")
                .help("Only run benchmarks for one container family")
                .value_parser(PossibleValuesParser::new(FAMILY_NAMES)),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Print benchmark names and sizes without running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sample-size")
                .long("sample-size")
                .value_name("N")
                .help("Samples collected per benchmark and size (at least 10)")
                .value_parser(value_parser!(u64).range(MIN_SAMPLE_SIZE..))
                .default_value("10"),
        )
        .arg(
            Arg::new("measurement-time")
                .long("measurement-time")
                .value_name("SECS")
                .help("Target measurement time per benchmark and size")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("5"),
        )
        .arg(
            Arg::new("warm-up-time")
                .long("warm-up-time")
                .value_name("SECS")
                .help("Warm-up time per benchmark and size")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("1"),
        )
}
