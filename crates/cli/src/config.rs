//! Run configuration built from parsed arguments.

use std::time::Duration;

use clap::ArgMatches;
use criterion::Criterion;
use mapbench_registry::RunMode;

use crate::commands::MIN_SAMPLE_SIZE;

const DEFAULT_MEASUREMENT_SECS: u64 = 5;
const DEFAULT_WARM_UP_SECS: u64 = 1;

/// Everything the runner needs to know about one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Full or abbreviated sweep
    pub mode: RunMode,
    /// Substring a benchmark name must contain to run
    pub filter: Option<String>,
    /// Only run benchmarks for this container family
    pub family: Option<String>,
    /// Print benchmarks instead of running them
    pub list: bool,
    /// Criterion samples per benchmark and size
    pub sample_size: usize,
    /// Criterion measurement time per benchmark and size
    pub measurement_time: Duration,
    /// Criterion warm-up time per benchmark and size
    pub warm_up_time: Duration,
}

impl RunConfig {
    /// Build from matches produced by [`crate::commands::build_cli`]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let seconds = |id: &str, default: u64| {
            Duration::from_secs(matches.get_one::<u64>(id).copied().unwrap_or(default))
        };

        Self {
            mode: RunMode::from_short_flag(matches.get_flag("short")),
            filter: matches.get_one::<String>("filter").cloned(),
            family: matches.get_one::<String>("family").cloned(),
            list: matches.get_flag("list"),
            sample_size: matches
                .get_one::<u64>("sample-size")
                .copied()
                .unwrap_or(MIN_SAMPLE_SIZE) as usize,
            measurement_time: seconds("measurement-time", DEFAULT_MEASUREMENT_SECS),
            warm_up_time: seconds("warm-up-time", DEFAULT_WARM_UP_SECS),
        }
    }

    /// True if the benchmark called `name` passes the name and family filters
    ///
    /// Descriptor names end with `, Family>`, so the family filter matches
    /// that suffix.
    pub fn selects(&self, name: &str) -> bool {
        let by_name = self
            .filter
            .as_deref()
            .map_or(true, |filter| name.contains(filter));
        let by_family = self
            .family
            .as_deref()
            .map_or(true, |family| name.ends_with(&format!(", {}>", family)));
        by_name && by_family
    }

    /// A criterion instance configured for this run
    pub fn criterion(&self) -> Criterion {
        Criterion::default()
            .sample_size(self.sample_size)
            .measurement_time(self.measurement_time)
            .warm_up_time(self.warm_up_time)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Full,
            filter: None,
            family: None,
            list: false,
            sample_size: MIN_SAMPLE_SIZE as usize,
            measurement_time: Duration::from_secs(DEFAULT_MEASUREMENT_SECS),
            warm_up_time: Duration::from_secs(DEFAULT_WARM_UP_SECS),
        }
    }
}
