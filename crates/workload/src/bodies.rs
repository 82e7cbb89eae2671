//! Benchmark bodies
//!
//! Each body is generic over a key type, a value type and a container family,
//! and drives one workload shape through a [`RunContext`]:
//!
//! | Body | Setup (untimed) | Measured |
//! |------|-----------------|----------|
//! | `insert_sequential` | clear + reserve | insert `0..N` ascending |
//! | `insert_random` | shuffle `0..N` | insert in shuffled order |
//! | `erase_sequential` | populate | erase `0..N` ascending |
//! | `erase_random` | shuffle, populate, reshuffle | erase in reshuffled order |
//! | `find_sequential` | populate | find `0..N`, all must hit |
//! | `find_random` | shuffle, populate, reshuffle | find all, all must hit |
//! | `find_half_hit` | shuffle, insert even positions | find all, half must hit |
//! | `find_miss` | shuffle, insert even positions | find odd positions, none may hit |
//! | `insert_erase_random` | clear + reserve | replay an action sequence |
//! | `rehash` | populate `N - 5` | per-insert latency until a growth spike |
//!
//! Verification happens outside the measured window and returns an error on
//! any mismatch. Callers must treat that error as fatal.

use std::hint::black_box;
use std::time::{Duration, Instant};

use mapbench_core::{
    Action, ActionKind, Error, Key, MapAdapter, MapFamily, Result, SyntheticValue,
};
use tracing::warn;

use crate::context::RunContext;
use crate::rng::{fill_shuffled, workload_rng};

/// Insertions excluded from the rehash running maximum
pub const REHASH_WARMUP: usize = 5;

/// A rehash latency must exceed the running maximum by this factor
pub const REHASH_SPIKE_FACTOR: u32 = 25;

/// Lower bound on the number of trial insertions per rehash iteration
pub const REHASH_MIN_PROBES: usize = 64;

/// The workload catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workload {
    /// Insert ascending keys
    InsertSequential,
    /// Insert shuffled keys
    InsertRandom,
    /// Erase ascending keys from a full container
    EraseSequential,
    /// Erase shuffled keys from a full container
    EraseRandom,
    /// Look up ascending keys in a full container
    FindSequential,
    /// Look up shuffled keys in a full container
    FindRandom,
    /// Look up all keys when half were inserted
    FindHalfHit,
    /// Look up only keys that were never inserted
    FindMiss,
    /// Replay an interleaved insert/erase sequence
    InsertEraseRandom,
    /// Cost of the insert that triggers container growth
    Rehash,
}

impl Workload {
    /// Every workload, in catalogue order
    pub const ALL: [Workload; 10] = [
        Workload::InsertSequential,
        Workload::InsertRandom,
        Workload::EraseSequential,
        Workload::EraseRandom,
        Workload::FindSequential,
        Workload::FindRandom,
        Workload::InsertEraseRandom,
        Workload::FindHalfHit,
        Workload::FindMiss,
        Workload::Rehash,
    ];

    /// Name used in descriptors and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Workload::InsertSequential => "Insert_Sequential",
            Workload::InsertRandom => "Insert_Random",
            Workload::EraseSequential => "Erase_Sequential",
            Workload::EraseRandom => "Erase_Random",
            Workload::FindSequential => "Find_Sequential",
            Workload::FindRandom => "Find_Random",
            Workload::FindHalfHit => "Find_HalfHit",
            Workload::FindMiss => "Find_Miss",
            Workload::InsertEraseRandom => "Insert_Erase_Random",
            Workload::Rehash => "Rehash",
        }
    }

    /// Workloads that are costlier per input size and get the short sweep
    pub const fn is_costly(self) -> bool {
        matches!(self, Workload::InsertEraseRandom | Workload::Rehash)
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn reset<M: MapAdapter>(map: &mut M, capacity: usize) {
    map.clear();
    map.reserve(capacity);
}

fn populate_sequential<M: MapAdapter>(map: &mut M, count: usize, value: &M::Value) {
    for index in 0..count {
        map.insert(M::Key::from_index(index), value.clone());
    }
}

fn populate_from<M: MapAdapter>(map: &mut M, keys: &[M::Key], value: &M::Value) {
    for &key in keys {
        map.insert(key, value.clone());
    }
}

fn count_hits<M: MapAdapter>(map: &M, keys: impl Iterator<Item = M::Key>) -> usize {
    let mut found = 0;
    for key in keys {
        found += usize::from(map.find(&key) != map.end());
    }
    black_box(found)
}

fn expect_all_found(workload: Workload, expected: usize, found: usize) -> Result<()> {
    if found != expected {
        return Err(Error::verification(workload.name(), expected, found));
    }
    Ok(())
}

// =============================================================================
// Insert
// =============================================================================

/// Insert `0..N` in ascending order
pub fn insert_sequential<K: Key, V: SyntheticValue, F: MapFamily>(
    ctx: &mut RunContext,
) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();

    while ctx.next_iteration() {
        reset(&mut map, n);
        ctx.measure(|| populate_sequential(&mut map, n, &value));
    }
    Ok(())
}

/// Insert `0..N` in a freshly shuffled order each iteration
pub fn insert_random<K: Key, V: SyntheticValue, F: MapFamily>(ctx: &mut RunContext) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();
    let mut keys: Vec<K> = Vec::with_capacity(n);
    let mut rng = workload_rng();

    while ctx.next_iteration() {
        fill_shuffled(&mut keys, n, &mut rng);
        reset(&mut map, n);
        ctx.measure(|| populate_from(&mut map, &keys, &value));
    }
    Ok(())
}

// =============================================================================
// Erase
// =============================================================================

/// Populate ascending, then erase `0..N` in ascending order
pub fn erase_sequential<K: Key, V: SyntheticValue, F: MapFamily>(
    ctx: &mut RunContext,
) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();

    while ctx.next_iteration() {
        reset(&mut map, n);
        populate_sequential(&mut map, n, &value);
        ctx.measure(|| {
            for index in 0..n {
                black_box(map.erase(&K::from_index(index)));
            }
        });
    }
    Ok(())
}

/// Populate in shuffled order, then erase in a second, different order
pub fn erase_random<K: Key, V: SyntheticValue, F: MapFamily>(ctx: &mut RunContext) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();
    let mut keys: Vec<K> = Vec::with_capacity(n);
    let mut rng = workload_rng();

    while ctx.next_iteration() {
        fill_shuffled(&mut keys, n, &mut rng);
        reset(&mut map, n);
        populate_from(&mut map, &keys, &value);
        fill_shuffled(&mut keys, n, &mut rng);
        ctx.measure(|| {
            for key in &keys {
                black_box(map.erase(key));
            }
        });
    }
    Ok(())
}

// =============================================================================
// Find
// =============================================================================

/// Populate ascending, then look up every key in ascending order
///
/// # Errors
///
/// Returns [`Error::Verification`] unless all `N` lookups hit.
pub fn find_sequential<K: Key, V: SyntheticValue, F: MapFamily>(
    ctx: &mut RunContext,
) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();

    while ctx.next_iteration() {
        reset(&mut map, n);
        populate_sequential(&mut map, n, &value);
        let found = ctx.measure(|| count_hits(&map, (0..n).map(K::from_index)));
        expect_all_found(Workload::FindSequential, n, found)?;
    }
    Ok(())
}

/// Populate in shuffled order, then look up every key in a different order
///
/// # Errors
///
/// Returns [`Error::Verification`] unless all `N` lookups hit.
pub fn find_random<K: Key, V: SyntheticValue, F: MapFamily>(ctx: &mut RunContext) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();
    let mut keys: Vec<K> = Vec::with_capacity(n);
    let mut rng = workload_rng();

    while ctx.next_iteration() {
        fill_shuffled(&mut keys, n, &mut rng);
        reset(&mut map, n);
        populate_from(&mut map, &keys, &value);
        fill_shuffled(&mut keys, n, &mut rng);
        let found = ctx.measure(|| count_hits(&map, keys.iter().copied()));
        expect_all_found(Workload::FindRandom, n, found)?;
    }
    Ok(())
}

/// Insert the keys at even positions of a shuffle, then look up all keys
///
/// # Errors
///
/// Returns [`Error::Verification`] unless the hit count equals the number of
/// inserted keys.
pub fn find_half_hit<K: Key, V: SyntheticValue, F: MapFamily>(
    ctx: &mut RunContext,
) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();
    let mut keys: Vec<K> = Vec::with_capacity(n);
    let mut rng = workload_rng();

    while ctx.next_iteration() {
        fill_shuffled(&mut keys, n, &mut rng);
        reset(&mut map, n);
        let mut inserted = 0;
        for key in keys.iter().step_by(2) {
            map.insert(*key, value.clone());
            inserted += 1;
        }
        let found = ctx.measure(|| count_hits(&map, keys.iter().copied()));
        expect_all_found(Workload::FindHalfHit, inserted, found)?;
    }
    Ok(())
}

/// Insert the keys at even positions of a shuffle, then look up only the
/// keys at odd positions
///
/// # Errors
///
/// Returns [`Error::UnexpectedHits`] if any lookup hits.
pub fn find_miss<K: Key, V: SyntheticValue, F: MapFamily>(ctx: &mut RunContext) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let mut map: F::Map<K, V> = Default::default();
    let mut keys: Vec<K> = Vec::with_capacity(n);
    let mut missing: Vec<K> = Vec::with_capacity(n / 2 + 1);
    let mut rng = workload_rng();

    while ctx.next_iteration() {
        fill_shuffled(&mut keys, n, &mut rng);
        reset(&mut map, n);
        missing.clear();
        for (position, key) in keys.iter().enumerate() {
            if position % 2 == 0 {
                map.insert(*key, value.clone());
            } else {
                missing.push(*key);
            }
        }
        let found = ctx.measure(|| count_hits(&map, missing.iter().copied()));
        if found != 0 {
            return Err(Error::UnexpectedHits {
                body: Workload::FindMiss.name(),
                found: found as u64,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Mixed
// =============================================================================

/// Replay a pre-generated action sequence against an empty container
///
/// The sequence is generated once per instantiation by the caller (see
/// [`crate::actions::generate_actions`]) and only read here.
///
/// # Errors
///
/// Returns [`Error::ReplayMismatch`] unless every id was inserted once and
/// erased once.
pub fn insert_erase_random<K: Key, F: MapFamily>(
    ctx: &mut RunContext,
    actions: &[Action<K>],
) -> Result<()> {
    let n = ctx.range();
    let mut map: F::Map<K, Action<K>> = Default::default();

    while ctx.next_iteration() {
        reset(&mut map, n);
        let (inserted, deleted) = ctx.measure(|| {
            let mut inserted = 0usize;
            let mut deleted = 0usize;
            for action in actions {
                match action.kind {
                    ActionKind::New => inserted += usize::from(map.insert(action.id, *action)),
                    ActionKind::Delete => deleted += map.erase(&action.id),
                }
            }
            (inserted, deleted)
        });
        if inserted != n || deleted != n {
            return Err(Error::ReplayMismatch {
                expected: n as u64,
                inserted: inserted as u64,
                deleted: deleted as u64,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Rehash
// =============================================================================

/// Insert one key at a time until an insert costs far more than any before
///
/// The first [`REHASH_WARMUP`] latencies are not counted. After that, the
/// first latency above [`REHASH_SPIKE_FACTOR`] times the running maximum is
/// returned. If no spike shows up within `limit` insertions, the running maximum
/// is returned instead.
fn find_growth_spike<M: MapAdapter>(
    map: &mut M,
    offset: usize,
    limit: usize,
    value: &M::Value,
) -> Duration {
    let mut running_max = Duration::ZERO;
    for step in 0..limit {
        let key = M::Key::from_index(offset + step);
        let payload = value.clone();

        let start = Instant::now();
        map.insert(key, payload);
        let latency = start.elapsed();

        if step < REHASH_WARMUP {
            continue;
        }
        if !running_max.is_zero() && latency > running_max * REHASH_SPIKE_FACTOR {
            return latency;
        }
        running_max = running_max.max(latency);
    }
    warn!(
        limit,
        running_max_ns = running_max.as_nanos() as u64,
        "No growth spike observed, recording running maximum"
    );
    running_max
}

/// Cost of the insert that makes the container grow
///
/// The container is reserved for `N` and filled to `N - 5` once. Each
/// iteration works on a copy and injects the detected spike as its cost.
/// This is a heuristic: containers that grow incrementally may never show a
/// single dominant insert, which is why the catalogue only registers it for
/// families with `MapFamily::REHASHES`.
pub fn rehash<K: Key, V: SyntheticValue, F: MapFamily>(ctx: &mut RunContext) -> Result<()> {
    let n = ctx.range();
    let value = V::synthetic();
    let offset = n.saturating_sub(REHASH_WARMUP);
    let limit = n.max(REHASH_MIN_PROBES);

    let mut map: F::Map<K, V> = Default::default();
    map.reserve(n);
    populate_sequential(&mut map, offset, &value);

    while ctx.next_iteration() {
        let mut copy = map.clone();
        let cost = find_growth_spike(&mut copy, offset, limit, &value);
        ctx.record(cost);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapbench_core::{BTreeMapFamily, DashMapFamily, StdHashMapFamily};

    use crate::actions::generate_actions;

    #[test]
    fn test_workload_names() {
        assert_eq!(Workload::InsertSequential.name(), "Insert_Sequential");
        assert_eq!(Workload::FindHalfHit.to_string(), "Find_HalfHit");
        assert_eq!(Workload::ALL.len(), 10);
    }

    #[test]
    fn test_costly_workloads() {
        let costly: Vec<_> = Workload::ALL.iter().filter(|w| w.is_costly()).collect();
        assert_eq!(costly, vec![&Workload::InsertEraseRandom, &Workload::Rehash]);
    }

    #[test]
    fn test_insert_bodies_run() {
        let mut ctx = RunContext::new(100, 3);
        insert_sequential::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
        assert_eq!(ctx.completed_iterations(), 3);

        let mut ctx = RunContext::new(100, 3);
        insert_random::<i64, String, BTreeMapFamily>(&mut ctx).unwrap();
        assert_eq!(ctx.completed_iterations(), 3);
    }

    #[test]
    fn test_erase_bodies_run() {
        let mut ctx = RunContext::new(100, 2);
        erase_sequential::<i64, i64, DashMapFamily>(&mut ctx).unwrap();
        let mut ctx = RunContext::new(100, 2);
        erase_random::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
    }

    #[test]
    fn test_find_bodies_verify() {
        let mut ctx = RunContext::new(257, 2);
        find_sequential::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
        let mut ctx = RunContext::new(257, 2);
        find_random::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
        let mut ctx = RunContext::new(257, 2);
        find_half_hit::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
        let mut ctx = RunContext::new(257, 2);
        find_miss::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
    }

    #[test]
    fn test_insert_erase_random_replays() {
        let actions = generate_actions::<i64>(200);
        let mut ctx = RunContext::new(200, 2);
        insert_erase_random::<i64, StdHashMapFamily>(&mut ctx, &actions).unwrap();
    }

    #[test]
    fn test_insert_erase_random_detects_mismatch() {
        // A sequence for fewer ids than the input size cannot pass
        let actions = generate_actions::<i64>(10);
        let mut ctx = RunContext::new(11, 1);
        let err = insert_erase_random::<i64, StdHashMapFamily>(&mut ctx, &actions).unwrap_err();
        assert_eq!(
            err,
            Error::ReplayMismatch {
                expected: 11,
                inserted: 10,
                deleted: 10,
            }
        );
    }

    #[test]
    fn test_rehash_records_one_sample_per_iteration() {
        let mut ctx = RunContext::new(1000, 4);
        rehash::<i64, i64, StdHashMapFamily>(&mut ctx).unwrap();
        assert_eq!(ctx.recorded_samples(), 4);
    }

    #[test]
    fn test_rehash_tiny_input() {
        let mut ctx = RunContext::new(3, 1);
        rehash::<i64, i64, BTreeMapFamily>(&mut ctx).unwrap();
        assert_eq!(ctx.recorded_samples(), 1);
    }

    #[test]
    fn test_spike_search_stops_at_limit() {
        let mut map: std::collections::BTreeMap<i64, i64> = Default::default();
        find_growth_spike(&mut map, 0, 10, &42);
        assert!(map.len() <= 10);
        assert!(map.len() > REHASH_WARMUP);
    }
}
