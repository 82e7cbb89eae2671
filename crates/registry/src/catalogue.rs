//! The per-family benchmark catalogue
//!
//! [`register_suite`] registers the same instantiations for any
//! [`MapFamily`]: twelve, or eleven for families that do not rehash and so
//! have no `Rehash` entry. Names read `Body<K, V, Family>`, for example
//! `Find_Miss<i64, i64, std::HashMap>`. The mixed workload stores its own
//! action records as values and is named `Insert_Erase_Random<K, Family>`.

use std::collections::HashMap;
use std::sync::Arc;

use mapbench_core::{
    Actions, BTreeMapFamily, DashMapFamily, Error, FxHashMapFamily, HashbrownFamily, Key,
    MapFamily, Result, StdHashMapFamily, SyntheticValue,
};
use mapbench_workload::{
    erase_random, erase_sequential, find_half_hit, find_miss, find_random, find_sequential,
    generate_actions, insert_erase_random, insert_random, insert_sequential, rehash,
    verify_actions, RunContext, Workload,
};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::descriptor::Descriptor;
use crate::registry::Registry;
use crate::sweep::Sweep;

/// Number of descriptors [`register_suite`] adds for a rehashing family
pub const SUITE_SIZE: usize = 12;

/// Number of descriptors [`register_suite`] adds for family `F`
pub const fn suite_len<F: MapFamily>() -> usize {
    if F::REHASHES {
        SUITE_SIZE
    } else {
        SUITE_SIZE - 1
    }
}

type Body = fn(&mut RunContext) -> Result<()>;

fn sweep_for(workload: Workload) -> Sweep {
    if workload.is_costly() {
        Sweep::Short
    } else {
        Sweep::Standard
    }
}

fn entry<K: Key, V: SyntheticValue, F: MapFamily>(workload: Workload, body: Body) -> Descriptor {
    let name = format!("{}<{}, {}, {}>", workload, K::NAME, V::NAME, F::NAME);
    Descriptor::new(name, body).with_sweep(sweep_for(workload))
}

fn cached_actions<K: Key>(
    cache: &Mutex<HashMap<usize, Arc<Actions<K>>>>,
    count: usize,
) -> Result<Arc<Actions<K>>> {
    let mut cache = cache.lock();
    if let Some(actions) = cache.get(&count) {
        return Ok(Arc::clone(actions));
    }

    let actions = generate_actions::<K>(count);
    verify_actions(&actions, count)?;
    debug!(count, "Cached action sequence");

    let actions = Arc::new(actions);
    cache.insert(count, Arc::clone(&actions));
    Ok(actions)
}

/// The mixed insert/erase descriptor
///
/// The action sequence for an input size is generated on first use and then
/// shared by every later sample at that size.
fn insert_erase_entry<K: Key, F: MapFamily>() -> Descriptor {
    let workload = Workload::InsertEraseRandom;
    let name = format!("{}<{}, {}>", workload, K::NAME, F::NAME);
    let cache: Mutex<HashMap<usize, Arc<Actions<K>>>> = Mutex::new(HashMap::new());

    Descriptor::new(name, move |ctx: &mut RunContext| {
        let actions = cached_actions(&cache, ctx.range())?;
        insert_erase_random::<K, F>(ctx, &actions)
    })
    .with_sweep(sweep_for(workload))
}

/// The descriptors for family `F`, in catalogue order
pub fn suite<F: MapFamily>() -> Vec<Descriptor> {
    let mut suite = vec![
        entry::<i64, i64, F>(
            Workload::InsertSequential,
            insert_sequential::<i64, i64, F>,
        ),
        entry::<i32, i32, F>(
            Workload::InsertSequential,
            insert_sequential::<i32, i32, F>,
        ),
        entry::<i64, i64, F>(Workload::InsertRandom, insert_random::<i64, i64, F>),
        entry::<i64, String, F>(Workload::InsertRandom, insert_random::<i64, String, F>),
        entry::<i64, i64, F>(Workload::EraseSequential, erase_sequential::<i64, i64, F>),
        entry::<i64, i64, F>(Workload::EraseRandom, erase_random::<i64, i64, F>),
        entry::<i64, i64, F>(Workload::FindSequential, find_sequential::<i64, i64, F>),
        entry::<i64, i64, F>(Workload::FindRandom, find_random::<i64, i64, F>),
        insert_erase_entry::<i64, F>(),
        entry::<i64, i64, F>(Workload::FindHalfHit, find_half_hit::<i64, i64, F>),
        entry::<i64, i64, F>(Workload::FindMiss, find_miss::<i64, i64, F>),
    ];
    if F::REHASHES {
        suite.push(entry::<i64, i64, F>(Workload::Rehash, rehash::<i64, i64, F>));
    }
    suite
}

/// Register the catalogue for family `F`
pub fn register_suite<F: MapFamily>(registry: &Registry) -> Result<()> {
    for descriptor in suite::<F>() {
        registry.register(descriptor)?;
    }
    info!(family = F::NAME, benchmarks = suite_len::<F>(), "Registered suite");
    Ok(())
}

/// Register the catalogue for every shipped family
pub fn register_all_families(registry: &Registry) -> Result<()> {
    register_suite::<StdHashMapFamily>(registry)?;
    register_suite::<FxHashMapFamily>(registry)?;
    register_suite::<HashbrownFamily>(registry)?;
    register_suite::<BTreeMapFamily>(registry)?;
    register_suite::<DashMapFamily>(registry)?;
    Ok(())
}

/// Register the catalogue for the family called `name`
///
/// # Errors
///
/// Returns [`Error::UnknownFamily`] if no shipped family has that name.
pub fn register_family_by_name(registry: &Registry, name: &str) -> Result<()> {
    match name {
        n if n == StdHashMapFamily::NAME => register_suite::<StdHashMapFamily>(registry),
        n if n == FxHashMapFamily::NAME => register_suite::<FxHashMapFamily>(registry),
        n if n == HashbrownFamily::NAME => register_suite::<HashbrownFamily>(registry),
        n if n == BTreeMapFamily::NAME => register_suite::<BTreeMapFamily>(registry),
        n if n == DashMapFamily::NAME => register_suite::<DashMapFamily>(registry),
        other => Err(Error::UnknownFamily(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapbench_core::FAMILY_NAMES;

    #[test]
    fn test_suite_has_twelve_entries() {
        let suite = suite::<StdHashMapFamily>();
        assert_eq!(suite.len(), SUITE_SIZE);
        assert_eq!(suite.iter().filter(|d| d.is_short_form()).count(), 2);
    }

    #[test]
    fn test_suite_names_in_order() {
        let names: Vec<String> = suite::<StdHashMapFamily>()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Insert_Sequential<i64, i64, std::HashMap>",
                "Insert_Sequential<i32, i32, std::HashMap>",
                "Insert_Random<i64, i64, std::HashMap>",
                "Insert_Random<i64, String, std::HashMap>",
                "Erase_Sequential<i64, i64, std::HashMap>",
                "Erase_Random<i64, i64, std::HashMap>",
                "Find_Sequential<i64, i64, std::HashMap>",
                "Find_Random<i64, i64, std::HashMap>",
                "Insert_Erase_Random<i64, std::HashMap>",
                "Find_HalfHit<i64, i64, std::HashMap>",
                "Find_Miss<i64, i64, std::HashMap>",
                "Rehash<i64, i64, std::HashMap>",
            ]
        );
    }

    #[test]
    fn test_btree_suite_has_no_rehash() {
        let suite = suite::<BTreeMapFamily>();
        assert_eq!(suite.len(), suite_len::<BTreeMapFamily>());
        assert_eq!(suite.len(), SUITE_SIZE - 1);
        assert!(suite.iter().all(|d| !d.name().starts_with("Rehash")));
        assert_eq!(suite.iter().filter(|d| d.is_short_form()).count(), 1);
    }

    #[test]
    fn test_suite_len_matches_suite() {
        assert_eq!(suite::<StdHashMapFamily>().len(), suite_len::<StdHashMapFamily>());
        assert_eq!(suite::<FxHashMapFamily>().len(), suite_len::<FxHashMapFamily>());
        assert_eq!(suite::<HashbrownFamily>().len(), suite_len::<HashbrownFamily>());
        assert_eq!(suite::<DashMapFamily>().len(), suite_len::<DashMapFamily>());
    }

    #[test]
    fn test_costly_entries_are_short() {
        for descriptor in suite::<HashbrownFamily>() {
            let costly = descriptor.name().starts_with("Insert_Erase_Random")
                || descriptor.name().starts_with("Rehash");
            assert_eq!(descriptor.is_short_form(), costly, "{}", descriptor.name());
        }
    }

    #[test]
    fn test_register_all_families() {
        let registry = Registry::new();
        register_all_families(&registry).unwrap();
        assert_eq!(registry.len(), SUITE_SIZE * FAMILY_NAMES.len() - 1);
    }

    #[test]
    fn test_register_twice_is_rejected() {
        let registry = Registry::new();
        register_suite::<BTreeMapFamily>(&registry).unwrap();
        let err = register_suite::<BTreeMapFamily>(&registry).unwrap_err();
        assert!(matches!(err, Error::DuplicateBenchmark(_)));
    }

    #[test]
    fn test_register_by_name() {
        for name in FAMILY_NAMES {
            let registry = Registry::new();
            register_family_by_name(&registry, name).unwrap();
            let expected = if name == BTreeMapFamily::NAME {
                suite_len::<BTreeMapFamily>()
            } else {
                SUITE_SIZE
            };
            assert_eq!(registry.len(), expected, "{}", name);
            assert!(registry.descriptors()[0].name().ends_with(&format!("{}>", name)));
        }
    }

    #[test]
    fn test_register_unknown_family() {
        let registry = Registry::new();
        let err = register_family_by_name(&registry, "SkipList").unwrap_err();
        assert_eq!(err, Error::UnknownFamily("SkipList".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_action_cache_reuses_sequence() {
        let cache = Mutex::new(HashMap::new());
        let first = cached_actions::<i64>(&cache, 100).unwrap();
        let second = cached_actions::<i64>(&cache, 100).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 200);

        let other = cached_actions::<i64>(&cache, 50).unwrap();
        assert_eq!(other.len(), 100);
        assert_eq!(cache.lock().len(), 2);
    }

    #[test]
    fn test_insert_erase_descriptor_runs() {
        let descriptor = insert_erase_entry::<i64, DashMapFamily>();
        let mut ctx = RunContext::new(500, 3);
        descriptor.run(&mut ctx).unwrap();
        let mut ctx = RunContext::new(500, 1);
        descriptor.run(&mut ctx).unwrap();
        assert_eq!(ctx.completed_iterations(), 1);
    }
}
