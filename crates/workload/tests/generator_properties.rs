//! Action Sequence Generator Properties
//!
//! Validates the generator against its ordering invariants:
//! 1. Length 2N, one New and one Delete per id
//! 2. Replay against a reference map never double-inserts or erases an
//!    absent key, and ends with inserted == deleted == N
//! 3. Output is identical across calls

use std::collections::HashMap;

use mapbench_core::{Action, ActionKind};
use mapbench_workload::{generate_actions, verify_actions};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Replay against a std HashMap, counting every attempted operation
fn replay_reference(actions: &[Action<i64>]) -> (usize, usize) {
    let mut map: HashMap<i64, Action<i64>> = HashMap::new();
    let mut inserted = 0;
    let mut deleted = 0;

    for action in actions {
        match action.kind {
            ActionKind::New => {
                assert!(
                    !map.contains_key(&action.id),
                    "insert of present key {}",
                    action.id
                );
                map.insert(action.id, *action);
                inserted += 1;
            }
            ActionKind::Delete => {
                assert!(
                    map.remove(&action.id).is_some(),
                    "erase of absent key {}",
                    action.id
                );
                deleted += 1;
            }
        }
    }

    assert!(map.is_empty());
    (inserted, deleted)
}

// ============================================================================
// Fixed Sizes
// ============================================================================

#[test]
fn test_replay_one_thousand() {
    let actions = generate_actions::<i64>(1000);
    assert_eq!(replay_reference(&actions), (1000, 1000));
}

#[test]
fn test_short_sweep_sizes_are_valid() {
    for count in [1024, 8192] {
        let actions = generate_actions::<i64>(count);
        verify_actions(&actions, count).unwrap();
    }
}

#[test]
fn test_sequence_is_stable_across_calls() {
    let first = generate_actions::<i64>(5000);
    for _ in 0..3 {
        assert_eq!(generate_actions::<i64>(5000), first);
    }
}

#[test]
fn test_prefix_is_not_identity() {
    // The insertion order is shuffled, not ascending
    let actions = generate_actions::<i64>(100);
    let inserts: Vec<i64> = actions
        .iter()
        .filter(|a| a.is_insert())
        .map(|a| a.id)
        .collect();
    assert_ne!(inserts, (0..100).collect::<Vec<_>>());
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_one_new_one_delete_per_id(count in 0usize..400) {
        let actions = generate_actions::<i64>(count);
        prop_assert_eq!(actions.len(), 2 * count);

        let mut news = vec![0u32; count];
        let mut deletes = vec![0u32; count];
        for action in &actions {
            let slot = action.id as usize;
            match action.kind {
                ActionKind::New => news[slot] += 1,
                ActionKind::Delete => deletes[slot] += 1,
            }
        }
        prop_assert!(news.iter().all(|&n| n == 1));
        prop_assert!(deletes.iter().all(|&d| d == 1));
    }

    #[test]
    fn prop_replay_is_valid(count in 0usize..400) {
        let actions = generate_actions::<i64>(count);
        prop_assert!(verify_actions(&actions, count).is_ok());
        prop_assert_eq!(replay_reference(&actions), (count, count));
    }

    #[test]
    fn prop_generation_is_deterministic(count in 0usize..200) {
        prop_assert_eq!(generate_actions::<i64>(count), generate_actions::<i64>(count));
    }
}
