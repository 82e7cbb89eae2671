//! Action sequence generation
//!
//! Produces the interleaved insert/erase sequence replayed by the mixed
//! workload. For `count` ids the sequence has `2 * count` actions, exactly one
//! `New` and one `Delete` per id, and every `Delete` sits strictly after the
//! `New` for the same id. Replaying it against an empty map therefore never
//! inserts a present key nor erases an absent one.
//!
//! ## Construction
//!
//! 1. Push `New` for ids `0..count`, then shuffle: this fixes the insertion
//!    order
//! 2. For each id in ascending order, find its `New` searching from position
//!    `id`, then place its `Delete` uniformly among the slots after it
//!
//! Deletes only ever land after the `New` they belong to, which keeps the
//! ordering invariant by construction. If the `New` is not inside the search
//! window (it can sit before position `id`), the `Delete` goes to the end,
//! which is still after it.
//!
//! The seed is fixed, so the output is identical on every call and every run.

use mapbench_core::{Action, ActionKind, Actions, Error, Key, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::rng::ACTION_SEED;

/// Generate the action sequence for `count` ids
pub fn generate_actions<K: Key>(count: usize) -> Actions<K> {
    let mut rng = StdRng::seed_from_u64(ACTION_SEED);
    let mut actions: Actions<K> = Vec::with_capacity(2 * count);
    actions.extend((0..count).map(|index| Action::new_insert(K::from_index(index))));
    actions.shuffle(&mut rng);

    if count == 0 {
        return actions;
    }

    let distribution = Uniform::new_inclusive(1usize, count);
    for index in 0..count {
        let id = K::from_index(index);
        let target = Action::new_insert(id);
        let position = actions[index..]
            .iter()
            .position(|action| *action == target)
            .map(|offset| index + offset);

        match position {
            Some(position) if actions.len() - position > 1 => {
                let max_random = actions.len() - position;
                let slot = position + 1 + distribution.sample(&mut rng) % max_random;
                actions.insert(slot, Action::new_delete(id));
            }
            _ => actions.push(Action::new_delete(id)),
        }
    }

    debug!(count, len = actions.len(), "Generated action sequence");
    actions
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Unseen,
    Live,
    Erased,
}

/// Replay `actions` against a reference model and report the first violation
///
/// # Errors
///
/// Returns [`Error::InvalidSequence`] if the sequence has the wrong length,
/// references an id outside `0..count`, inserts a live or erased id, or erases
/// an id that is not live.
pub fn verify_actions<K: Key>(actions: &[Action<K>], count: usize) -> Result<()> {
    if actions.len() != 2 * count {
        return Err(Error::InvalidSequence(format!(
            "expected {} actions, got {}",
            2 * count,
            actions.len()
        )));
    }

    let mut states = vec![Lifecycle::Unseen; count];
    for (position, action) in actions.iter().enumerate() {
        let index = action.id.to_index();
        let state = states.get_mut(index).ok_or_else(|| {
            Error::InvalidSequence(format!(
                "id {:?} at position {} is outside 0..{}",
                action.id, position, count
            ))
        })?;

        *state = match (action.kind, *state) {
            (ActionKind::New, Lifecycle::Unseen) => Lifecycle::Live,
            (ActionKind::Delete, Lifecycle::Live) => Lifecycle::Erased,
            (kind, current) => {
                return Err(Error::InvalidSequence(format!(
                    "{:?} of id {:?} at position {} while {:?}",
                    kind, action.id, position, current
                )));
            }
        };
    }

    // Length matched and every step was a legal transition, so every id went
    // Unseen -> Live -> Erased exactly once.
    Ok(())
}
