//! Action records for mixed insert/erase workloads
//!
//! An [`Action`] is both an instruction (insert or erase `id`) and, for the
//! duration it is live, the payload stored under `id`.

use crate::key::Key;
use crate::value::Payload;

/// What an action does to its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Insert the id
    New,
    /// Erase the id
    Delete,
}

/// One step of an action sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action<K> {
    /// Key the action applies to
    pub id: K,
    /// Insert or erase
    pub kind: ActionKind,
}

impl<K: Key> Action<K> {
    /// Insert action for `id`
    pub fn new_insert(id: K) -> Self {
        Self {
            id,
            kind: ActionKind::New,
        }
    }

    /// Erase action for `id`
    pub fn new_delete(id: K) -> Self {
        Self {
            id,
            kind: ActionKind::Delete,
        }
    }

    /// True for [`ActionKind::New`]
    pub fn is_insert(&self) -> bool {
        self.kind == ActionKind::New
    }
}

impl<K: Key> Payload for Action<K> {
    const NAME: &'static str = "Action";
}

/// An ordered action sequence
pub type Actions<K> = Vec<Action<K>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_constructors() {
        let insert = Action::new_insert(7i64);
        assert_eq!(insert.id, 7);
        assert!(insert.is_insert());

        let delete = Action::new_delete(7i64);
        assert_eq!(delete.kind, ActionKind::Delete);
        assert!(!delete.is_insert());
        assert_ne!(insert, delete);
    }
}
