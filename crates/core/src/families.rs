//! Shipped container families
//!
//! | Marker | Container | Notes |
//! |--------|-----------|-------|
//! | [`StdHashMapFamily`] | `std::collections::HashMap` | reference shape |
//! | [`FxHashMapFamily`] | `rustc_hash::FxHashMap` | same impl as std, Fx hasher |
//! | [`HashbrownFamily`] | `hashbrown::HashMap` | |
//! | [`BTreeMapFamily`] | `std::collections::BTreeMap` | no capacity hint |
//! | [`DashMapFamily`] | `dashmap::DashMap` | overwriting insert, guard lookups |

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::BuildHasher;

use dashmap::DashMap;

use crate::adapter::{MapAdapter, MapFamily};
use crate::key::Key;
use crate::value::Payload;

// =============================================================================
// std / rustc-hash
// =============================================================================

impl<K, V, S> MapAdapter for HashMap<K, V, S>
where
    K: Key,
    V: Payload,
    S: BuildHasher + Default + Clone + Send + 'static,
{
    type Key = K;
    type Value = V;
    type Cursor<'a> = Option<&'a V> where Self: 'a;

    #[inline]
    fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn reserve(&mut self, capacity: usize) {
        HashMap::reserve(self, capacity);
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn begin(&self) -> Option<&V> {
        self.values().next()
    }

    #[inline]
    fn end(&self) -> Option<&V> {
        None
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// `std::collections::HashMap` with the default SipHash hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct StdHashMapFamily;

impl MapFamily for StdHashMapFamily {
    const NAME: &'static str = "std::HashMap";
    type Map<K: Key, V: Payload> = HashMap<K, V>;
}

/// `rustc_hash::FxHashMap`
#[derive(Debug, Clone, Copy, Default)]
pub struct FxHashMapFamily;

impl MapFamily for FxHashMapFamily {
    const NAME: &'static str = "FxHashMap";
    type Map<K: Key, V: Payload> = rustc_hash::FxHashMap<K, V>;
}

// =============================================================================
// hashbrown
// =============================================================================

impl<K, V, S> MapAdapter for hashbrown::HashMap<K, V, S>
where
    K: Key,
    V: Payload,
    S: BuildHasher + Default + Clone + Send + 'static,
{
    type Key = K;
    type Value = V;
    type Cursor<'a> = Option<&'a V> where Self: 'a;

    #[inline]
    fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn reserve(&mut self, capacity: usize) {
        hashbrown::HashMap::reserve(self, capacity);
    }

    fn clear(&mut self) {
        hashbrown::HashMap::clear(self);
    }

    fn begin(&self) -> Option<&V> {
        self.values().next()
    }

    #[inline]
    fn end(&self) -> Option<&V> {
        None
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }
}

/// `hashbrown::HashMap` with its default hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct HashbrownFamily;

impl MapFamily for HashbrownFamily {
    const NAME: &'static str = "hashbrown::HashMap";
    type Map<K: Key, V: Payload> = hashbrown::HashMap<K, V>;
}

// =============================================================================
// BTreeMap
// =============================================================================

impl<K: Key, V: Payload> MapAdapter for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Cursor<'a> = Option<&'a V> where Self: 'a;

    #[inline]
    fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    #[inline]
    fn find(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    /// Ordered trees have no capacity hint
    fn reserve(&mut self, _capacity: usize) {}

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn begin(&self) -> Option<&V> {
        self.values().next()
    }

    #[inline]
    fn end(&self) -> Option<&V> {
        None
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// `std::collections::BTreeMap`, the ordered baseline
#[derive(Debug, Clone, Copy, Default)]
pub struct BTreeMapFamily;

impl MapFamily for BTreeMapFamily {
    const NAME: &'static str = "BTreeMap";
    const REHASHES: bool = false;
    type Map<K: Key, V: Payload> = BTreeMap<K, V>;
}

// =============================================================================
// DashMap
// =============================================================================
//
// DashMap deviates from the common shape:
//   1. `insert` takes `&self` and overwrites, returning the old value
//   2. `get` returns a shard guard rather than a reference
//   3. there is no `reserve`
//
// The adapter goes through the entry API so an existing value is never
// replaced, and reports cursors as copied keys so no guard outlives the call.

impl<K, V, S> MapAdapter for DashMap<K, V, S>
where
    K: Key,
    V: Payload,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    type Key = K;
    type Value = V;
    type Cursor<'a> = Option<K> where Self: 'a;

    #[inline]
    fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => false,
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    #[inline]
    fn find(&self, key: &K) -> Option<K> {
        self.get(key).map(|entry| *entry.key())
    }

    /// Capacity is fixed at construction
    fn reserve(&mut self, _capacity: usize) {}

    fn clear(&mut self) {
        DashMap::clear(self);
    }

    fn begin(&self) -> Option<K> {
        self.iter().next().map(|entry| *entry.key())
    }

    #[inline]
    fn end(&self) -> Option<K> {
        None
    }

    fn len(&self) -> usize {
        DashMap::len(self)
    }
}

/// `dashmap::DashMap`, driven single-threaded
#[derive(Debug, Clone, Copy, Default)]
pub struct DashMapFamily;

impl MapFamily for DashMapFamily {
    const NAME: &'static str = "DashMap";
    type Map<K: Key, V: Payload> = DashMap<K, V>;
}

/// Names of every shipped family, in registration order
pub const FAMILY_NAMES: [&str; 5] = [
    StdHashMapFamily::NAME,
    FxHashMapFamily::NAME,
    HashbrownFamily::NAME,
    BTreeMapFamily::NAME,
    DashMapFamily::NAME,
];
