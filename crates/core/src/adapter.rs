//! Uniform adapter contract over associative containers
//!
//! Container libraries disagree on method names and return shapes: one
//! returns the previous value from `insert`, another overwrites on insert,
//! another hands out guards instead of references. [`MapAdapter`] is the one
//! seam where those differences are absorbed. Benchmark bodies only ever talk
//! to this trait.
//!
//! ## Contract
//!
//! - `insert` never replaces an existing value and returns `true` iff a new
//!   element was added
//! - `erase` returns the number of removed elements (0 or 1)
//! - `find` returns a cursor that compares equal to `end()` iff the key is
//!   absent
//! - `reserve` may be a no-op for containers without a capacity hint
//! - `clear` keeps the container usable
//!
//! Adding a container family means one `MapAdapter` impl plus one
//! [`MapFamily`] marker. Call sites never change.

use crate::key::Key;
use crate::value::Payload;

/// Operation contract every container under test is driven through
pub trait MapAdapter: Default + Clone + Send + 'static {
    /// Key type stored by this instantiation
    type Key: Key;
    /// Value type stored by this instantiation
    type Value: Payload;
    /// Position returned by `find`, `begin` and `end`
    ///
    /// Only used for comparison against `end()`, never for traversal.
    type Cursor<'a>: PartialEq
    where
        Self: 'a;

    /// Insert `value` under `key` if the key is absent
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> bool;

    /// Remove `key`, returning how many elements were removed
    fn erase(&mut self, key: &Self::Key) -> usize;

    /// Look up `key`
    fn find(&self, key: &Self::Key) -> Self::Cursor<'_>;

    /// Pre-allocate room for at least `capacity` elements
    fn reserve(&mut self, capacity: usize);

    /// Remove every element
    fn clear(&mut self);

    /// Cursor at the first element, or `end()` when empty
    fn begin(&self) -> Self::Cursor<'_>;

    /// Past-the-end cursor
    fn end(&self) -> Self::Cursor<'_>;

    /// Number of live elements
    fn len(&self) -> usize;

    /// True when the container holds no element
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `find(key)` is not `end()`
    fn contains(&self, key: &Self::Key) -> bool {
        self.find(key) != self.end()
    }
}

/// A container family, independent of its key and value types
///
/// Workloads are written once against `F::Map<K, V>` and instantiated for
/// every family the integrator wants measured.
pub trait MapFamily: 'static {
    /// Family name used in benchmark descriptors
    const NAME: &'static str;

    /// Whether the container grows by rehashing into a larger table
    ///
    /// Families that grow node by node have no single growth insert to time,
    /// so the rehash workload is not registered for them.
    const REHASHES: bool = true;

    /// The concrete container for a key/value pair
    type Map<K: Key, V: Payload>: MapAdapter<Key = K, Value = V>;
}
