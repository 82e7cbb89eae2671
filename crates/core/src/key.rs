//! Key types for benchmark workloads
//!
//! Keys are integers drawn from a dense range `[0, N)`. The type itself does
//! not enforce uniqueness; the workload generators keep live keys unique.

use std::fmt::Debug;
use std::hash::Hash;

/// An integral key usable by every container family
pub trait Key: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Type name used in benchmark descriptors
    const NAME: &'static str;

    /// Convert a dense index into a key
    ///
    /// Indices are always below the largest input size of a sweep, which fits
    /// every shipped key type.
    fn from_index(index: usize) -> Self;

    /// Convert the key back into its dense index
    fn to_index(self) -> usize;
}

macro_rules! impl_key {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Key for $ty {
                const NAME: &'static str = $name;

                #[inline]
                fn from_index(index: usize) -> Self {
                    index as $ty
                }

                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key! {
    i32 => "i32",
    i64 => "i64",
    u32 => "u32",
    u64 => "u64",
}
