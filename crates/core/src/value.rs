//! Value types stored in containers under test
//!
//! Two kinds of payload exist:
//! - Synthetic values: the same literal for every element of a given type,
//!   produced by [`SyntheticValue::synthetic`]
//! - Action records: the mixed insert/erase workload stores the action that
//!   produced the element (see [`crate::action`])
//!
//! Adapters and bodies never hard-code payloads; they ask the value type.

use std::fmt::Debug;

/// Any value a container under test can hold
pub trait Payload: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Type name used in benchmark descriptors
    const NAME: &'static str;
}

/// Value selection keyed on the value type
///
/// There is no blanket implementation: each new payload type picks its own
/// literal.
pub trait SyntheticValue: Payload {
    /// The payload inserted for every key
    fn synthetic() -> Self;
}

/// Payload for string-valued workloads
pub const SYNTHETIC_STRING: &str = "moizouzoumoithisisalongstringreallylong";

macro_rules! impl_integer_payload {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Payload for $ty {
                const NAME: &'static str = $name;
            }

            impl SyntheticValue for $ty {
                #[inline]
                fn synthetic() -> Self {
                    42
                }
            }
        )*
    };
}

impl_integer_payload! {
    i32 => "i32",
    i64 => "i64",
    u32 => "u32",
    u64 => "u64",
}

impl Payload for String {
    const NAME: &'static str = "String";
}

impl SyntheticValue for String {
    fn synthetic() -> Self {
        SYNTHETIC_STRING.to_string()
    }
}
