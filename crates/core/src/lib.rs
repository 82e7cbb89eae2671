//! Core types and traits for mapbench
//!
//! This crate defines the foundational pieces every workload is built on:
//! - MapAdapter: the uniform operation contract over associative containers
//! - MapFamily: a container family, generic over key and value types
//! - Shipped families: std, rustc-hash, hashbrown, BTreeMap, DashMap
//! - Key / Payload / SyntheticValue: key and value types plus value selection
//! - Action: records driving the mixed insert/erase workload
//! - Error: error type shared by the whole workspace

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod adapter;
pub mod error;
pub mod families;
pub mod key;
pub mod value;

pub use action::{Action, ActionKind, Actions};
pub use adapter::{MapAdapter, MapFamily};
pub use error::{Error, Result};
pub use families::{
    BTreeMapFamily, DashMapFamily, FxHashMapFamily, HashbrownFamily, StdHashMapFamily,
    FAMILY_NAMES,
};
pub use key::Key;
pub use value::{Payload, SyntheticValue, SYNTHETIC_STRING};
