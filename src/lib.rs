//! long-map: a separate-chaining hash map keyed by `i64`.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a self-contained hash table for integer keys with a small,
//!   precise contract: put/get/remove, membership by key or value,
//!   enumeration of keys and values, and `clear`.
//! - Layers:
//!   - `hash`: pure fold of the key's high and low 32 bits; bucket index
//!     is that hash modulo the current bucket count.
//!   - `LongMap<V>`: bucket table of chain heads plus an entry arena
//!     (`SlotMap`) whose entries carry the key of their successor.
//!   - `LongMapConfig`: initial capacity and load factor, validated once
//!     at construction.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; no internal locking.
//! - Lazy allocation: the bucket table is created by the first `put`.
//! - Unique keys: re-inserting a key replaces its value in place.
//! - Growth: an insertion that finds `len > capacity * load_factor` first
//!   doubles the table and re-places every entry.
//! - `clear` keeps the bucket table; nothing ever shrinks it.
//!
//! Chains and unlinking
//! - A chain is appended at its tail, so colliding keys keep insertion
//!   order within their bucket.
//! - Removal rewrites exactly one link: the bucket slot when the removed
//!   entry is the chain head, otherwise the predecessor's `next`.
//! - Arena keys are generational; a removed entry's key never resolves to
//!   a later entry that reuses its slot.
//!
//! Enumeration
//! - `iter`, `keys` and `values` walk buckets in index order and each
//!   chain head to tail. The order is an artifact of the layout, stable
//!   only while the map is not mutated.
//! - `iter_mut` visits in arena order.
//!
//! Errors
//! - Construction fails with `InvalidArgument` for a negative initial
//!   capacity or a load factor that is zero, negative or NaN. Every other
//!   operation is total.
//!
//! Logging
//! - Table allocation, resizes and clears are reported through the `log`
//!   facade at trace/debug level. No logger is installed by this crate.

mod config;
mod error;
mod hash;
mod long_map;
mod long_map_proptest;

// Public surface
pub use config::{LongMapConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::InvalidArgument;
pub use long_map::{Iter, IterMut, LongMap};
