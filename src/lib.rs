//! probe-hashmap: an open-addressing hash map with linear probing,
//! tombstone-based deletion, and deterministic top-N reporting.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep every entry directly in one contiguous slot array so the
//!   whole structure is a `Vec`, a live-entry count, and a hasher.
//! - Layers:
//!   - `Slot<K, V>`: tri-state cell (`Empty` / `Occupied` / `Tombstone`)
//!     modeled as an enum, never an overloaded flag.
//!   - `ProbeHashMap<K, V, S>`: public map with insert-or-update (`set`),
//!     lookup (`get`), tombstoning removal (`remove`), load-factor
//!     growth, and reporting (`iter`, `top_n`, `entries_by_value_desc`).
//!   - `text`: the tokenizer collaborator feeding the map normalized
//!     string keys (whitespace split, non-alphanumeric strip, lowercase).
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; no interior
//!   mutability, no atomics. Callers wanting shared access wrap the map
//!   in their own exclusion boundary.
//! - `len() < capacity()` strictly at all times; growth doubles the
//!   array and re-inserts every live entry at its new home slot
//!   (positions are `hash % capacity`, so a capacity change invalidates
//!   all of them). Tombstones are dropped on growth.
//! - `set` never loses a write: a saturated probe or a load-factor
//!   breach grows the table and completes the insertion before
//!   returning.
//!
//! Tombstone rule
//! - `get`/`remove` probe through tombstones and stop at the first empty
//!   slot. `set` remembers the first tombstone on the chain but claims
//!   it only after the scan proves the key is not live further along;
//!   an existing key is always updated in place. One rule, all three
//!   operations.
//!
//! Notes and non-goals
//! - No concurrency, persistence, or multi-table coordination.
//! - Key equality is plain `Eq`; any normalization (case folding,
//!   punctuation stripping) happens in `text` before keys reach the map.
//! - Sorting by value uses an unstable sort with `Ord::cmp`; the order
//!   of equal values is unspecified.

mod probe_hash_map;
mod probe_hash_map_proptest;
pub mod text;

// Public surface
pub use probe_hash_map::{Iter, ProbeHashMap, SetOutcome, TopN, DEFAULT_CAPACITY};
