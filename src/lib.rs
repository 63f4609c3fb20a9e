//! slotchain: fixed-bucket chained hash map and slot-backed linked list,
//! two independent single-threaded containers over slotmap arenas.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: provide two small, load-bearing containers whose structural
//!   bookkeeping (buckets, chain links, node links) is explicit and
//!   locally verifiable.
//! - Components:
//!   - BucketMap<V, H>: string-keyed hash map with a bucket count fixed
//!     at creation and separate chaining per bucket. The hashing
//!     capability is caller-supplied; collision handling stays correct
//!     under arbitrarily bad hash functions.
//!   - SlotList<T>: singly-linked sequence with tracked head, tail and
//!     length. O(1) at the front and for back pushes; popping the back
//!     walks forward to the penultimate node.
//!
//! Storage
//! - Entries and nodes live in `slotmap::SlotMap` arenas; every
//!   structural link is an `Option<DefaultKey>` index. Splicing an entry
//!   out of a chain or a node out of the list is a local index edit, and
//!   generational keys turn any stale-link bug into a failed lookup
//!   rather than undefined behavior.
//!
//! Constraints
//! - Single-threaded: no internal synchronization; `BucketMap` is
//!   `!Send`/`!Sync` via its debug guard. No operation blocks or yields.
//! - No resizing or rehashing: the bucket count never changes after
//!   creation. Chains grow without bound; only performance degrades.
//! - Unique keys: duplicate inserts fail and hand the value back. The
//!   first writer wins; there is no overwrite.
//! - User code runs inside `BucketMap` operations only via the `KeyHash`
//!   capability; a debug-only reentrancy guard panics on nested entry
//!   while the structure may be transiently inconsistent.
//!
//! Error shape
//! - Precondition violations (empty key, duplicate key, out-of-range
//!   index) come back as `Err`/`None` without mutating the container,
//!   and carry the rejected value where one was passed in.
//!
//! Notes and non-goals
//! - No ordered map iteration; `BucketMap::iter` visits entries in
//!   arbitrary order.
//! - Key equality is exact byte-wise `str` equality; no comparators.
//! - Hashing only needs to be deterministic within one map instance.
//! - `SlotList::dispose` exists for callers that must run a cleanup
//!   action per remaining value, head to tail; plain drop runs no user
//!   code.

mod bucket_map;
mod bucket_map_proptest;
mod key_hash;
mod reentrancy;
mod slot_list;
mod slot_list_proptest;

// Public surface
pub use bucket_map::{BucketMap, CreateError, InsertError};
pub use key_hash::{FnKeyHash, KeyHash, RandomKeyHash};
pub use slot_list::SlotList;
