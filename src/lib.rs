//! random-access-map: a hash map that can also draw a uniformly-random
//! existing key in O(1).
//!
//! Internal Design:
//!
//! Summary
//! - Goal: combine dictionary guarantees (unique keys, O(1) expected
//!   insert/get/remove) with O(1) uniform random sampling of keys.
//! - Structure: two co-located substructures kept in lockstep under
//!   every mutation, plus a per-map random source.
//!   - Dense storage: `Vec` of entries, positions contiguous `0..len`,
//!     never a gap observable by callers.
//!   - Position index: `hashbrown::HashTable` mapping key -> position;
//!     the sole source of truth for presence.
//!   - `UniformSelector`: ChaCha-based generator drawing indices
//!     uniformly over exactly the occupied range, seeded from entropy
//!     at construction (or from a fixed seed for reproducibility).
//!
//! The one algorithmic trick
//! - Removal is swap-and-pop: swap the target entry with the last one,
//!   pop, and repoint the moved entry's index slot. Storage stays dense
//!   in O(1) at the cost of not preserving relative order. The bug
//!   magnet is the repoint step; the proptest state machine checks the
//!   storage/index bijection after every operation.
//!
//! Invariants (hold before and after every public call)
//! - `entries.len() == index.len()`.
//! - The entry at each indexed position holds the key that maps to it.
//! - Index slots form a bijection onto positions `0..len`.
//! - At most one entry per key.
//!
//! Error surface
//! - Absence is a first-class `None` (get, remove, random_key on an
//!   empty map), never a fault. Allocation failure aborts, as for any
//!   `Vec`-backed structure. `random_key` on an empty map is a checked
//!   `None` rather than an out-of-range draw.
//!
//! Hasher invariants
//! - Each entry stores a precomputed `u64` hash and index maintenance
//!   always uses the stored hash; `K: Hash` is never invoked after
//!   insertion, so the swap repoint never calls user code.
//!
//! Constraints and non-goals
//! - Single-owner, no internal locking; wrap the whole map in external
//!   mutual exclusion if shared. A debug-only guard panics on nested
//!   entry from user `Eq`/`Hash` code while internals are mid-mutation.
//! - No persistence or serialization.
//! - Iteration order is position order, disturbed by removals; it is
//!   not a guarantee.
//!
//! Companions (independent of the map)
//! - `modular`: modular arithmetic over Z_n for full-range `u64`.
//! - `remainder`: truncated/floored/euclidean remainder variants.
//! - `CleanupContext`: move-only deferred-cleanup closures.

mod cleanup;
mod guard;
pub mod modular;
mod random_access_map;
mod random_access_map_proptest;
pub mod remainder;
mod selector;

// Public surface
pub use cleanup::CleanupContext;
pub use random_access_map::{Iter, RandomAccessMap};
pub use selector::UniformSelector;
