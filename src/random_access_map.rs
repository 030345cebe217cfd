//! RandomAccessMap: hash-map semantics plus O(1) uniformly-random key draws.

use crate::guard::AccessGuard;
use crate::selector::UniformSelector;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashTable;
use std::collections::hash_map::RandomState;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

/// An associative container with unique keys, O(1) expected
/// insert/get/remove, and an O(1) uniformly-random key draw.
///
/// Two structures cooperate under every mutation:
/// - dense storage: a `Vec` of entries, positions contiguous in
///   `0..len` with no gaps;
/// - position index: a hash table mapping each key to its current
///   position, the sole source of truth for presence.
///
/// Removal swaps the target entry with the last one before popping, so
/// the storage stays gap-free without shifting trailing elements. The
/// price is that relative order of the remaining entries is not
/// preserved; iteration order is position order and is disturbed by
/// removals.
///
/// Each entry keeps its key's precomputed `u64` hash, so `K: Hash` is
/// never invoked after insertion and index maintenance never runs user
/// code.
///
/// Single-owner structure: no internal locking. Callers needing shared
/// access must wrap the whole map in external mutual exclusion.
pub struct RandomAccessMap<K, V, S = RandomState> {
    hasher: S,
    entries: Vec<Entry<K, V>>,
    index: HashTable<usize>,
    selector: UniformSelector,
    guard: AccessGuard,
}

impl<K, V> RandomAccessMap<K, V>
where
    K: Eq + Hash,
{
    /// Empty map with the default hasher and an entropy-seeded selector.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::default())
    }

    /// Empty map whose random draws are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_hasher_and_selector(
            RandomState::default(),
            UniformSelector::from_seed_u64(seed),
        )
    }
}

impl<K, V> Default for RandomAccessMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over entries in dense-position order.
pub struct Iter<'a, K, V> {
    it: core::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (&e.key, &e.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<K, V, S> RandomAccessMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_hasher_and_selector(hasher, UniformSelector::from_entropy())
    }

    pub fn with_hasher_and_selector(hasher: S, selector: UniformSelector) -> Self {
        Self {
            hasher,
            entries: Vec::new(),
            index: HashTable::new(),
            selector,
            guard: AccessGuard::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value. Absence is a normal `None`, not a fault.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter();
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&p| self.entries[p].key.borrow() == q)
            .map(|&p| &self.entries[p].value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter();
        let hash = self.make_hash(q);
        let pos = self
            .index
            .find(hash, |&p| self.entries[p].key.borrow() == q)
            .copied()?;
        Some(&mut self.entries[pos].value)
    }

    pub fn get_key_value<Q>(&self, q: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter();
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&p| self.entries[p].key.borrow() == q)
            .map(|&p| {
                let e = &self.entries[p];
                (&e.key, &e.value)
            })
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter();
        let hash = self.make_hash(q);
        self.index
            .find(hash, |&p| self.entries[p].key.borrow() == q)
            .is_some()
    }

    /// Insert a key-value pair, returning the displaced prior value if the
    /// key was already present.
    ///
    /// A present key is fully unlinked before the new entry is appended, so
    /// there is never a transient duplicate. The new entry always lands at
    /// the highest position, which means re-inserting an existing key may
    /// change its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.guard.enter();
        let hash = self.make_hash(&key);
        let prev = Self::take(&mut self.entries, &mut self.index, hash, &key).map(|e| e.value);
        let pos = self.entries.len();
        self.entries.push(Entry { key, value, hash });
        let _ = self
            .index
            .insert_unique(hash, pos, |&p| self.entries[p].hash);
        prev
    }

    /// Remove a key, returning its value. Removing an absent key is a
    /// supported no-op.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.guard.enter();
        let hash = self.make_hash(q);
        Self::take(&mut self.entries, &mut self.index, hash, q).map(|e| e.value)
    }

    // Swap-and-pop removal. Unlinks the key's index slot, swaps its entry
    // with the last one, pops, and repoints the moved entry's slot. Callers
    // hold the access scope.
    fn take<Q>(
        entries: &mut Vec<Entry<K, V>>,
        index: &mut HashTable<usize>,
        hash: u64,
        q: &Q,
    ) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let pos = match index.find_entry(hash, |&p| entries[p].key.borrow() == q) {
            Ok(slot) => slot.remove().0,
            Err(_) => return None,
        };
        let last = entries.len() - 1;
        if pos != last {
            entries.swap(pos, last);
            // The slot of the entry that moved into `pos` still refers to
            // the old last position.
            let moved_hash = entries[pos].hash;
            *index
                .find_entry(moved_hash, |&p| p == last)
                .unwrap()
                .into_mut() = pos;
        }
        entries.pop()
    }

    /// Draw a key uniformly at random: every live key with probability
    /// `1/len`. Returns `None` on an empty map; the degenerate empty range
    /// is checked, never sampled.
    pub fn random_key(&mut self) -> Option<&K> {
        let _g = self.guard.enter();
        let pos = self.selector.pick(self.entries.len())?;
        Some(&self.entries[pos].key)
    }

    /// Like [`random_key`](Self::random_key), also yielding the value.
    pub fn random_entry(&mut self) -> Option<(&K, &V)> {
        let _g = self.guard.enter();
        let pos = self.selector.pick(self.entries.len())?;
        let e = &self.entries[pos];
        Some((&e.key, &e.value))
    }

    /// Iterate entries in dense-position order. The order is disturbed by
    /// removals and carries no guarantee.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    // Test-only consistency check: storage and index sizes match, index
    // slots form a bijection onto positions, and every entry's key resolves
    // back to its own position.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.entries.len(), self.index.len());
        let mut referenced = vec![false; self.entries.len()];
        for &p in self.index.iter() {
            assert!(p < self.entries.len(), "index slot out of range");
            assert!(!referenced[p], "position referenced twice");
            referenced[p] = true;
        }
        for (p, e) in self.entries.iter().enumerate() {
            let found = self
                .index
                .find(e.hash, |&i| self.entries[i].key == e.key)
                .copied();
            assert_eq!(found, Some(p), "entry does not resolve to its position");
        }
    }
}
