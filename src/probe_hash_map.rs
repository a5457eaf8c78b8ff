//! ProbeHashMap: open-addressing storage with linear probing and tombstones.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::hash_map::RandomState;

/// Capacity used when none is given (or when a caller asks for zero).
pub const DEFAULT_CAPACITY: usize = 256;

// Grow once an insertion would push live entries past this percentage of
// capacity. Bounds probe length well before the saturation fallback fires.
const MAX_LOAD_PERCENT: usize = 70;

/// One slot of the backing array. A `Tombstone` keeps probe chains intact
/// for keys inserted after the removed one; only growth discards them.
#[derive(Debug)]
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

/// Outcome of [`ProbeHashMap::set`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SetOutcome {
    /// The key was absent; a new entry was created.
    Inserted,
    /// The key was live; its value was overwritten in place.
    Updated,
    /// The table grew (doubling + full rehash) before the entry was
    /// stored. The entry is durably in the table when this is returned.
    Grown,
}

/// An open-addressing hash map: all entries live directly in one
/// contiguous slot array, collisions resolve by scanning forward with
/// wraparound, and removals leave tombstones.
///
/// Invariants:
/// - `len() < capacity()` strictly, after every public operation.
/// - Each live key occupies exactly one slot, reachable from its home
///   slot (`hash % capacity`) before any `Empty` slot.
///
/// Single-threaded by design: mutation requires `&mut self`, and callers
/// wanting shared access must add their own exclusion boundary.
pub struct ProbeHashMap<K, V, S = RandomState> {
    slots: Vec<Slot<K, V>>,
    live: usize,
    tombstones: usize,
    hasher: S,
}

/// Where a `set` probe landed.
enum ProbeResult {
    /// Index of the live entry holding the key.
    Occupied(usize),
    /// Index of the slot to claim: the first tombstone on the chain if
    /// one was seen, otherwise the terminating empty slot.
    Vacant(usize),
    /// Full scan found neither the key nor a landing slot.
    Saturated,
}

impl<K, V> ProbeHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for ProbeHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ProbeHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            slots: std::iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            live: 0,
            tombstones: 0,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Length of the backing slot array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots awaiting reuse or the next growth.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    fn home_slot<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(key) as usize) % self.slots.len()
    }

    /// Insert or update. Tombstone rule: the first tombstone on the probe
    /// chain is remembered, but it is claimed only once an empty slot (or
    /// an exhausted scan) proves the key is not live further along. An
    /// existing live key is therefore always updated in place, never
    /// shadowed by an earlier tombstone.
    ///
    /// A `set` never loses the caller's pair: if no landing slot exists,
    /// or the insertion would cross the load-factor limit, the table
    /// grows and the insertion is completed before returning.
    pub fn set(&mut self, key: K, value: V) -> SetOutcome {
        match self.probe_for_set(&key) {
            ProbeResult::Occupied(idx) => {
                self.slots[idx] = Slot::Occupied { key, value };
                SetOutcome::Updated
            }
            ProbeResult::Vacant(idx) => {
                if (self.live + 1) * 100 > self.slots.len() * MAX_LOAD_PERCENT {
                    self.grow();
                    self.insert_absent(key, value);
                    SetOutcome::Grown
                } else {
                    self.fill_slot(idx, key, value);
                    SetOutcome::Inserted
                }
            }
            ProbeResult::Saturated => {
                self.grow();
                self.insert_absent(key, value);
                SetOutcome::Grown
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, value } if k.borrow() == key => return Some(value),
                // Tombstones and non-matching entries: keep probing.
                _ => {}
            }
            idx = (idx + 1) % capacity;
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Remove a live key, returning its value. The slot becomes a
    /// tombstone so probe chains through it stay correct. Absent keys
    /// are a normal `None`, never an error.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied { key: k, .. } if k.borrow() == key => {
                    let slot = mem::replace(&mut self.slots[idx], Slot::Tombstone);
                    self.live -= 1;
                    self.tombstones += 1;
                    let Slot::Occupied { value, .. } = slot else {
                        unreachable!()
                    };
                    return Some(value);
                }
                _ => {}
            }
            idx = (idx + 1) % capacity;
        }
        None
    }

    /// Live entries in slot order (a capacity-indexed scan).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// The first `n` live entries in slot order; `n == 0` yields all of
    /// them.
    pub fn top_n(&self, n: usize) -> TopN<'_, K, V> {
        TopN {
            entries: self.iter(),
            remaining: if n == 0 { self.live } else { n },
        }
    }

    /// All live entries, sorted by value descending. The sort is
    /// unstable and compares with `Ord::cmp`; the relative order of
    /// equal values is unspecified.
    pub fn entries_by_value_desc(&self) -> Vec<(&K, &V)>
    where
        V: Ord,
    {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1));
        entries
    }

    fn probe_for_set(&self, key: &K) -> ProbeResult {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        let mut reusable = None;
        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return ProbeResult::Vacant(reusable.unwrap_or(idx)),
                Slot::Occupied { key: k, .. } if k == key => return ProbeResult::Occupied(idx),
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(idx);
                    }
                }
            }
            idx = (idx + 1) % capacity;
        }
        match reusable {
            Some(idx) => ProbeResult::Vacant(idx),
            None => ProbeResult::Saturated,
        }
    }

    fn fill_slot(&mut self, idx: usize, key: K, value: V) {
        if matches!(self.slots[idx], Slot::Tombstone) {
            self.tombstones -= 1;
        }
        self.slots[idx] = Slot::Occupied { key, value };
        self.live += 1;
    }

    // Only valid right after `grow`: no tombstones, key known absent.
    fn insert_absent(&mut self, key: K, value: V) {
        let idx = self.first_empty_from_home(&key);
        self.fill_slot(idx, key, value);
    }

    fn first_empty_from_home(&self, key: &K) -> usize {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);
        while !matches!(self.slots[idx], Slot::Empty) {
            idx = (idx + 1) % capacity;
        }
        idx
    }

    /// Double the capacity and re-insert every live entry at its new home
    /// slot. A key's position is `hash % capacity`, so a capacity change
    /// invalidates every stored position; re-probing from scratch is
    /// mandatory, not optional. Tombstones are dropped, not carried over.
    /// Allocation failure aborts the process (std allocator behavior).
    fn grow(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let old = mem::replace(
            &mut self.slots,
            std::iter::repeat_with(|| Slot::Empty)
                .take(new_capacity)
                .collect(),
        );
        self.tombstones = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                let idx = self.first_empty_from_home(&key);
                self.slots[idx] = Slot::Occupied { key, value };
            }
        }
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                return Some((key, value));
            }
        }
        None
    }
}

/// Iterator returned by [`ProbeHashMap::top_n`].
pub struct TopN<'a, K, V> {
    entries: Iter<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iterator for TopN<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.entries.next()?;
        self.remaining -= 1;
        Some(item)
    }
}
