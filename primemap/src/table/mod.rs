use std::iter;
use std::mem;

use crate::config::{Config, ConfigError};
use crate::hash::ProbeSeq;
use crate::prime::next_prime;

pub mod slot;

use slot::{Entry, Slot};

/// Entry API for the StringMap, similar to std::collections::HashMap
pub enum MapEntry<'a> {
    Occupied(OccupiedEntry<'a>),
    Vacant(VacantEntry<'a>),
}

/// A view into an occupied entry in the map
pub struct OccupiedEntry<'a> {
    map: &'a mut StringMap,
    slot_idx: usize,
}

/// A view into a vacant entry in the map
pub struct VacantEntry<'a> {
    map: &'a mut StringMap,
    key: String,
    slot_idx: usize,
}

/// An open-addressed, double-hashed map from owned string keys to owned
/// string values.
///
/// The slot array's length is always the next prime at or above `base_size`,
/// so a non-zero probe stride is coprime with the capacity and every probe
/// sequence cycles through the whole array. Inserts grow the table past 70%
/// load and removes shrink it below 10%, but `base_size` never drops under
/// the configured initial size.
///
/// Lookups return `&str` borrowed from table-owned storage; nothing is
/// copied out. Not synchronized: a caller sharing a table across threads
/// must serialize access externally.
pub struct StringMap {
    slots: Vec<Slot>,
    capacity: usize,
    base_size: usize,
    count: usize,
    config: Config,
}

impl Default for StringMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StringMap {
    /// Creates an empty map with the default [`Config`].
    pub fn new() -> Self {
        let config = Config::default();
        Self::new_sized(config.initial_base_size, config)
    }

    /// Creates an empty map with the given tunables, rejecting invalid ones.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new_sized(config.initial_base_size, config))
    }

    fn new_sized(base_size: usize, config: Config) -> Self {
        let capacity = next_prime(base_size);
        Self {
            slots: iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            capacity,
            base_size,
            count: 0,
            config,
        }
    }

    /// Returns the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the map contains no elements
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current slot-array length, always prime
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the logical size the capacity was derived from
    pub fn base_size(&self) -> usize {
        self.base_size
    }

    /// Returns the tunables this map was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the load factor of the map (count / capacity)
    pub fn load_factor(&self) -> f64 {
        // capacity is at least next_prime(1) == 2, never zero
        self.count as f64 / self.capacity as f64
    }

    /// Integer percent load, matching the resize trigger arithmetic.
    fn load(&self) -> usize {
        self.count * 100 / self.capacity
    }

    /// Find the slot index for a key.
    /// Ok(i): slot i holds the key. Err(i): key absent and i is the first
    /// empty slot on the probe chain, or `capacity` when the chain has no
    /// empty slot left (the array is saturated with tombstones and foreign
    /// entries).
    fn find_slot(&self, key: &str) -> Result<usize, usize> {
        let mut probe = ProbeSeq::new(key, &self.config, self.capacity);
        for _ in 0..self.capacity {
            match &self.slots[probe.index()] {
                Slot::Empty => return Err(probe.index()),
                Slot::Occupied(entry) if entry.key == key => return Ok(probe.index()),
                // tombstones and non-matching entries keep the chain going
                _ => probe.advance(),
            }
        }
        Err(self.capacity)
    }

    /// Insert a key-value pair into the map, returning the previous value if
    /// the key was already present.
    ///
    /// Grows the table first when the load exceeds the configured threshold,
    /// so an empty slot always exists on the probe chain. Tombstones are not
    /// reused; a new entry lands in the first truly empty slot.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        if self.load() > self.config.grow_at {
            self.grow();
        }
        self.insert_owned(key.into(), value.into())
    }

    fn insert_owned(&mut self, key: String, value: String) -> Option<String> {
        let mut slot = self.find_slot(&key);
        if slot == Err(self.capacity) {
            // no empty slot anywhere on the chain; rebuilding at the same
            // base size purges accumulated tombstones
            self.rebuild(self.base_size);
            slot = self.find_slot(&key);
        }
        match slot {
            Ok(idx) => {
                let entry = self.slots[idx]
                    .as_occupied_mut()
                    .expect("find_slot returned an occupied slot");
                Some(mem::replace(&mut entry.value, value))
            }
            Err(idx) => {
                self.slots[idx] = Slot::Occupied(Entry { key, value });
                self.count += 1;
                None
            }
        }
    }

    /// Get a value by key.
    ///
    /// The returned `&str` borrows the table's own storage; it is valid until
    /// the next mutating call. An empty slot on the probe chain proves the
    /// key absent, tombstones are probed past, and nothing is resized.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.find_slot(key) {
            Ok(idx) => self.slots[idx].as_occupied().map(|entry| entry.value.as_str()),
            Err(_) => None,
        }
    }

    /// Returns true if the map holds a value for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its value if it was present.
    ///
    /// The vacated slot becomes a tombstone so probe chains running through
    /// it stay intact. Shrinks the table first when the load has fallen
    /// below the configured threshold, never under the initial base size.
    /// The count only moves when an entry was actually removed.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.load() < self.config.shrink_at {
            self.shrink();
        }
        match self.find_slot(key) {
            Ok(idx) => {
                let entry = self.slots[idx].take()?;
                self.count -= 1;
                Some(entry.value)
            }
            Err(_) => None,
        }
    }

    /// Get an entry for the given key, allowing for efficient
    /// insertion/access patterns. Performs the same pre-grow check as
    /// [`insert`](Self::insert) so a vacant insertion never lands in an
    /// over-full array.
    pub fn entry(&mut self, key: impl Into<String>) -> MapEntry<'_> {
        if self.load() > self.config.grow_at {
            self.grow();
        }
        let key = key.into();
        let mut slot = self.find_slot(&key);
        if slot == Err(self.capacity) {
            self.rebuild(self.base_size);
            slot = self.find_slot(&key);
        }
        match slot {
            Ok(slot_idx) => MapEntry::Occupied(OccupiedEntry {
                map: self,
                slot_idx,
            }),
            Err(slot_idx) => MapEntry::Vacant(VacantEntry {
                map: self,
                key,
                slot_idx,
            }),
        }
    }

    fn grow(&mut self) {
        self.resize(self.base_size * self.config.resize_factor);
    }

    fn shrink(&mut self) {
        self.resize(self.base_size / self.config.resize_factor);
    }

    /// No-op when `new_base_size` is below the configured floor.
    fn resize(&mut self, new_base_size: usize) {
        if new_base_size < self.config.initial_base_size {
            return;
        }
        self.rebuild(new_base_size);
    }

    /// Builds a fresh table at `new_base_size` and re-inserts every occupied
    /// entry through the normal insert path, so tombstones are purged and
    /// probe chains reform for the new capacity. The live state is then
    /// swapped for the fresh one and the displaced slot array dropped
    /// exactly once.
    fn rebuild(&mut self, new_base_size: usize) {
        let mut fresh = Self::new_sized(new_base_size, self.config);
        for slot in mem::take(&mut self.slots) {
            if let Slot::Occupied(entry) = slot {
                fresh.insert_owned(entry.key, entry.value);
            }
        }
        *self = fresh;
    }
}

impl<'a> OccupiedEntry<'a> {
    /// Get a reference to the value in the entry
    pub fn get(&self) -> &str {
        self.map.slots[self.slot_idx]
            .as_occupied()
            .expect("entry points at an occupied slot")
            .value
            .as_str()
    }

    /// Insert a new value into the entry, returning the old value
    pub fn insert(&mut self, value: impl Into<String>) -> String {
        let entry = self.map.slots[self.slot_idx]
            .as_occupied_mut()
            .expect("entry points at an occupied slot");
        mem::replace(&mut entry.value, value.into())
    }
}

impl<'a> VacantEntry<'a> {
    /// Insert the value into the vacant entry, returning a reference to the
    /// inserted value
    pub fn insert(self, value: impl Into<String>) -> &'a str {
        self.map.slots[self.slot_idx] = Slot::Occupied(Entry {
            key: self.key,
            value: value.into(),
        });
        self.map.count += 1;
        self.map.slots[self.slot_idx]
            .as_occupied()
            .expect("slot was just filled")
            .value
            .as_str()
    }

    /// Insert the value into the vacant entry, or return reference to existing value
    pub fn or_insert(self, value: impl Into<String>) -> &'a str {
        self.insert(value)
    }

    /// Insert the value returned by the closure if the entry is vacant
    pub fn or_insert_with<F>(self, f: F) -> &'a str
    where
        F: FnOnce() -> String,
    {
        self.insert(f())
    }
}
