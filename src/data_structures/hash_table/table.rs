// Copyright (c) 2025 Trailhead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the open-addressing hash table.
//!
//! Slots are probed linearly from a key's home slot. Deleted entries leave a
//! tombstone behind: lookups walk past tombstones, inserts reuse the first one
//! they pass once the key is known to be absent.

use std::borrow::Borrow;
use std::hash::Hash;
use std::mem;

use crate::data_structures::hash_table::config::HashTableConfig;
use crate::data_structures::hash_table::error::{HashTableError, Result};
use crate::data_structures::hash_table::hash::SlotHasher;

/// State of a single slot.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never used; terminates a probe sequence
    Empty,
    /// Previously occupied; probes continue past it
    Tombstone,
    /// Live entry
    Occupied { key: K, value: V },
}

/// A fixed-capacity hash table with linear probing.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq + Hash`.
/// * `V` - The value type. Any payload is accepted.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    /// Slot storage, `capacity` entries long
    slots: Vec<Slot<K, V>>,

    /// Maps keys to home slots
    hasher: SlotHasher,

    /// Number of live entries
    len: usize,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new empty table with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::ConfigurationError`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(HashTableConfig::new().with_capacity(capacity))
    }

    /// Creates a new empty table with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the hash table.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::ConfigurationError`] if the configuration is invalid.
    pub fn with_config(config: HashTableConfig) -> Result<Self> {
        config.validate()?;
        let slots = (0..config.capacity).map(|_| Slot::Empty).collect();
        Ok(Self {
            slots,
            hasher: SlotHasher::new(config.capacity),
            len: 0,
        })
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is overwritten in place and the
    /// previous value is returned. Otherwise the pair goes into the first
    /// tombstone or empty slot on the key's probe sequence.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(old))` - The key existed and `old` was replaced.
    /// * `Ok(None)` - The key is new.
    ///
    /// # Errors
    ///
    /// Returns [`HashTableError::TableFull`] if the key is new and every slot
    /// holds a live entry.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut free_slot: Option<usize> = None;

        for index in self.hasher.probe_sequence(&key) {
            match &mut self.slots[index] {
                Slot::Empty => {
                    free_slot.get_or_insert(index);
                    break;
                }
                Slot::Tombstone => {
                    free_slot.get_or_insert(index);
                }
                Slot::Occupied {
                    key: existing,
                    value: stored,
                } if *existing == key => {
                    return Ok(Some(mem::replace(stored, value)));
                }
                Slot::Occupied { .. } => {}
            }
        }

        let index = free_slot.ok_or(HashTableError::TableFull {
            capacity: self.capacity(),
        })?;
        self.slots[index] = Slot::Occupied { key, value };
        self.len += 1;
        Ok(None)
    }

    /// Looks up the value stored for `key`.
    ///
    /// # Returns
    ///
    /// `Some(&value)` if the key exists, `None` otherwise.
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        match &self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Looks up the value stored for `key` for modification.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Checks if the key exists in the table.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(key).is_some()
    }

    /// Removes `key` and returns its value.
    ///
    /// The vacated slot becomes a tombstone so keys that probed past it stay
    /// reachable.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index(key)?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                Some(value)
            }
            // find_index only returns occupied slots
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    /// Returns an iterator over all stored keys.
    ///
    /// Keys come out in slot order. The order is arbitrary but stable as long
    /// as the table is not modified, and the iterator can be cloned to restart.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over all stored key-value pairs in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Walks the probe sequence for `key` and returns its slot, stopping at
    /// the first never-used slot.
    fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        for index in self.hasher.probe_sequence(key) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied { key: existing, .. }
                    if <K as Borrow<Q>>::borrow(existing) == key =>
                {
                    return Some(index);
                }
                Slot::Occupied { .. } => {}
            }
        }
        None
    }
}

/// Iterator over the key-value pairs of a [`HashTable`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }
}

/// Iterator over the keys of a [`HashTable`].
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
