// Copyright (c) 2025 Trailhead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot hashing for the hash table.
//!
//! FNV-1a is used instead of the standard library's randomly seeded SipHash so
//! that a given key lands in the same home slot on every run.

use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

/// Computes the FNV-1a hash of a key.
pub fn fnv_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Maps keys onto home slots and walks the linear probe sequence.
#[derive(Debug, Clone)]
pub struct SlotHasher {
    table_size: usize,
}

impl SlotHasher {
    /// Creates a hasher for a table with `table_size` slots.
    ///
    /// `table_size` must be non-zero; the table validates this before
    /// constructing a hasher.
    pub fn new(table_size: usize) -> Self {
        Self { table_size }
    }

    /// Returns the home slot of a key.
    pub fn home_slot<K: Hash + ?Sized>(&self, key: &K) -> usize {
        (fnv_hash(key) % self.table_size as u64) as usize
    }

    /// Returns every slot index in probe order, starting at the key's home
    /// slot and wrapping around once.
    pub fn probe_sequence<K: Hash + ?Sized>(&self, key: &K) -> impl Iterator<Item = usize> {
        let start = self.home_slot(key);
        let size = self.table_size;
        (0..size).map(move |step| (start + step) % size)
    }
}
