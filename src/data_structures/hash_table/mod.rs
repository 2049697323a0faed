// Copyright (c) 2025 Trailhead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Open-addressing hash table for the trail catalog.
//!
//! A fixed-capacity hash table that places each key at a deterministic slot
//! (FNV-1a hash modulo capacity) and resolves collisions by linear probing.
//! The table backs the trail catalog loaded from disk: trail name to record.
//!
//! # Features
//!
//! - Deterministic slot placement across runs (FNV-1a, no random seed)
//! - Overwrite-in-place semantics for duplicate keys
//! - Tombstone deletion that keeps colliding probe chains reachable
//! - Explicit `TableFull` error instead of silent growth
//!
//! # Example
//!
//! ```
//! use trailhead_lib::data_structures::hash_table::HashTable;
//!
//! let mut table = HashTable::<String, u32>::with_capacity(8).unwrap();
//!
//! // First insert reports no previous value
//! assert_eq!(table.insert("Ridge Loop".to_string(), 1).unwrap(), None);
//!
//! // Same key again overwrites and hands back the old value
//! assert_eq!(table.insert("Ridge Loop".to_string(), 2).unwrap(), Some(1));
//! assert_eq!(table.search("Ridge Loop"), Some(&2));
//!
//! // Unknown keys are simply absent
//! assert_eq!(table.search("River Walk"), None);
//! ```
//!
//! # Capacity
//!
//! The table never resizes. Callers size it from the expected number of
//! records; once every slot holds a live entry the next new key fails with
//! [`HashTableError::TableFull`]. Slots freed by [`HashTable::delete`] are
//! reused by later inserts.

mod config;
mod error;
mod hash;
mod table;

pub use config::HashTableConfig;
pub use error::{HashTableError, Result};
pub use table::{HashTable, Iter, Keys};
