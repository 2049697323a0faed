// Copyright (c) 2025 Trailhead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the open-addressing hash table.

/// Error types for hash table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HashTableError {
    /// Every slot holds a live entry and the key is not among them
    #[error("Hash table is full: no free slot among {capacity} slots")]
    TableFull {
        /// Number of slots in the table
        capacity: usize,
    },

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for hash table operations
pub type Result<T> = std::result::Result<T, HashTableError>;
