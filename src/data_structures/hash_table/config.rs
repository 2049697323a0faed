// Copyright (c) 2025 Trailhead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the hash table.

use super::error::{HashTableError, Result};

/// Configuration for the hash table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTableConfig {
    /// Number of slots. Fixed for the lifetime of the table, so it should be
    /// at least the number of records the caller expects to store.
    pub capacity: usize,
}

impl HashTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `HashTableConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of slots in the table.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks that the configuration describes a usable table.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(HashTableError::ConfigurationError(
                "capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            capacity: 64, // Catalogs are page-scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_validation() {
        assert!(HashTableConfig::default().validate().is_ok());
        assert_eq!(HashTableConfig::new().with_capacity(7).capacity, 7);
        assert!(HashTableConfig::new().with_capacity(0).validate().is_err());
    }
}
