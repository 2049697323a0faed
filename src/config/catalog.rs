//! Catalog configuration module.
//!
//! Where the record store lives, how many trails the in-memory table can
//! hold, and how many trails a listing page shows.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Pipe-delimited record store
    pub data_file: PathBuf,

    /// Slots in the trail hash table; the table never grows
    pub table_capacity: usize,

    /// Trails per listing page
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("trails.txt"),
            table_capacity: 64,
            page_size: 5,
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_file must not be empty".to_string(),
            ));
        }

        if self.table_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "table_capacity must be greater than 0".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
