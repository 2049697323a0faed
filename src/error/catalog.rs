//! Catalog error module.
//!
//! This module defines error types raised while loading, querying and
//! appending trail records.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::hash_table::HashTableError;

/// Errors that can occur during catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A value could not be read as the type its field requires.
    #[error("Invalid value '{value}' for {field}: expected {expected}")]
    Parse {
        /// Field header
        field: String,
        /// Offending text
        value: String,
        /// Description of the accepted form
        expected: &'static str,
    },

    /// A data line does not have one value per header column.
    #[error("Malformed line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        /// 1-based line number in the record store
        line: usize,
        /// Number of header columns
        expected: usize,
        /// Number of values on the line
        found: usize,
    },

    /// The record store has no usable header row.
    #[error("Invalid header row: {0}")]
    InvalidHeader(String),

    /// A submitted value cannot be stored.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Field header
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The in-memory table rejected a record.
    #[error("Trail table error: {0}")]
    Table(#[from] HashTableError),

    /// Reading or appending the record store failed.
    #[error("Record store I/O error on {path:?}: {source}")]
    Io {
        /// Record store path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
