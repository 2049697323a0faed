//! Trailhead Library
//!
//! This library contains the core components of Trailhead, a small catalog
//! of hiking trails with search, sort and adjacency browsing. The binary
//! crate is a command-line front end over it.
//!
//! # Architecture
//!
//! - [`data_structures`]: hand-rolled hash table, binary search tree, trail
//!   graph and page navigator
//! - [`catalog`]: trail records, the pipe-delimited record store, sorting,
//!   filtering and pagination
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types and reporting

// Re-export public modules
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Trailhead.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
