//! Data structures behind the trail catalog.
//!
//! Hand-rolled containers with small, fully tested contracts:
//! - No unsafe code
//! - Single-threaded ownership; callers hold `&mut` for every mutation
//! - Absence is reported with `Option`, capacity and format problems with
//!   typed errors

pub mod hash_table;
pub mod page_navigator;
pub mod search_tree;
pub mod trail_graph;

// Re-export common data structures
pub use hash_table::{HashTable, HashTableConfig, HashTableError};
pub use page_navigator::PageNavigator;
pub use search_tree::BinarySearchTree;
pub use trail_graph::{NullSink, TrailGraph, TrailNode, TrailSink};
