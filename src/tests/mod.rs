//! Test modules for Trailhead.
//!
//! This module contains the crate-level testing infrastructure:
//! - Configuration and error handling tests
//! - Catalog tests that go through the record store on disk
//! - Property-based tests for the data structures using proptest
//! - Test fixtures and utilities

pub mod catalog_tests;
pub mod property_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    distance_strategy, elevation_strategy, trail_name_strategy, TestFixture,
};
