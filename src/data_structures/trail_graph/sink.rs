//! Persistence hand-off for the trail graph.

use crate::catalog::record::TrailRecord;
use crate::error::CatalogResult;

/// Receives every record the graph is about to store.
///
/// The graph calls [`TrailSink::append`] before touching its own state and
/// only applies the change when the append succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait TrailSink {
    /// Persists one new or updated record.
    fn append(&mut self, record: &TrailRecord) -> CatalogResult<()>;
}

/// Sink that accepts and discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TrailSink for NullSink {
    fn append(&mut self, _record: &TrailRecord) -> CatalogResult<()> {
        Ok(())
    }
}
