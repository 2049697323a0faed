//! Trail adjacency graph.
//!
//! Owns one [`TrailNode`] per trail name and the undirected "connected to"
//! relation between them. Every new or updated trail is handed to a
//! [`TrailSink`] for persistence before the graph changes, so a failed write
//! never leaves the graph ahead of the record store.
//!
//! # Example
//!
//! ```
//! use trailhead_lib::catalog::record::TrailDraft;
//! use trailhead_lib::data_structures::trail_graph::TrailGraph;
//!
//! let mut graph = TrailGraph::new();
//! graph.add_trail("A", TrailDraft::new()).unwrap();
//! graph.add_trail("B", TrailDraft::new()).unwrap();
//!
//! graph.connect_trails("A", "B");
//! assert_eq!(graph.get_trail("A").unwrap().connections(), ["B"]);
//! assert_eq!(graph.get_trail("B").unwrap().connections(), ["A"]);
//!
//! // Unknown endpoints are ignored
//! graph.connect_trails("A", "C");
//! assert_eq!(graph.get_trail("A").unwrap().connections(), ["B"]);
//! ```

mod node;
mod sink;

use std::fmt;

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::catalog::record::{TrailDraft, TrailField, TrailRecord};
use crate::error::{CatalogError, CatalogResult};

pub use node::TrailNode;
pub use sink::{NullSink, TrailSink};

#[cfg(test)]
pub use sink::MockTrailSink;

/// Named trails with symmetric adjacency.
pub struct TrailGraph {
    /// Trail name to node
    trails: HashMap<String, TrailNode>,

    /// Persistence collaborator
    sink: Box<dyn TrailSink>,
}

impl TrailGraph {
    /// Creates an empty graph that persists nothing.
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullSink))
    }

    /// Creates an empty graph that hands every added trail to `sink`.
    pub fn with_sink(sink: Box<dyn TrailSink>) -> Self {
        Self {
            trails: HashMap::new(),
            sink,
        }
    }

    /// Returns the number of trails.
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    /// Returns whether the graph holds no trails.
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Adds a trail or replaces the attributes of an existing one.
    ///
    /// The name is trimmed. Missing draft fields become `"Unknown"`. An
    /// existing trail keeps its connections. The record is appended to the
    /// sink first; if that fails the graph is left unchanged and the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::InvalidField`] if `name` is blank.
    /// * Whatever the sink reports for a failed append.
    pub fn add_trail(
        &mut self,
        name: impl Into<String>,
        draft: TrailDraft,
    ) -> CatalogResult<&TrailNode> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                field: TrailField::Name.header().to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let record = TrailRecord::new(name.trim(), draft);
        self.sink.append(&record)?;

        let TrailRecord { name, attributes } = record;
        let node = match self.trails.entry(name) {
            hashbrown::hash_map::Entry::Occupied(entry) => {
                debug!(trail = %entry.key(), "Replacing trail attributes");
                let node = entry.into_mut();
                node.replace_attributes(attributes);
                node
            }
            hashbrown::hash_map::Entry::Vacant(entry) => {
                info!(trail = %entry.key(), "Added trail");
                entry.insert(TrailNode::new(attributes))
            }
        };
        Ok(node)
    }

    /// Registers a trail that is already persisted, without appending it.
    ///
    /// Used when seeding the graph from the record store. An existing trail
    /// keeps its connections and gets the record's attributes.
    pub fn load_trail(&mut self, record: TrailRecord) {
        let TrailRecord { name, attributes } = record;
        match self.trails.get_mut(&name) {
            Some(node) => node.replace_attributes(attributes),
            None => {
                self.trails.insert(name, TrailNode::new(attributes));
            }
        }
    }

    /// Connects two existing trails in both directions.
    ///
    /// Names are trimmed as in [`TrailGraph::add_trail`]. Does nothing unless
    /// both trails exist and are distinct. Connecting an already connected
    /// pair changes nothing.
    pub fn connect_trails(&mut self, a: &str, b: &str) {
        let (a, b) = (a.trim(), b.trim());
        if a == b || !self.trails.contains_key(a) || !self.trails.contains_key(b) {
            debug!(from = a, to = b, "Ignoring connection to unknown trail");
            return;
        }

        if let Some(node) = self.trails.get_mut(a) {
            node.link(b);
        }
        if let Some(node) = self.trails.get_mut(b) {
            node.link(a);
        }
        debug!(from = a, to = b, "Connected trails");
    }

    /// Returns every trail keyed by name.
    pub fn get_trails(&self) -> &HashMap<String, TrailNode> {
        &self.trails
    }

    /// Returns a single trail, or `None` if it was never added.
    pub fn get_trail(&self, name: &str) -> Option<&TrailNode> {
        self.trails.get(name.trim())
    }

    /// Returns a trail as a standalone record.
    pub fn record(&self, name: &str) -> Option<TrailRecord> {
        self.trails.get_key_value(name.trim()).map(|(name, node)| TrailRecord {
            name: name.clone(),
            attributes: node.attributes().clone(),
        })
    }
}

impl Default for TrailGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrailGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailGraph")
            .field("trails", &self.trails)
            .finish_non_exhaustive()
    }
}
