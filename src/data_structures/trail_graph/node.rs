//! Node implementation for the trail graph.

use serde::Serialize;

use crate::catalog::record::TrailAttributes;

/// A trail in the graph: its attributes and the trails it connects to.
///
/// Connection lists are only changed by
/// [`TrailGraph::connect_trails`](super::TrailGraph::connect_trails), which
/// keeps them symmetric and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailNode {
    /// Descriptive attributes
    attributes: TrailAttributes,

    /// Connected trail names, in the order the connections were made
    connections: Vec<String>,
}

impl TrailNode {
    /// Creates a node with no connections.
    pub(super) fn new(attributes: TrailAttributes) -> Self {
        Self {
            attributes,
            connections: Vec::new(),
        }
    }

    /// Returns the trail's attributes.
    pub fn attributes(&self) -> &TrailAttributes {
        &self.attributes
    }

    /// Returns the names of connected trails.
    pub fn connections(&self) -> &[String] {
        &self.connections
    }

    /// Returns whether this trail connects to `name`.
    pub fn is_connected_to(&self, name: &str) -> bool {
        self.connections.iter().any(|existing| existing == name)
    }

    pub(super) fn replace_attributes(&mut self, attributes: TrailAttributes) {
        self.attributes = attributes;
    }

    /// Adds `name` unless already present.
    pub(super) fn link(&mut self, name: &str) {
        if !self.is_connected_to(name) {
            self.connections.push(name.to_string());
        }
    }
}
