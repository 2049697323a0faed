//! Trail catalog: the contract the command-line front end consumes.
//!
//! [`TrailCatalog`] ties the data structures together:
//!
//! * Records loaded from the store live in a [`HashTable`] keyed by name and
//!   are enumerated with `keys()` + `search()`
//! * Sorted views rebuild a search tree per request ([`query::sort_records`])
//! * Submissions go through the [`TrailGraph`], which appends them to the
//!   store, and are mirrored into the table so listings show them at once
//! * Results are cut into fixed-size [`Pages`]

pub mod browse;
pub mod pager;
pub mod query;
pub mod record;
pub mod render;
pub mod store;

use tracing::{info, warn};

use crate::config::catalog::CatalogConfig;
use crate::data_structures::hash_table::{HashTable, HashTableError};
use crate::data_structures::trail_graph::{TrailGraph, TrailSink};
use crate::error::{CatalogError, CatalogResult};

pub use pager::Pages;
pub use query::{SortOrder, TrailFilter};
pub use record::{TrailAttributes, TrailDraft, TrailField, TrailRecord, UNKNOWN};
pub use store::FileSink;

/// In-memory trail catalog.
#[derive(Debug)]
pub struct TrailCatalog {
    /// Every known record by name
    table: HashTable<String, TrailRecord>,

    /// Trails and their connections; owns the persistence sink
    graph: TrailGraph,

    /// Records per page
    page_size: usize,
}

impl TrailCatalog {
    /// Creates a catalog over an already loaded table.
    ///
    /// Every table record is registered in the graph without being appended
    /// again, so connections can be made to any known trail.
    pub fn new(
        table: HashTable<String, TrailRecord>,
        sink: Box<dyn TrailSink>,
        page_size: usize,
    ) -> Self {
        let mut graph = TrailGraph::with_sink(sink);
        for (_, record) in table.iter() {
            graph.load_trail(record.clone());
        }
        Self {
            table,
            graph,
            page_size,
        }
    }

    /// Loads the record store named in `config` and appends new trails to it.
    ///
    /// A store that does not exist yet is an empty catalog; the first
    /// submission creates it.
    ///
    /// # Errors
    ///
    /// Any error from [`store::load_table`], or a configuration error from
    /// the table for a zero capacity.
    pub fn open(config: &CatalogConfig) -> CatalogResult<Self> {
        let table = if config.data_file.exists() {
            store::load_table(&config.data_file, config.table_capacity)?
        } else {
            warn!(path = ?config.data_file, "Record store not found, starting empty");
            HashTable::with_capacity(config.table_capacity)?
        };
        let sink = FileSink::new(&config.data_file);
        Ok(Self::new(table, Box::new(sink), config.page_size))
    }

    /// Returns the number of trails.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns whether the catalog holds no trails.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Looks a trail up by name, ignoring surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&TrailRecord> {
        self.table.search(name.trim())
    }

    /// Returns the trail graph.
    pub fn graph(&self) -> &TrailGraph {
        &self.graph
    }

    /// Enumerates every record in table order.
    pub fn records(&self) -> Vec<&TrailRecord> {
        self.table
            .keys()
            .filter_map(|name| self.table.search(name))
            .collect()
    }

    /// Returns every record sorted by `field`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if a record holds a malformed numeric value.
    pub fn sorted(&self, field: TrailField, order: SortOrder) -> CatalogResult<Vec<&TrailRecord>> {
        query::sort_records(self.records(), field, order)
    }

    /// Returns the records matching `filter`, sorted by name.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if a numeric criterion meets a malformed value.
    pub fn search(&self, filter: &TrailFilter) -> CatalogResult<Vec<&TrailRecord>> {
        let matching = filter.apply(self.records())?;
        query::sort_records(matching, TrailField::Name, SortOrder::Ascending)
    }

    /// Adds or updates a trail.
    ///
    /// The record is appended to the store first; the graph and table only
    /// change when that succeeds. A new name is refused up front when the
    /// table has no free slot, so the store never gets a line the catalog
    /// could not hold.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::Table`] if the table is full.
    /// * Any error from [`TrailGraph::add_trail`].
    pub fn submit(&mut self, name: &str, draft: TrailDraft) -> CatalogResult<TrailRecord> {
        let name = name.trim();
        if !self.table.contains_key(name) && self.table.len() == self.table.capacity() {
            return Err(CatalogError::Table(HashTableError::TableFull {
                capacity: self.table.capacity(),
            }));
        }

        let attributes = self.graph.add_trail(name, draft)?.attributes().clone();
        let record = TrailRecord {
            name: name.to_string(),
            attributes,
        };
        self.table.insert(record.name.clone(), record.clone())?;
        info!(trail = %record.name, "Submitted trail");
        Ok(record)
    }

    /// Connects two known trails; unknown names are ignored.
    ///
    /// Connections live in memory only; the record store has no column for
    /// them.
    pub fn connect(&mut self, a: &str, b: &str) {
        self.graph.connect_trails(a, b);
    }

    /// Names of the trails connected to `name`, if it exists.
    pub fn connections(&self, name: &str) -> Option<&[String]> {
        self.graph.get_trail(name).map(|node| node.connections())
    }
}
