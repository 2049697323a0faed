//! Pipe-delimited record store.
//!
//! The store is a text file whose first line names the columns and whose
//! remaining lines each hold one trail:
//!
//! ```text
//! Trail Name|Location|Distance (miles)|Elevation Gain (feet)|Difficulty (1-3)
//! Ridge Loop|Park|3.5|500|2
//! ```
//!
//! Lines are split strictly on `|` and zipped with the header positionally.
//! New records are appended as one line preceded by a newline; existing lines
//! are never rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::record::{TrailDraft, TrailField, TrailRecord};
use crate::data_structures::hash_table::HashTable;
use crate::data_structures::trail_graph::TrailSink;
use crate::error::{CatalogError, CatalogResult};

/// Column separator.
pub const FIELD_SEPARATOR: char = '|';

/// Returns the header row written to a new record store.
pub fn header_line() -> String {
    TrailField::ALL.map(TrailField::header).join("|")
}

/// Formats a record as one data line, without a line terminator.
pub fn format_record(record: &TrailRecord) -> String {
    record.columns().join("|")
}

/// Reads the record store at `path` into a table with `capacity` slots.
///
/// # Errors
///
/// * [`CatalogError::Io`] if the file cannot be read.
/// * Any error from [`parse_records`].
pub fn load_table(path: &Path, capacity: usize) -> CatalogResult<HashTable<String, TrailRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_records(&contents, capacity)?;
    info!(path = ?path, trails = table.len(), "Loaded record store");
    Ok(table)
}

/// Parses record store text into a table with `capacity` slots.
///
/// Blank lines are skipped. Columns whose header is not a known field are
/// ignored; known fields without a column become `"Unknown"`. A later line
/// with the same trail name overwrites an earlier one.
///
/// # Errors
///
/// * [`CatalogError::InvalidHeader`] if there is no header row or it lacks the
///   `Trail Name` column.
/// * [`CatalogError::MalformedLine`] if a line's field count differs from the
///   header's.
/// * [`CatalogError::InvalidField`] if a line has an empty trail name.
/// * [`CatalogError::Table`] if the table runs out of slots.
pub fn parse_records(contents: &str, capacity: usize) -> CatalogResult<HashTable<String, TrailRecord>> {
    let mut table = HashTable::with_capacity(capacity)?;
    let mut lines = contents.lines().enumerate();

    let header = match lines.next() {
        Some((_, header)) if !header.trim().is_empty() => header,
        _ => {
            return Err(CatalogError::InvalidHeader(
                "record store is empty".to_string(),
            ))
        }
    };
    let columns: Vec<Option<TrailField>> = header
        .trim()
        .split(FIELD_SEPARATOR)
        .map(TrailField::from_header)
        .collect();
    if !columns.contains(&Some(TrailField::Name)) {
        return Err(CatalogError::InvalidHeader(format!(
            "missing '{}' column",
            TrailField::Name.header()
        )));
    }

    for (index, line) in lines {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if values.len() != columns.len() {
            return Err(CatalogError::MalformedLine {
                line: line_number,
                expected: columns.len(),
                found: values.len(),
            });
        }

        let mut name = String::new();
        let mut draft = TrailDraft::new();
        for (column, value) in columns.iter().zip(values) {
            let value = value.trim().to_string();
            match column {
                Some(TrailField::Name) => name = value,
                Some(TrailField::Location) => draft.location = Some(value),
                Some(TrailField::Distance) => draft.distance = Some(value),
                Some(TrailField::ElevationGain) => draft.elevation_gain = Some(value),
                Some(TrailField::Difficulty) => draft.difficulty = Some(value),
                None => {}
            }
        }
        if name.is_empty() {
            return Err(CatalogError::InvalidField {
                field: TrailField::Name.header().to_string(),
                reason: format!("empty on line {line_number}"),
            });
        }

        let record = TrailRecord::new(name.clone(), draft);
        if table.insert(name, record)?.is_some() {
            debug!(line = line_number, "Duplicate trail name overwrote earlier line");
        }
    }

    Ok(table)
}

/// Rejects values that would break the line format.
fn check_storable(record: &TrailRecord) -> CatalogResult<()> {
    for field in TrailField::ALL {
        let value = record.field(field);
        if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
            return Err(CatalogError::InvalidField {
                field: field.header().to_string(),
                reason: "must not contain '|' or line breaks".to_string(),
            });
        }
    }
    Ok(())
}

/// Appends records to a record store file.
///
/// A missing or empty file is started with the header row.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TrailSink for FileSink {
    fn append(&mut self, record: &TrailRecord) -> CatalogResult<()> {
        check_storable(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        let is_new = file.metadata().map_err(|e| self.io_error(e))?.len() == 0;

        // One write per record so a line is never split across calls
        let mut chunk = String::new();
        if is_new {
            chunk.push_str(&header_line());
        }
        chunk.push('\n');
        chunk.push_str(&format_record(record));

        file.write_all(chunk.as_bytes())
            .map_err(|e| self.io_error(e))?;
        debug!(path = ?self.path, trail = %record.name, "Appended trail");
        Ok(())
    }
}
