//! Sorting and filtering of trail records.
//!
//! Sorting builds a fresh [`BinarySearchTree`] over each record's projection
//! of the chosen field: distance and elevation gain compare as numbers, the
//! other fields as text. `"Unknown"` values sort after every known value.

use serde::{Deserialize, Serialize};

use crate::catalog::record::{TrailField, TrailRecord, UNKNOWN};
use crate::data_structures::search_tree::BinarySearchTree;
use crate::error::{CatalogError, CatalogResult};

/// Direction of a sorted listing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// Comparable projection of a field value.
///
/// Variant order matters: numbers sort before text, and unknown values sort
/// after both.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortKey {
    /// Finite numeric value
    Number(f64),
    /// Text compared byte-wise
    Text(String),
    /// The `"Unknown"` sentinel
    Unknown,
}

/// Parses a distance in miles.
///
/// # Errors
///
/// [`CatalogError::Parse`] unless `text` is a finite decimal number.
pub fn parse_distance(text: &str) -> CatalogResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| parse_error(TrailField::Distance, text, "a decimal number of miles"))
}

/// Parses an elevation gain in feet.
///
/// # Errors
///
/// [`CatalogError::Parse`] unless `text` is a whole number.
pub fn parse_elevation(text: &str) -> CatalogResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| parse_error(TrailField::ElevationGain, text, "a whole number of feet"))
}

fn parse_error(field: TrailField, value: &str, expected: &'static str) -> CatalogError {
    CatalogError::Parse {
        field: field.header().to_string(),
        value: value.to_string(),
        expected,
    }
}

/// Projects one field of a record onto its sort key.
///
/// # Errors
///
/// [`CatalogError::Parse`] if a numeric field holds text other than
/// `"Unknown"`.
pub fn sort_key(record: &TrailRecord, field: TrailField) -> CatalogResult<SortKey> {
    let raw = record.field(field);
    // Names are never defaulted, so "Unknown" is an ordinary name
    if raw == UNKNOWN && field != TrailField::Name {
        return Ok(SortKey::Unknown);
    }
    match field {
        TrailField::Distance => parse_distance(raw).map(SortKey::Number),
        // Elevation sorts as a number; decimals are tolerated here even
        // though filters require whole feet
        TrailField::ElevationGain => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(SortKey::Number)
            .ok_or_else(|| parse_error(field, raw, "a number of feet")),
        TrailField::Name | TrailField::Location | TrailField::Difficulty => {
            Ok(SortKey::Text(raw.to_string()))
        }
    }
}

/// Sorts records by one field.
///
/// Records with equal keys keep their input order when ascending and come
/// out reversed when descending.
///
/// # Errors
///
/// [`CatalogError::Parse`] if any record holds a malformed numeric value.
pub fn sort_records<'a, I>(
    records: I,
    field: TrailField,
    order: SortOrder,
) -> CatalogResult<Vec<&'a TrailRecord>>
where
    I: IntoIterator<Item = &'a TrailRecord>,
{
    let mut tree = BinarySearchTree::new();
    for record in records {
        tree.insert(sort_key(record, field)?, record);
    }

    let sorted: Vec<&'a TrailRecord> = match order {
        SortOrder::Ascending => tree.ascending().map(|(_, record)| *record).collect(),
        SortOrder::Descending => tree.descending().map(|(_, record)| *record).collect(),
    };
    Ok(sorted)
}

/// Search criteria; every criterion that is set must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailFilter {
    /// Case-insensitive substring of the trail name
    pub name: Option<String>,
    /// Exact distance in miles
    pub distance: Option<f64>,
    /// Exact elevation gain in feet
    pub elevation_gain: Option<i64>,
    /// Exact difficulty text
    pub difficulty: Option<String>,
}

impl TrailFilter {
    /// Creates a filter that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the name to contain `needle`, ignoring case.
    ///
    /// A blank needle leaves the criterion unset.
    pub fn with_name(mut self, needle: &str) -> Self {
        let needle = needle.trim();
        self.name = (!needle.is_empty()).then(|| needle.to_lowercase());
        self
    }

    /// Requires an exact distance, parsed from user text.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if `text` is not blank and not a number.
    pub fn with_distance(mut self, text: &str) -> CatalogResult<Self> {
        self.distance = if text.trim().is_empty() {
            None
        } else {
            Some(parse_distance(text)?)
        };
        Ok(self)
    }

    /// Requires an exact elevation gain, parsed from user text.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if `text` is not blank and not a whole number.
    pub fn with_elevation_gain(mut self, text: &str) -> CatalogResult<Self> {
        self.elevation_gain = if text.trim().is_empty() {
            None
        } else {
            Some(parse_elevation(text)?)
        };
        Ok(self)
    }

    /// Requires an exact difficulty.
    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        let difficulty = difficulty.trim();
        self.difficulty = (!difficulty.is_empty()).then(|| difficulty.to_string());
        self
    }

    /// Returns whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Checks one record against every set criterion.
    ///
    /// A record whose numeric field is `"Unknown"` does not match a numeric
    /// criterion.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] if a numeric criterion is set and the record's
    /// field holds malformed text.
    pub fn matches(&self, record: &TrailRecord) -> CatalogResult<bool> {
        if let Some(needle) = &self.name {
            if !record.name.to_lowercase().contains(needle.as_str()) {
                return Ok(false);
            }
        }
        if let Some(distance) = self.distance {
            let raw = &record.attributes.distance;
            if raw == UNKNOWN || parse_distance(raw)? != distance {
                return Ok(false);
            }
        }
        if let Some(elevation) = self.elevation_gain {
            let raw = &record.attributes.elevation_gain;
            if raw == UNKNOWN || parse_elevation(raw)? != elevation {
                return Ok(false);
            }
        }
        if let Some(difficulty) = &self.difficulty {
            if record.attributes.difficulty != *difficulty {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Keeps the records that match, in input order.
    ///
    /// # Errors
    ///
    /// The first [`CatalogError::Parse`] raised by [`TrailFilter::matches`].
    pub fn apply<'a, I>(&self, records: I) -> CatalogResult<Vec<&'a TrailRecord>>
    where
        I: IntoIterator<Item = &'a TrailRecord>,
    {
        let mut matching = Vec::new();
        for record in records {
            if self.matches(record)? {
                matching.push(record);
            }
        }
        Ok(matching)
    }
}
