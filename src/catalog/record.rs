//! Trail record model.
//!
//! A trail is identified by its case-sensitive name and always carries all
//! four attributes. Attributes that were not supplied hold the [`UNKNOWN`]
//! sentinel.

use serde::{Deserialize, Serialize};

/// Sentinel stored for any attribute that was not supplied.
pub const UNKNOWN: &str = "Unknown";

/// The fields of a trail record, in on-disk column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TrailField {
    /// Unique trail name
    Name,
    /// Where the trail is
    Location,
    /// Length in miles, decimal
    Distance,
    /// Elevation gain in feet, integer
    #[value(alias = "elevation")]
    ElevationGain,
    /// Difficulty rating 1-3
    Difficulty,
}

impl TrailField {
    /// All fields in column order.
    pub const ALL: [TrailField; 5] = [
        TrailField::Name,
        TrailField::Location,
        TrailField::Distance,
        TrailField::ElevationGain,
        TrailField::Difficulty,
    ];

    /// Column header used in the record store.
    pub fn header(self) -> &'static str {
        match self {
            TrailField::Name => "Trail Name",
            TrailField::Location => "Location",
            TrailField::Distance => "Distance (miles)",
            TrailField::ElevationGain => "Elevation Gain (feet)",
            TrailField::Difficulty => "Difficulty (1-3)",
        }
    }

    /// Looks a field up by its column header.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.header() == header.trim())
    }

    /// Whether the field sorts and filters numerically.
    pub fn is_numeric(self) -> bool {
        matches!(self, TrailField::Distance | TrailField::ElevationGain)
    }
}

/// The four descriptive attributes of a trail, all present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailAttributes {
    /// Where the trail is
    pub location: String,
    /// Length in miles, kept as text
    pub distance: String,
    /// Elevation gain in feet, kept as text
    pub elevation_gain: String,
    /// Difficulty 1-3, kept as text
    pub difficulty: String,
}

impl Default for TrailAttributes {
    fn default() -> Self {
        Self {
            location: UNKNOWN.to_string(),
            distance: UNKNOWN.to_string(),
            elevation_gain: UNKNOWN.to_string(),
            difficulty: UNKNOWN.to_string(),
        }
    }
}

/// Attributes as submitted, any of which may be missing.
///
/// Resolving a draft fills every missing or blank field with [`UNKNOWN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailDraft {
    /// Where the trail is
    pub location: Option<String>,
    /// Length in miles
    pub distance: Option<String>,
    /// Elevation gain in feet
    pub elevation_gain: Option<String>,
    /// Difficulty 1-3
    pub difficulty: Option<String>,
}

impl TrailDraft {
    /// Creates a draft with every field missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the distance in miles.
    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    /// Sets the elevation gain in feet.
    pub fn with_elevation_gain(mut self, elevation_gain: impl Into<String>) -> Self {
        self.elevation_gain = Some(elevation_gain.into());
        self
    }

    /// Sets the difficulty rating.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Resolves the draft into a complete attribute set.
    pub fn into_attributes(self) -> TrailAttributes {
        fn resolve(value: Option<String>) -> String {
            match value {
                Some(value) if !value.trim().is_empty() => value.trim().to_string(),
                _ => UNKNOWN.to_string(),
            }
        }

        TrailAttributes {
            location: resolve(self.location),
            distance: resolve(self.distance),
            elevation_gain: resolve(self.elevation_gain),
            difficulty: resolve(self.difficulty),
        }
    }
}

impl From<TrailAttributes> for TrailDraft {
    fn from(attributes: TrailAttributes) -> Self {
        Self {
            location: Some(attributes.location),
            distance: Some(attributes.distance),
            elevation_gain: Some(attributes.elevation_gain),
            difficulty: Some(attributes.difficulty),
        }
    }
}

/// A named trail with its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailRecord {
    /// Unique, case-sensitive name
    pub name: String,
    /// Descriptive attributes
    #[serde(flatten)]
    pub attributes: TrailAttributes,
}

impl TrailRecord {
    /// Creates a record from a name and a draft, defaulting missing fields.
    pub fn new(name: impl Into<String>, draft: TrailDraft) -> Self {
        Self {
            name: name.into(),
            attributes: draft.into_attributes(),
        }
    }

    /// Returns the raw text of a field.
    pub fn field(&self, field: TrailField) -> &str {
        match field {
            TrailField::Name => &self.name,
            TrailField::Location => &self.attributes.location,
            TrailField::Distance => &self.attributes.distance,
            TrailField::ElevationGain => &self.attributes.elevation_gain,
            TrailField::Difficulty => &self.attributes.difficulty,
        }
    }

    /// Returns all fields in column order.
    pub fn columns(&self) -> [&str; 5] {
        TrailField::ALL.map(|field| self.field(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_unknown() {
        let record = TrailRecord::new("River Walk", TrailDraft::new().with_distance("1.2"));

        assert_eq!(record.attributes.distance, "1.2");
        assert_eq!(record.attributes.location, UNKNOWN);
        assert_eq!(record.attributes.elevation_gain, UNKNOWN);
        assert_eq!(record.attributes.difficulty, UNKNOWN);
    }

    #[test]
    fn test_blank_fields_default_to_unknown() {
        let attributes = TrailDraft::new()
            .with_location("   ")
            .with_difficulty(" 2 ")
            .into_attributes();

        assert_eq!(attributes.location, UNKNOWN);
        assert_eq!(attributes.difficulty, "2");
    }

    #[test]
    fn test_headers_round_trip() {
        for field in TrailField::ALL {
            assert_eq!(TrailField::from_header(field.header()), Some(field));
        }
        assert_eq!(TrailField::from_header("Length"), None);
    }

    #[test]
    fn test_columns_follow_header_order() {
        let record = TrailRecord::new(
            "Ridge Loop",
            TrailDraft::new()
                .with_location("Park")
                .with_distance("3.5")
                .with_elevation_gain("500")
                .with_difficulty("2"),
        );

        assert_eq!(record.columns(), ["Ridge Loop", "Park", "3.5", "500", "2"]);
        assert_eq!(record.field(TrailField::ElevationGain), "500");
    }
}
