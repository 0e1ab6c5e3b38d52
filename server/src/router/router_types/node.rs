//! Struct definitions and implementations for objects that represent
//! vertices in a graph.
//!
//! The only vertex is [`Node`]: a named campus place such as a lecture
//! block, a hostel or the main gate.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::location::Location;

/// Normalize a place name into its canonical lookup key.
///
/// Names are trimmed and upper-cased so that "Central Library" and
/// "CENTRAL LIBRARY" refer to the same place.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Descriptive tag of a campus place. Not used by path finding.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Hostel,
    Facility,
    Administrative,
    Sports,
    Commercial,
    Religious,
    Entrance,
    External,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Academic,
        Category::Hostel,
        Category::Facility,
        Category::Administrative,
        Category::Sports,
        Category::Commercial,
        Category::Religious,
        Category::Entrance,
        Category::External,
    ];

    /// The lower-case tag used in campus data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Hostel => "hostel",
            Category::Facility => "facility",
            Category::Administrative => "administrative",
            Category::Sports => "sports",
            Category::Commercial => "commercial",
            Category::Religious => "religious",
            Category::Entrance => "entrance",
            Category::External => "external",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// Represent a named point of interest on campus.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Display name, exactly as defined in the campus data.
    pub name: String,

    /// Canonical form of `name`, see [`canonical_name`]. Every lookup
    /// goes through this key.
    #[serde(skip)]
    pub key: String,

    /// Denote the geographical position of the node.
    ///
    /// See also [`Location`].
    pub location: Location,

    /// See also [`Category`].
    pub category: Category,

    /// Free text shown next to the place on the map.
    #[serde(default)]
    pub description: String,
}

impl Node {
    /// Creates a node, deriving its canonical key from `name`.
    pub fn new(name: &str, location: Location, category: Category, description: &str) -> Self {
        Node {
            name: name.to_string(),
            key: canonical_name(name),
            location,
            category,
            description: description.to_string(),
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
