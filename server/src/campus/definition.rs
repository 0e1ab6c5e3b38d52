//! Raw, unvalidated campus data as it appears in JSON files.
//!
//! Every list keeps its file order; that order drives deterministic
//! iteration in the routers.

use serde::{Deserialize, Serialize};

use crate::router::router_types::{node::Category, road::Road};

/// Campus data bundled with the binary.
pub const EMBEDDED_CAMPUS_JSON: &str = include_str!("../../data/campus.json");

/// The whole campus: places, roads, which roads touch which places and
/// the simple weighted graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusDefinition {
    pub locations: Vec<LocationDefinition>,

    #[serde(default)]
    pub roads: Vec<Road>,

    #[serde(default)]
    pub road_connections: Vec<RoadConnectionDefinition>,

    #[serde(default)]
    pub graph: Vec<EdgeDefinition>,
}

/// A named place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDefinition {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Category,
    #[serde(default)]
    pub description: String,
}

/// Roads passing through or ending at a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadConnectionDefinition {
    pub location: String,
    pub roads: Vec<String>,
}

/// One entry of the simple weighted graph. Direction is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub weight_meters: f64,
}

impl CampusDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_definition_parses() {
        let definition = CampusDefinition::from_json_str(EMBEDDED_CAMPUS_JSON).unwrap();
        assert_eq!(definition.locations.len(), 35);
        assert_eq!(definition.roads.len(), 30);
        assert_eq!(definition.road_connections.len(), 33);
        assert!(!definition.graph.is_empty());

        assert_eq!(definition.locations[0].name, "Main Gate - Entry");
        assert_eq!(definition.locations[0].category, Category::Entrance);
        assert_eq!(definition.roads[0].name, "main_road_1");
        assert_eq!(definition.roads[0].points.len(), 5);
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let json = r#"{"locations": [
            {"name": "Gate", "latitude": 14.0, "longitude": 78.0, "category": "entrance"}
        ]}"#;
        let definition = CampusDefinition::from_json_str(json).unwrap();
        assert_eq!(definition.locations.len(), 1);
        assert_eq!(definition.locations[0].description, "");
        assert!(definition.roads.is_empty());
        assert!(definition.road_connections.is_empty());
        assert!(definition.graph.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{"locations": [
            {"name": "Cafe", "latitude": 14.0, "longitude": 78.0, "category": "food"}
        ]}"#;
        assert!(CampusDefinition::from_json_str(json).is_err());
    }
}
