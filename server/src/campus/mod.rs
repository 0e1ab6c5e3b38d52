//! Campus data accessor.
//!
//! A [`Campus`] is built once at startup from a [`CampusDefinition`],
//! validated, and shared read-only with the routers afterwards.

#[macro_use]
mod macros;
pub mod definition;

use lazy_static::lazy_static;
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::router::router_types::{
    edge::Edge,
    location::Location,
    node::{canonical_name, Category, Node},
    road::Road,
};
use crate::router::router_utils::{graph::build_edges, haversine};
pub use definition::{
    CampusDefinition, EdgeDefinition, LocationDefinition, RoadConnectionDefinition,
    EMBEDDED_CAMPUS_JSON,
};

/// Campus data that must stop the service from starting.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Duplicate location name: {0}")]
    DuplicateLocation(String),
    #[error("Duplicate road name: {0}")]
    DuplicateRoad(String),
    #[error("{context} references unknown location: {name}")]
    UnknownLocationReference { context: String, name: String },
    #[error("Location {location} references unknown road: {road}")]
    UnknownRoad { location: String, road: String },
    #[error("Location {0} has a road connection entry without roads")]
    EmptyRoadSet(String),
    #[error("Road {0} needs at least two points")]
    EmptyPolyline(String),
    #[error("Invalid coordinates for {0}")]
    InvalidCoordinates(String),
    #[error("Invalid weight {weight} between {from} and {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("Edge from {0} to itself")]
    SelfLoop(String),
    #[error("Conflicting weights between {from} and {to}: {first} vs {second}")]
    ConflictingWeight {
        from: String,
        to: String,
        first: f64,
        second: f64,
    },
    #[error("Embedded campus data is invalid")]
    EmbeddedDataInvalid,
    #[error("File IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

lazy_static! {
    static ref EMBEDDED_CAMPUS: Option<Arc<Campus>> = match Campus::from_json_str(EMBEDDED_CAMPUS_JSON) {
        Ok(campus) => Some(Arc::new(campus)),
        Err(e) => {
            campus_error!("(embedded) Could not load embedded campus data: {}", e);
            None
        }
    };
}

/// Validated, immutable campus data.
#[derive(Debug)]
pub struct Campus {
    nodes: Vec<Node>,
    node_indices: HashMap<String, usize>,
    roads: Vec<Road>,
    road_indices: HashMap<String, usize>,
    /// Road indices per node index, in definition order.
    roads_at: Vec<Vec<usize>>,
    /// Node indices in road-connection index order.
    connected: Vec<usize>,
    edges: Vec<Edge>,
}

impl Campus {
    /// The campus bundled with the binary, parsed once per process.
    pub fn embedded() -> Result<Arc<Campus>, CampusError> {
        EMBEDDED_CAMPUS
            .clone()
            .ok_or(CampusError::EmbeddedDataInvalid)
    }

    /// Parse and validate a campus from JSON text.
    pub fn from_json_str(json: &str) -> Result<Campus, CampusError> {
        let definition = CampusDefinition::from_json_str(json)?;
        Campus::from_definition(definition)
    }

    /// Read, parse and validate a campus JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Campus, CampusError> {
        let path = path.as_ref();
        campus_info!("(from_file) Loading campus data from {}.", path.display());
        let json = std::fs::read_to_string(path)?;
        Campus::from_json_str(&json)
    }

    /// Validate a definition and build the lookup tables.
    pub fn from_definition(definition: CampusDefinition) -> Result<Campus, CampusError> {
        campus_debug!(
            "(from_definition) {} locations, {} roads, {} connections, {} graph entries.",
            definition.locations.len(),
            definition.roads.len(),
            definition.road_connections.len(),
            definition.graph.len()
        );

        let mut nodes = Vec::with_capacity(definition.locations.len());
        let mut node_indices = HashMap::new();
        for location in definition.locations {
            let node = Node::new(
                &location.name,
                Location::new(location.latitude, location.longitude),
                location.category,
                &location.description,
            );
            if !node.location.is_valid() {
                return Err(CampusError::InvalidCoordinates(node.name));
            }
            if node_indices.contains_key(&node.key) {
                campus_error!("(from_definition) Duplicate location: {}", node.name);
                return Err(CampusError::DuplicateLocation(node.name));
            }
            node_indices.insert(node.key.clone(), nodes.len());
            nodes.push(node);
        }

        let mut road_indices = HashMap::new();
        for (index, road) in definition.roads.iter().enumerate() {
            if road.points.len() < 2 {
                return Err(CampusError::EmptyPolyline(road.name.clone()));
            }
            if road.points.iter().any(|point| !point.is_valid()) {
                return Err(CampusError::InvalidCoordinates(road.name.clone()));
            }
            if road_indices.insert(road.name.clone(), index).is_some() {
                return Err(CampusError::DuplicateRoad(road.name.clone()));
            }
        }
        let roads = definition.roads;

        let mut roads_at = vec![Vec::new(); nodes.len()];
        let mut connected = Vec::new();
        for connection in definition.road_connections {
            let Some(&node_index) = node_indices.get(&canonical_name(&connection.location)) else {
                return Err(CampusError::UnknownLocationReference {
                    context: "road connection".to_string(),
                    name: connection.location,
                });
            };
            if connection.roads.is_empty() {
                return Err(CampusError::EmptyRoadSet(connection.location));
            }

            // a place listed twice keeps its first position and merges roads
            if roads_at[node_index].is_empty() {
                connected.push(node_index);
            }
            for road in connection.roads {
                let Some(&road_index) = road_indices.get(&road) else {
                    return Err(CampusError::UnknownRoad {
                        location: connection.location,
                        road,
                    });
                };
                if !roads_at[node_index].contains(&road_index) {
                    roads_at[node_index].push(road_index);
                }
            }
        }

        let edges = build_edges(&definition.graph, |name| {
            node_indices.get(&canonical_name(name)).copied()
        })?;

        campus_info!(
            "(from_definition) Campus ready: {} locations, {} roads, {} edges.",
            nodes.len(),
            roads.len(),
            edges.len()
        );

        Ok(Campus {
            nodes,
            node_indices,
            roads,
            road_indices,
            roads_at,
            connected,
            edges,
        })
    }

    //------------------------------------------------------------------
    // Lookups by name
    //------------------------------------------------------------------

    /// Find a place by name. Case and surrounding whitespace are ignored.
    pub fn get_location(&self, name: &str) -> Option<&Node> {
        self.location_index(name).map(|index| &self.nodes[index])
    }

    /// Index of a place in [`list_locations`](Self::list_locations).
    pub fn location_index(&self, name: &str) -> Option<usize> {
        self.node_indices.get(&canonical_name(name)).copied()
    }

    /// All places, in definition order.
    pub fn list_locations(&self) -> &[Node] {
        &self.nodes
    }

    /// Neighbors of a place in the simple weighted graph, as
    /// `(neighbor name, weight in meters)`.
    pub fn neighbors(&self, name: &str) -> Option<Vec<(&str, f64)>> {
        let index = self.location_index(name)?;
        Some(
            self.edges
                .iter()
                .filter_map(|edge| edge.other(index).map(|other| (other, edge.cost)))
                .map(|(other, cost)| (self.nodes[other].name.as_str(), cost.into_inner()))
                .collect(),
        )
    }

    /// Names of the roads touching a place, in definition order.
    pub fn roads_at(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.location_index(name)?;
        Some(
            self.roads_at[index]
                .iter()
                .map(|&road| self.roads[road].name.as_str())
                .collect(),
        )
    }

    /// Road by exact name.
    pub fn road(&self, name: &str) -> Option<&Road> {
        self.road_indices.get(name).map(|&index| &self.roads[index])
    }

    /// Points of a road by exact name.
    pub fn road_polyline(&self, name: &str) -> Option<&[Location]> {
        self.road(name).map(|road| road.points.as_slice())
    }

    /// All roads, in definition order.
    pub fn list_roads(&self) -> &[Road] {
        &self.roads
    }

    //------------------------------------------------------------------
    // Lookups by index, used by the routers
    //------------------------------------------------------------------

    /// Place at `index`.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Road indices touching the place at `index`.
    pub fn road_indices_at(&self, index: usize) -> &[usize] {
        self.roads_at.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Roads shared by two places, in the order they are listed for `a`.
    pub fn common_roads(&self, a: usize, b: usize) -> Vec<&Road> {
        let roads_b = self.road_indices_at(b);
        self.road_indices_at(a)
            .iter()
            .filter(|road| roads_b.contains(road))
            .filter_map(|&road| self.roads.get(road))
            .collect()
    }

    /// Places present in the road-connection index, in index order.
    pub fn connected_locations(&self) -> &[usize] {
        &self.connected
    }

    /// Edges of the simple weighted graph, each listed once.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    //------------------------------------------------------------------
    // Browsing
    //------------------------------------------------------------------

    /// Places of one category, in definition order.
    pub fn locations_by_category(&self, category: Category) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, category and
    /// description. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Node> {
        let query = query.trim().to_lowercase();
        self.nodes
            .iter()
            .filter(|node| {
                query.is_empty()
                    || node.name.to_lowercase().contains(&query)
                    || node.category.as_str().contains(&query)
                    || node.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The place closest to an arbitrary coordinate. The first place
    /// wins on equal distance. Invalid coordinates match nothing.
    pub fn nearest_location(&self, location: &Location) -> Option<&Node> {
        if !location.is_valid() {
            return None;
        }
        self.nodes
            .iter()
            .min_by_key(|node| OrderedFloat(haversine::distance(location, &node.location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, latitude: f64, longitude: f64) -> LocationDefinition {
        LocationDefinition {
            name: name.to_string(),
            latitude,
            longitude,
            category: Category::Academic,
            description: String::new(),
        }
    }

    fn small_definition() -> CampusDefinition {
        CampusDefinition {
            locations: vec![
                location("Gate", 14.3340, 78.5385),
                location("Library", 14.3357, 78.5384),
                location("Lab", 14.3362, 78.5381),
            ],
            roads: vec![Road {
                name: "gate_road".to_string(),
                points: vec![
                    Location::new(14.3340, 78.5385),
                    Location::new(14.3357, 78.5384),
                ],
            }],
            road_connections: vec![
                RoadConnectionDefinition {
                    location: "Gate".to_string(),
                    roads: vec!["gate_road".to_string()],
                },
                RoadConnectionDefinition {
                    location: "Library".to_string(),
                    roads: vec!["gate_road".to_string()],
                },
            ],
            graph: vec![EdgeDefinition {
                from: "Gate".to_string(),
                to: "Lab".to_string(),
                weight_meters: 250.0,
            }],
        }
    }

    #[test]
    fn test_embedded_campus_loads() {
        let campus = Campus::embedded().unwrap();
        assert_eq!(campus.list_locations().len(), 35);
        assert_eq!(campus.list_roads().len(), 30);
        assert_eq!(campus.connected_locations().len(), 33);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let campus = Campus::embedded().unwrap();
        let library = campus.get_location("Central Library").unwrap();
        assert_eq!(library.name, "CENTRAL LIBRARY");
        assert!(campus.get_location("  central library ").is_some());
        assert!(campus.get_location("Unknown Place").is_none());
    }

    #[test]
    fn test_neighbors() {
        let campus = Campus::embedded().unwrap();
        let neighbors = campus.neighbors("Main Gate - Entry").unwrap();
        assert!(neighbors.contains(&("ACADEMIC BLOCK 1", 120.0)));
        assert!(neighbors.contains(&("CENTRAL LIBRARY", 180.0)));
        assert_eq!(neighbors.len(), 5);
        assert!(campus.neighbors("Unknown Place").is_none());
    }

    #[test]
    fn test_one_way_entry_becomes_undirected() {
        let campus = Campus::embedded().unwrap();
        let post_office = campus.neighbors("POST OFFICE").unwrap();
        assert!(post_office.contains(&("RGUKT RKV Supermarket", 50.0)));
    }

    #[test]
    fn test_roads_at_and_polyline() {
        let campus = Campus::embedded().unwrap();
        assert_eq!(
            campus.roads_at("CENTRAL LIBRARY").unwrap(),
            vec!["academic_road_1", "academic_road_2", "tech_road_1"]
        );
        assert_eq!(campus.road_polyline("tech_road_2").unwrap().len(), 3);
        assert!(campus.road_polyline("no_such_road").is_none());
        assert_eq!(campus.roads_at("IQAC").unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_common_roads() {
        let campus = Campus::embedded().unwrap();
        let block_1 = campus.location_index("ACADEMIC BLOCK 1").unwrap();
        let library = campus.location_index("CENTRAL LIBRARY").unwrap();
        let gate = campus.location_index("Main Gate - Entry").unwrap();

        let common: Vec<&str> = campus
            .common_roads(block_1, library)
            .iter()
            .map(|road| road.name.as_str())
            .collect();
        assert_eq!(common, vec!["academic_road_1"]);
        assert!(campus.common_roads(gate, library).is_empty());
    }

    #[test]
    fn test_search_and_category() {
        let campus = Campus::embedded().unwrap();
        let hostels = campus.locations_by_category(Category::Hostel);
        assert_eq!(hostels.len(), 6);

        let mess = campus.search("mess");
        assert_eq!(mess.len(), 2);
        let religious = campus.search("RELIGIOUS");
        assert_eq!(religious[0].name, "MALLELAMA TEMPLE");
        assert_eq!(campus.search("").len(), 35);
    }

    #[test]
    fn test_nearest_location() {
        let campus = Campus::embedded().unwrap();
        let near_gate = Location::new(14.33401, 78.53851);
        assert_eq!(
            campus.nearest_location(&near_gate).unwrap().name,
            "Main Gate - Entry"
        );
        assert!(campus
            .nearest_location(&Location::new(f64::NAN, 78.53851))
            .is_none());
        assert!(campus
            .nearest_location(&Location::new(14.33401, f64::INFINITY))
            .is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut definition = small_definition();
        definition.locations.push(location("LIBRARY", 14.0, 78.0));
        let result = Campus::from_definition(definition);
        assert!(matches!(result, Err(CampusError::DuplicateLocation(name)) if name == "LIBRARY"));
    }

    #[test]
    fn test_unknown_references_rejected() {
        let mut definition = small_definition();
        definition.road_connections[0].roads.push("ghost_road".to_string());
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::UnknownRoad { .. })
        ));

        let mut definition = small_definition();
        definition.road_connections[0].location = "Nowhere".to_string();
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::UnknownLocationReference { .. })
        ));

        let mut definition = small_definition();
        definition.graph[0].to = "Nowhere".to_string();
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::UnknownLocationReference { .. })
        ));
    }

    #[test]
    fn test_short_polyline_rejected() {
        let mut definition = small_definition();
        definition.roads[0].points.truncate(1);
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::EmptyPolyline(name)) if name == "gate_road"
        ));
    }

    #[test]
    fn test_empty_road_set_rejected() {
        let mut definition = small_definition();
        definition.road_connections[1].roads.clear();
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::EmptyRoadSet(_))
        ));
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let mut definition = small_definition();
        definition.locations[2].latitude = f64::NAN;
        assert!(matches!(
            Campus::from_definition(definition),
            Err(CampusError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Campus::from_file("/definitely/not/here/campus.json");
        assert!(matches!(result, Err(CampusError::Io(_))));
    }

    #[test]
    fn test_from_json_str_bad_json() {
        assert!(matches!(
            Campus::from_json_str("{ not json"),
            Err(CampusError::Json(_))
        ));
    }
}
