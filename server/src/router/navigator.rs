//! Campus navigation entry point.
//!
//! [`Navigator`] answers `find_path` and `list_locations` for the map
//! frontend. It owns the routers and shares the immutable [`Campus`]
//! with them, so one navigator can serve concurrent requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::router_types::{
    location::Location,
    node::Node,
    road_router::{RoadRouter, MAX_SEARCH_DEPTH},
    route::RouteResult,
    router::engine::GraphRouter,
};
use super::RouterError;
use crate::campus::Campus;

/// Which routing model answers requests.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// Road network enumeration. Never fails for known places: without
    /// a road path in the hop bound the route is degraded, following the
    /// weighted graph if it connects the places, else a straight line.
    #[default]
    Road,

    /// Strict shortest path over the weighted graph.
    Graph,
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoutingMode::Road => write!(f, "road"),
            RoutingMode::Graph => write!(f, "graph"),
        }
    }
}

impl FromStr for RoutingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "road" => Ok(RoutingMode::Road),
            "graph" => Ok(RoutingMode::Graph),
            other => Err(format!("unknown routing mode: {other}")),
        }
    }
}

/// Answers route requests over one campus.
#[derive(Debug)]
pub struct Navigator {
    campus: Arc<Campus>,
    mode: RoutingMode,
    road_router: RoadRouter,
    graph_router: GraphRouter,
}

impl Navigator {
    /// Creates a navigator.
    ///
    /// # Errors
    /// [`RouterError::InvalidSearchDepth`] unless `1 <= max_depth <= 6`.
    pub fn new(
        campus: Arc<Campus>,
        mode: RoutingMode,
        max_depth: usize,
    ) -> Result<Navigator, RouterError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&max_depth) {
            router_error!("(Navigator::new) Invalid search depth {}.", max_depth);
            return Err(RouterError::InvalidSearchDepth(max_depth));
        }

        router_info!(
            "(Navigator::new) Routing in {} mode, max depth {}.",
            mode,
            max_depth
        );
        let graph_router = GraphRouter::new(&campus);
        let road_router = RoadRouter::new(campus.clone(), max_depth);
        Ok(Navigator {
            campus,
            mode,
            road_router,
            graph_router,
        })
    }

    /// The campus this navigator routes over.
    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// The configured routing mode.
    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    /// All places, in definition order.
    pub fn list_locations(&self) -> &[Node] {
        self.campus.list_locations()
    }

    /// Find a walking route between two named places.
    ///
    /// Asking for a route from a place to itself yields a zero-hop,
    /// zero-distance route.
    ///
    /// # Errors
    /// * [`RouterError::UnknownLocation`] for an unknown source or
    ///   destination, source checked first.
    /// * [`RouterError::NoPathFound`] in [`RoutingMode::Graph`] when the
    ///   graph does not connect the two places.
    ///
    /// In [`RoutingMode::Graph`] the distance is the sum of the graph
    /// weights and the polyline joins the places with straight segments.
    pub fn find_path(&self, source: &str, destination: &str) -> Result<RouteResult, RouterError> {
        router_info!("(find_path) {} -> {}.", source, destination);
        let from = self.resolve(source)?;
        let to = self.resolve(destination)?;

        if from == to {
            return Ok(self.zero_route(from));
        }

        match self.mode {
            RoutingMode::Graph => self.graph_route(from, to).ok_or_else(|| {
                router_warn!("(find_path) No graph path {} -> {}.", source, destination);
                RouterError::NoPathFound {
                    from: source.to_string(),
                    to: destination.to_string(),
                }
            }),
            RoutingMode::Road => Ok(self.road_route(from, to).unwrap_or_else(|| {
                router_debug!("(find_path) No road path within the hop bound, degrading.");
                self.degraded_route(from, to)
            })),
        }
    }

    /// Route from an arbitrary coordinate, e.g. the user's position, by
    /// starting at the closest campus place.
    ///
    /// # Errors
    /// [`RouterError::InvalidPosition`] for non-finite or out of range
    /// coordinates, otherwise as [`find_path`](Self::find_path).
    pub fn find_path_from(
        &self,
        position: &Location,
        destination: &str,
    ) -> Result<RouteResult, RouterError> {
        if !position.is_valid() {
            router_warn!("(find_path_from) Invalid position {:?}.", position);
            return Err(RouterError::InvalidPosition(format!("{position:?}")));
        }
        let Some(start) = self.campus.nearest_location(position) else {
            return Err(RouterError::UnknownLocation(format!("{position:?}")));
        };
        router_debug!("(find_path_from) Snapped {:?} to {}.", position, start.name);
        self.find_path(&start.name, destination)
    }

    fn resolve(&self, name: &str) -> Result<usize, RouterError> {
        self.campus.location_index(name).ok_or_else(|| {
            router_warn!("(resolve) Unknown location: {}", name);
            RouterError::UnknownLocation(name.to_string())
        })
    }

    fn names(&self, path: &[usize]) -> Vec<String> {
        path.iter()
            .filter_map(|&index| self.campus.node(index))
            .map(|node| node.name.clone())
            .collect()
    }

    fn locations(&self, path: &[usize]) -> Vec<Location> {
        path.iter()
            .filter_map(|&index| self.campus.node(index))
            .map(|node| node.location)
            .collect()
    }

    fn zero_route(&self, index: usize) -> RouteResult {
        RouteResult {
            location_sequence: self.names(&[index]),
            total_distance_meters: 0,
            polyline: self.locations(&[index]),
            degraded: false,
        }
    }

    fn road_route(&self, from: usize, to: usize) -> Option<RouteResult> {
        let best = self.road_router.best_path(from, to)?;
        Some(RouteResult {
            location_sequence: self.names(&best.nodes),
            total_distance_meters: round_meters(best.distance_meters),
            polyline: self.road_router.build_polyline(&best.nodes),
            degraded: false,
        })
    }

    fn graph_route(&self, from: usize, to: usize) -> Option<RouteResult> {
        let (cost, path) = self.graph_router.find_shortest_path(from, to)?;
        Some(RouteResult {
            location_sequence: self.names(&path),
            total_distance_meters: round_meters(cost),
            polyline: self.locations(&path),
            degraded: false,
        })
    }

    /// No road path within the hop bound. The weighted graph still gives
    /// a sequence of places when it connects the pair; each hop is then
    /// scored and drawn along a shared road if there is one, otherwise
    /// as a straight segment. Without a graph path the route is the
    /// straight line from source to destination.
    fn degraded_route(&self, from: usize, to: usize) -> RouteResult {
        let path = match self.graph_router.find_shortest_path(from, to) {
            Some((_, path)) => path,
            None => {
                router_warn!(
                    "(degraded_route) {} -> {} is not connected, using a straight line.",
                    from,
                    to
                );
                vec![from, to]
            }
        };

        RouteResult {
            location_sequence: self.names(&path),
            total_distance_meters: round_meters(self.road_router.path_distance(&path)),
            polyline: self.road_router.build_polyline(&path),
            degraded: true,
        }
    }
}

fn round_meters(meters: f64) -> u64 {
    meters.round() as u64
}
