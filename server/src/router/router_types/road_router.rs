//! The road-network router.
//!
//! Places are adjacent when they share at least one road. Every simple
//! path between source and destination up to a hop bound is enumerated,
//! scored by walking distance along the shared roads, and the shortest
//! one wins. The first path found wins on equal distance.
//!
//! Hop scoring is an approximation: for a shared road the hop costs the
//! full road length plus the distance from each place to the nearest
//! road end, even when both places sit somewhere along the road.

use std::sync::Arc;

use crate::campus::Campus;
use crate::router::router_types::{location::Location, road::Road};
use crate::router::router_utils::{graph::build_road_adjacency, haversine, polyline};

/// Hop bound used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Largest accepted hop bound. Enumeration cost grows with
/// branching factor to the power of the depth.
pub const MAX_SEARCH_DEPTH: usize = 6;

/// A fully scored source to destination path.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePath {
    /// Campus indices, source and destination included.
    pub nodes: Vec<usize>,

    /// Sum of the hop distances in meters.
    pub distance_meters: f64,
}

/// Bounded-depth path enumeration over the road network.
#[derive(Debug)]
pub struct RoadRouter {
    campus: Arc<Campus>,
    adjacency: Vec<Vec<usize>>,
    max_depth: usize,
}

impl RoadRouter {
    /// Creates a router over `campus`. `max_depth` is the largest
    /// number of hops a returned path may have.
    pub fn new(campus: Arc<Campus>, max_depth: usize) -> RoadRouter {
        let adjacency = build_road_adjacency(&campus);
        router_debug!(
            "(RoadRouter::new) {} road-connected places, max depth {}.",
            campus.connected_locations().len(),
            max_depth
        );
        RoadRouter {
            campus,
            adjacency,
            max_depth,
        }
    }

    /// Every simple path from `from` to `to` with at most `max_depth`
    /// hops, in depth-first discovery order.
    ///
    /// The traversal keeps an explicit stack of neighbor cursors, one per
    /// place on the current path. A place is marked visited while it is
    /// on the path and released again on backtrack.
    pub fn enumerate_paths(&self, from: usize, to: usize) -> Vec<Vec<usize>> {
        let node_count = self.adjacency.len();
        if from >= node_count || to >= node_count {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut visited = vec![false; node_count];
        let mut path = vec![from];
        let mut cursors = vec![0_usize];
        visited[from] = true;

        while let Some(&cursor) = cursors.last() {
            let Some(&current) = path.last() else {
                break;
            };
            let neighbors = &self.adjacency[current];
            let reached = current == to;

            if reached || path.len() > self.max_depth || cursor >= neighbors.len() {
                if reached {
                    paths.push(path.clone());
                }
                cursors.pop();
                path.pop();
                visited[current] = false;
                continue;
            }

            if let Some(top) = cursors.last_mut() {
                *top += 1;
            }
            let next = neighbors[cursor];
            if !visited[next] {
                visited[next] = true;
                path.push(next);
                cursors.push(0);
            }
        }

        router_debug!(
            "(enumerate_paths) {} -> {}: {} candidate paths.",
            from,
            to,
            paths.len()
        );
        paths
    }

    /// The shared road giving the shortest walk between two places, and
    /// that walk's length. The first road wins on equal length.
    pub fn best_common_road(&self, a: usize, b: usize) -> Option<(&Road, f64)> {
        let (Some(node_a), Some(node_b)) = (self.campus.node(a), self.campus.node(b)) else {
            return None;
        };

        let mut best: Option<(&Road, f64)> = None;
        for road in self.campus.common_roads(a, b) {
            let (Some(to_a), Some(to_b)) = (
                road.nearest_end_distance(&node_a.location),
                road.nearest_end_distance(&node_b.location),
            ) else {
                continue;
            };
            let distance = road.length_meters() + to_a + to_b;
            if best.map_or(true, |(_, current)| distance < current) {
                best = Some((road, distance));
            }
        }
        best
    }

    /// Walking distance of one hop. Places without a shared road fall
    /// back to the straight-line distance.
    pub fn hop_distance(&self, a: usize, b: usize) -> f64 {
        if let Some((_, distance)) = self.best_common_road(a, b) {
            return distance;
        }
        match (self.campus.node(a), self.campus.node(b)) {
            (Some(node_a), Some(node_b)) => haversine::distance(&node_a.location, &node_b.location),
            _ => f64::NAN,
        }
    }

    /// Sum of the hop distances along `path`.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|pair| self.hop_distance(pair[0], pair[1]))
            .sum()
    }

    /// The shortest enumerated path, or [`None`] when enumeration finds
    /// no candidate within the hop bound.
    pub fn best_path(&self, from: usize, to: usize) -> Option<CandidatePath> {
        let mut best: Option<CandidatePath> = None;
        for nodes in self.enumerate_paths(from, to) {
            let distance_meters = self.path_distance(&nodes);
            if best
                .as_ref()
                .map_or(true, |current| distance_meters < current.distance_meters)
            {
                best = Some(CandidatePath {
                    nodes,
                    distance_meters,
                });
            }
        }

        if let Some(best) = &best {
            router_debug!(
                "(best_path) {} -> {}: {:?} at {:.1} m.",
                from,
                to,
                best.nodes,
                best.distance_meters
            );
        }
        best
    }

    /// Full-resolution geometry of `path`.
    ///
    /// Each hop contributes the walk from the first place onto the road
    /// chosen by [`best_common_road`](Self::best_common_road), along the
    /// road, and off to the second place; hops without a shared road are
    /// a straight segment. Consecutive duplicate points are dropped, so
    /// the point shared by two hops appears once.
    pub fn build_polyline(&self, path: &[usize]) -> Vec<Location> {
        let mut line = Vec::new();
        if let [only] = path {
            if let Some(node) = self.campus.node(*only) {
                line.push(node.location);
            }
            return line;
        }

        for pair in path.windows(2) {
            let (Some(a), Some(b)) = (self.campus.node(pair[0]), self.campus.node(pair[1])) else {
                continue;
            };

            let mut segment = vec![a.location];
            if let Some((road, _)) = self.best_common_road(pair[0], pair[1]) {
                segment.extend(road.oriented_from(&a.location));
            }
            segment.push(b.location);
            polyline::append_segment(&mut line, &segment);
        }
        line
    }
}
