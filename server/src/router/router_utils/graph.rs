//! Helper functions for working with graphs.

use ordered_float::OrderedFloat;

use crate::campus::{Campus, CampusError, EdgeDefinition};
use crate::router::router_types::edge::Edge;

/// Build the undirected edges of the simple weighted graph.
///
/// Campus files usually list every connection twice, once from each
/// end. Both listings collapse into a single [`Edge`]; a connection
/// listed only once is still walkable both ways.
///
/// # Arguments
/// * `definitions` - Graph entries in file order.
/// * `resolve` - Maps a place name to its node index.
///
/// # Returns
/// The edges in order of first appearance.
///
/// # Errors
/// Unknown place names, self loops, non-positive weights and the same
/// connection listed with two different weights.
///
/// # Time Complexity
/// *O*(*n^2*) in the number of entries; campus graphs are small.
pub fn build_edges(
    definitions: &[EdgeDefinition],
    resolve: impl Fn(&str) -> Option<usize>,
) -> Result<Vec<Edge>, CampusError> {
    router_debug!("(build_edges) starting function call.");
    let mut edges: Vec<Edge> = Vec::new();
    for definition in definitions {
        let from = resolve(&definition.from).ok_or_else(|| unknown(&definition.from))?;
        let to = resolve(&definition.to).ok_or_else(|| unknown(&definition.to))?;

        if from == to {
            return Err(CampusError::SelfLoop(definition.from.clone()));
        }

        let weight = definition.weight_meters;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CampusError::InvalidWeight {
                from: definition.from.clone(),
                to: definition.to.clone(),
                weight,
            });
        }

        match edges.iter().find(|edge| edge.joins(from, to)) {
            Some(existing) if existing.cost.into_inner() != weight => {
                router_error!(
                    "(build_edges) {} <-> {} listed with {} and {}.",
                    definition.from,
                    definition.to,
                    existing.cost,
                    weight
                );
                return Err(CampusError::ConflictingWeight {
                    from: definition.from.clone(),
                    to: definition.to.clone(),
                    first: existing.cost.into_inner(),
                    second: weight,
                });
            }
            Some(_) => continue,
            None => edges.push(Edge {
                from,
                to,
                cost: OrderedFloat(weight),
            }),
        }
    }
    Ok(edges)
}

/// Adjacency induced by shared roads: two places are neighbors when
/// their road sets intersect.
///
/// Neighbor lists follow the road-connection index order, so every
/// traversal over them is deterministic.
pub fn build_road_adjacency(campus: &Campus) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); campus.list_locations().len()];
    let connected = campus.connected_locations();
    for &from in connected {
        let roads = campus.road_indices_at(from);
        adjacency[from] = connected
            .iter()
            .copied()
            .filter(|&to| to != from)
            .filter(|&to| campus.road_indices_at(to).iter().any(|r| roads.contains(r)))
            .collect();
    }
    adjacency
}

fn unknown(name: &str) -> CampusError {
    CampusError::UnknownLocationReference {
        context: "graph".to_string(),
        name: name.to_string(),
    }
}
