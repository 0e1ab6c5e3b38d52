//! The weighted-graph router.
//!
//! The engine module builds a petgraph graph from the campus' simple
//! weighted edges. Path finding is Dijkstra over positive weights.

/// The router engine module.
pub mod engine {
    use ordered_float::OrderedFloat;
    use petgraph::{algo::astar, graph::NodeIndex, stable_graph::StableUnGraph};

    use crate::campus::Campus;

    /// A GraphRouter contains an undirected graph of campus places and
    /// a lookup from campus index to graph index.
    #[derive(Debug)]
    pub struct GraphRouter {
        pub(crate) graph: StableUnGraph<usize, OrderedFloat<f64>>,
        pub(crate) node_indices: Vec<NodeIndex>,
    }

    impl GraphRouter {
        /// Creates a new router over every place and edge of `campus`.
        pub fn new(campus: &Campus) -> GraphRouter {
            router_info!("(GraphRouter::new) [1/2] Adding places...");
            let mut graph = StableUnGraph::default();
            let node_indices: Vec<NodeIndex> = (0..campus.list_locations().len())
                .map(|index| graph.add_node(index))
                .collect();

            router_info!("(GraphRouter::new) [2/2] Adding edges...");
            for edge in campus.edges() {
                graph.add_edge(node_indices[edge.from], node_indices[edge.to], edge.cost);
            }

            router_debug!(
                "(GraphRouter::new) {} nodes, {} edges.",
                graph.node_count(),
                graph.edge_count()
            );
            GraphRouter {
                graph,
                node_indices,
            }
        }

        /// Return the number of nodes in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Return the number of edges in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Find the shortest path between two places.
        ///
        /// petgraph's A* with a zero heuristic is Dijkstra with early
        /// exit at the target.
        ///
        /// # Arguments
        /// * `from` - Campus index to start from.
        /// * `to` - Campus index to end at.
        ///
        /// # Returns
        /// The total weight in meters and the campus indices along the
        /// path, or [`None`] when either index is unknown or the two
        /// places are disconnected.
        pub fn find_shortest_path(&self, from: usize, to: usize) -> Option<(f64, Vec<usize>)> {
            let from_index = *self.node_indices.get(from)?;
            let to_index = *self.node_indices.get(to)?;

            let (cost, path) = astar(
                &self.graph,
                from_index,
                |finish| finish == to_index,
                |e| *e.weight(),
                |_| OrderedFloat(0.0),
            )?;

            let path = path
                .into_iter()
                .map(|index| self.graph[index])
                .collect::<Vec<usize>>();
            router_debug!(
                "(find_shortest_path) {} -> {}: cost {}, path {:?}",
                from,
                to,
                cost,
                path
            );
            Some((cost.into_inner(), path))
        }
    }
}

#[cfg(test)]
mod router_tests {
    use super::engine::GraphRouter;
    use crate::campus::{Campus, CampusDefinition, EdgeDefinition, LocationDefinition};
    use crate::router::router_types::node::Category;

    fn place(name: &str) -> LocationDefinition {
        LocationDefinition {
            name: name.to_string(),
            latitude: 14.335,
            longitude: 78.538,
            category: Category::Facility,
            description: String::new(),
        }
    }

    fn link(from: &str, to: &str, weight_meters: f64) -> EdgeDefinition {
        EdgeDefinition {
            from: from.to_string(),
            to: to.to_string(),
            weight_meters,
        }
    }

    #[test]
    fn test_correct_counts() {
        let campus = Campus::embedded().unwrap();
        let router = GraphRouter::new(&campus);
        assert_eq!(router.get_node_count(), 35);
        assert_eq!(router.get_edge_count(), campus.edges().len());
    }

    /// The direct gate to library edge (180) beats both two-hop routes
    /// through the academic blocks (150 + 50 and 120 + 100).
    #[test]
    fn test_shortest_path_gate_to_library() {
        let campus = Campus::embedded().unwrap();
        let router = GraphRouter::new(&campus);
        let gate = campus.location_index("Main Gate - Entry").unwrap();
        let library = campus.location_index("CENTRAL LIBRARY").unwrap();

        let (cost, path) = router.find_shortest_path(gate, library).unwrap();
        assert_eq!(cost, 180.0);
        assert_eq!(path, vec![gate, library]);
    }

    #[test]
    fn test_shortest_path_takes_detour_when_cheaper() {
        let definition = CampusDefinition {
            locations: vec![place("A"), place("B"), place("C")],
            graph: vec![link("A", "C", 300.0), link("A", "B", 100.0), link("B", "C", 100.0)],
            ..Default::default()
        };
        let campus = Campus::from_definition(definition).unwrap();
        let router = GraphRouter::new(&campus);

        let (cost, path) = router.find_shortest_path(0, 2).unwrap();
        assert_eq!(cost, 200.0);
        assert_eq!(path, vec![0, 1, 2]);
    }

    /// C has no edges.
    #[test]
    fn test_shortest_path_disconnected_graph() {
        let definition = CampusDefinition {
            locations: vec![place("A"), place("B"), place("C")],
            graph: vec![link("A", "B", 10.0)],
            ..Default::default()
        };
        let campus = Campus::from_definition(definition).unwrap();
        let router = GraphRouter::new(&campus);

        assert!(router.find_shortest_path(0, 2).is_none());
        assert!(router.find_shortest_path(0, 99).is_none());
        assert_eq!(router.find_shortest_path(0, 0), Some((0.0, vec![0])));
    }
}
