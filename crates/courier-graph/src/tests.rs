//! Unit tests for courier-graph.
//!
//! All tests use hand-crafted matrices so they run without any data files.

#[cfg(test)]
mod helpers {
    use crate::DeliveryGraph;

    /// The 4-location planning example used throughout the test suite.
    ///
    /// Distances: d(0,1)=2, d(0,2)=5, d(0,3)=9, d(1,2)=4, d(1,3)=6, d(2,3)=3.
    pub fn four_location_matrix() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 2.0, 5.0, 9.0],
            vec![2.0, 0.0, 4.0, 6.0],
            vec![5.0, 4.0, 0.0, 3.0],
            vec![9.0, 6.0, 3.0, 0.0],
        ]
    }

    pub fn four_location_graph() -> DeliveryGraph {
        DeliveryGraph::from_matrix(&four_location_matrix()).unwrap()
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use courier_core::VertexId;

    use crate::{DeliveryGraph, GraphError};
    use super::helpers::{four_location_graph, four_location_matrix};

    #[test]
    fn from_matrix_builds_complete_graph() {
        let g = four_location_graph();
        assert_eq!(g.vertex_count(), 4);
        // Complete graph: every vertex is adjacent to every other, once.
        for v in g.vertices() {
            assert_eq!(g.adjacency(v).len(), 3, "vertex {v} adjacency");
        }
    }

    #[test]
    fn edge_weights_are_symmetric() {
        let g = four_location_graph();
        for a in g.vertices() {
            for b in g.vertices() {
                assert_eq!(g.edge_weight(a, b), g.edge_weight(b, a), "({a}, {b})");
            }
        }
    }

    #[test]
    fn self_weight_is_zero() {
        let g = four_location_graph();
        for v in g.vertices() {
            assert_eq!(g.edge_weight(v, v), Some(0.0));
        }
    }

    #[test]
    fn duplicate_vertex_is_an_error() {
        let mut g = DeliveryGraph::new();
        g.add_vertex(VertexId(0)).unwrap();
        let err = g.add_vertex(VertexId(0)).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex(VertexId(0))));
    }

    #[test]
    fn out_of_order_vertex_is_an_error() {
        let mut g = DeliveryGraph::new();
        g.add_vertex(VertexId(0)).unwrap();
        let err = g.add_vertex(VertexId(5)).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfOrder { .. }));
    }

    #[test]
    fn repeated_edge_does_not_duplicate_adjacency() {
        let mut g = DeliveryGraph::new();
        g.add_vertex(VertexId(0)).unwrap();
        g.add_vertex(VertexId(1)).unwrap();
        g.add_undirected_edge(VertexId(0), VertexId(1), 4.0).unwrap();
        g.add_undirected_edge(VertexId(0), VertexId(1), 7.0).unwrap();

        assert_eq!(g.adjacency(VertexId(0)), &[VertexId(1)]);
        assert_eq!(g.adjacency(VertexId(1)), &[VertexId(0)]);
        // Latest weight wins, both directions.
        assert_eq!(g.edge_weight(VertexId(0), VertexId(1)), Some(7.0));
        assert_eq!(g.edge_weight(VertexId(1), VertexId(0)), Some(7.0));
    }

    #[test]
    fn negative_weight_rejected() {
        let mut g = DeliveryGraph::new();
        g.add_vertex(VertexId(0)).unwrap();
        g.add_vertex(VertexId(1)).unwrap();
        let err = g.add_undirected_edge(VertexId(0), VertexId(1), -1.0).unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { .. }));
    }

    #[test]
    fn ragged_matrix_rejected() {
        let mut rows = four_location_matrix();
        rows[2].pop();
        let err = DeliveryGraph::from_matrix(&rows).unwrap_err();
        assert!(matches!(err, GraphError::NotSquare { row: 2, .. }));
    }

    #[test]
    fn asymmetric_matrix_rejected() {
        let mut rows = four_location_matrix();
        rows[0][1] = 2.5; // no longer equals rows[1][0]
        let err = DeliveryGraph::from_matrix(&rows).unwrap_err();
        assert!(matches!(err, GraphError::Asymmetric { a: 0, b: 1 }));
    }

    #[test]
    fn nonzero_diagonal_rejected() {
        let mut rows = four_location_matrix();
        rows[1][1] = 0.1;
        let err = DeliveryGraph::from_matrix(&rows).unwrap_err();
        assert!(matches!(err, GraphError::NonZeroDiagonal(1)));
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use courier_core::VertexId;

    use crate::{DeliveryGraph, GraphError, HUB, shortest_paths};
    use super::helpers::four_location_graph;

    #[test]
    fn source_distance_is_zero() {
        let g = four_location_graph();
        let sp = shortest_paths(&g, HUB).unwrap();
        assert_eq!(sp.distance_to(HUB), 0.0);
        assert_eq!(sp.source(), HUB);
    }

    #[test]
    fn distances_from_hub() {
        let g = four_location_graph();
        let sp = shortest_paths(&g, HUB).unwrap();

        assert_eq!(sp.distance_to(VertexId(1)), 2.0);
        // Direct 0-2 (5) beats 0-1-2 (6).
        assert_eq!(sp.distance_to(VertexId(2)), 5.0);
        // 0-1-3 and 0-2-3 both cost 8, beating direct 0-3 (9).
        assert_eq!(sp.distance_to(VertexId(3)), 8.0);
    }

    #[test]
    fn equal_cost_predecessor_settles_to_lowest_label() {
        let g = four_location_graph();
        let sp = shortest_paths(&g, HUB).unwrap();
        // Vertex 1 settles before vertex 2 (2 < 5), so 3's 8-cost path is
        // claimed via 1 first and the later equal-cost relax via 2 loses.
        assert_eq!(sp.path_to(VertexId(3)).unwrap(), vec![HUB, VertexId(1), VertexId(3)]);
    }

    #[test]
    fn path_to_source_is_trivial() {
        let g = four_location_graph();
        let sp = shortest_paths(&g, HUB).unwrap();
        assert_eq!(sp.path_to(HUB).unwrap(), vec![HUB]);
    }

    #[test]
    fn distances_never_negative() {
        let g = four_location_graph();
        for source in g.vertices() {
            let sp = shortest_paths(&g, source).unwrap();
            for v in g.vertices() {
                assert!(sp.distance_to(v) >= 0.0);
            }
        }
    }

    #[test]
    fn repeated_solves_are_independent() {
        let g = four_location_graph();
        let first = shortest_paths(&g, VertexId(1)).unwrap();
        // A second solve from a different source must not disturb the first.
        let _second = shortest_paths(&g, VertexId(3)).unwrap();
        assert_eq!(first.distance_to(VertexId(2)), 4.0);
        assert_eq!(first.distance_to(HUB), 2.0);
    }

    #[test]
    fn disconnected_vertex_is_unreachable() {
        let mut g = DeliveryGraph::new();
        for label in 0..3 {
            g.add_vertex(VertexId(label)).unwrap();
        }
        // Only 0-1 connected; vertex 2 is isolated.
        g.add_undirected_edge(VertexId(0), VertexId(1), 1.0).unwrap();

        let sp = shortest_paths(&g, HUB).unwrap();
        assert!(sp.distance_to(VertexId(2)).is_infinite());
        let err = sp.path_to(VertexId(2)).unwrap_err();
        assert!(matches!(err, GraphError::Unreachable { to: VertexId(2), .. }));
    }

    #[test]
    fn unknown_source_rejected() {
        let g = four_location_graph();
        assert!(matches!(
            shortest_paths(&g, VertexId(40)),
            Err(GraphError::UnknownVertex(VertexId(40)))
        ));
    }
}

// ── Address book ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod address_book {
    use courier_core::VertexId;

    use crate::{AddressBook, GraphError, HUB};

    fn list() -> Vec<String> {
        ["100 Depot Way", "12 Birch Ave", "480 Mill Rd"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn resolves_addresses_to_vertices() {
        let book = AddressBook::from_list(list()).unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.hub(), HUB);
        assert_eq!(book.vertex_of("480 Mill Rd"), Some(VertexId(2)));
        assert_eq!(book.vertex_of("nowhere"), None);
        assert_eq!(book.address(VertexId(1)), "12 Birch Ave");
    }

    #[test]
    fn duplicate_address_rejected() {
        let mut labels = list();
        labels.push("12 Birch Ave".to_string());
        let err = AddressBook::from_list(labels).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateAddress(_)));
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(
            AddressBook::from_list(Vec::new()),
            Err(GraphError::EmptyAddressList)
        ));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loaders {
    use std::io::Cursor;

    use courier_core::VertexId;

    use crate::{GraphError, load_addresses_reader, load_matrix_reader, shortest_paths};

    #[test]
    fn loads_address_rows_in_order() {
        let csv = "100 Depot Way\n12 Birch Ave\n480 Mill Rd\n";
        let addresses = load_addresses_reader(Cursor::new(csv)).unwrap();
        assert_eq!(addresses, vec!["100 Depot Way", "12 Birch Ave", "480 Mill Rd"]);
    }

    #[test]
    fn loads_matrix_into_routable_graph() {
        let csv = "0.0,2.0,5.0\n2.0,0.0,4.0\n5.0,4.0,0.0\n";
        let g = load_matrix_reader(Cursor::new(csv)).unwrap();
        assert_eq!(g.vertex_count(), 3);

        let sp = shortest_paths(&g, VertexId(0)).unwrap();
        assert_eq!(sp.distance_to(VertexId(2)), 5.0);
    }

    #[test]
    fn bad_float_rejected() {
        let csv = "0.0,x\nx,0.0\n";
        assert!(matches!(
            load_matrix_reader(Cursor::new(csv)),
            Err(GraphError::Parse(_))
        ));
    }

    #[test]
    fn ragged_matrix_rejected_at_build() {
        let csv = "0.0,2.0\n2.0,0.0,9.9\n";
        assert!(matches!(
            load_matrix_reader(Cursor::new(csv)),
            Err(GraphError::NotSquare { .. })
        ));
    }
}
