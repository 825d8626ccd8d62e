//! Single-source shortest paths.
//!
//! # Scratch-space discipline
//!
//! Every invocation of [`shortest_paths`] allocates a fresh
//! [`ShortestPaths`] holding its own distance and predecessor arrays.
//! Vertices themselves carry no routing state, so repeated solves — the
//! route builder re-solves from every stop — are side-effect-free with
//! respect to each other and to the graph.
//!
//! # Algorithm
//!
//! Classic Dijkstra with array-scan selection: O(V²) total, no priority
//! queue.  For the complete graphs this planner builds, V² is also the edge
//! count, so a heap would buy nothing.  Equal-distance candidates settle in
//! lowest-label order (ascending scan, strict improvement), which makes
//! every solve — and everything built on top of it — deterministic.

use courier_core::VertexId;

use crate::graph::DeliveryGraph;
use crate::{GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// The result of one shortest-path solve: per-vertex best distance and
/// predecessor, owned by this object and discarded with it.
pub struct ShortestPaths {
    source:      VertexId,
    /// Best known distance from `source`, `+inf` for unreached vertices.
    dist:        Vec<f64>,
    /// Vertex preceding each vertex on its best path; `None` for the source
    /// and for unreached vertices.
    predecessor: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source to `v` (`+inf` if unreached).
    #[inline]
    pub fn distance_to(&self, v: VertexId) -> f64 {
        self.dist[v.index()]
    }

    /// Reconstruct the path source → `target` by walking predecessors.
    ///
    /// A target with no predecessor that is not the source itself is
    /// unreachable — reported, never assumed away, even though the complete
    /// graphs this system builds cannot produce one.
    pub fn path_to(&self, target: VertexId) -> GraphResult<Vec<VertexId>> {
        if target != self.source && self.predecessor[target.index()].is_none() {
            return Err(GraphError::Unreachable { from: self.source, to: target });
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor[current.index()] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Ok(path)
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Solve single-source shortest paths from `source` over the whole graph.
pub fn shortest_paths(graph: &DeliveryGraph, source: VertexId) -> GraphResult<ShortestPaths> {
    let n = graph.vertex_count();
    if source.index() >= n {
        return Err(GraphError::UnknownVertex(source));
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut unvisited: Vec<VertexId> = graph.vertices().collect();

    dist[source.index()] = 0.0;

    while !unvisited.is_empty() {
        // Select the unvisited vertex with minimum distance; ties resolve to
        // the lowest label via strict `<` over an ascending-label scan.
        let mut best_pos = 0;
        for pos in 1..unvisited.len() {
            if dist[unvisited[pos].index()] < dist[unvisited[best_pos].index()] {
                best_pos = pos;
            }
        }
        let current = unvisited.remove(best_pos);
        let current_dist = dist[current.index()];

        if current_dist.is_infinite() {
            // Everything still unvisited is unreachable from the source.
            break;
        }

        for &neighbor in graph.adjacency(current) {
            let Some(weight) = graph.edge_weight(current, neighbor) else {
                continue;
            };
            let alternative = current_dist + weight;
            if alternative < dist[neighbor.index()] {
                dist[neighbor.index()] = alternative;
                predecessor[neighbor.index()] = Some(current);
            }
        }
    }

    Ok(ShortestPaths { source, dist, predecessor })
}
