//! Delivery-location graph.
//!
//! # Data layout
//!
//! Vertices are dense labels `0..n` (index = position in the address list;
//! vertex 0 is the hub).  Adjacency is a `Vec<Vec<VertexId>>` indexed by
//! label; edge weights live in an `FxHashMap<(u32, u32), f64>` holding both
//! directions of every undirected edge, so `edge_weight(a, b)` is one hash
//! lookup either way round.
//!
//! The production construction path is [`DeliveryGraph::from_matrix`]: a
//! square, symmetric, non-negative distance matrix with a zero diagonal,
//! validated before a single edge is built — the planner refuses to route
//! over inconsistent distance data.

use rustc_hash::FxHashMap;

use courier_core::VertexId;

use crate::{GraphError, GraphResult};

/// The fixed start and end point of every route.
pub const HUB: VertexId = VertexId(0);

/// Weighted undirected graph over delivery locations.
#[derive(Debug)]
pub struct DeliveryGraph {
    /// Neighbors of each vertex, indexed by label.  Never contains the
    /// vertex itself and never contains duplicates.
    adjacency: Vec<Vec<VertexId>>,
    /// Both directions of every undirected edge, keyed by `(from, to)`.
    weights: FxHashMap<(u32, u32), f64>,
}

impl DeliveryGraph {
    /// An empty graph with no vertices.
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            weights:   FxHashMap::default(),
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register a location.  Labels are dense indices, so they must arrive
    /// in order; a label already present is a constraint violation, not a
    /// silent no-op.
    pub fn add_vertex(&mut self, label: VertexId) -> GraphResult<()> {
        let next = self.adjacency.len() as u32;
        if label.0 < next {
            return Err(GraphError::DuplicateVertex(label));
        }
        if label.0 > next {
            return Err(GraphError::VertexOutOfOrder { label, expected: next });
        }
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Record `edge_weight(a, b) = edge_weight(b, a) = weight` and make each
    /// endpoint appear exactly once in the other's adjacency.  Repeated calls
    /// with the same pair update the weight without duplicating adjacency
    /// entries.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, weight: f64) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if a == b {
            return Err(GraphError::SelfEdge(a));
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight { a, b, weight });
        }

        self.weights.insert((a.0, b.0), weight);
        self.weights.insert((b.0, a.0), weight);

        if !self.adjacency[a.index()].contains(&b) {
            self.adjacency[a.index()].push(b);
        }
        if !self.adjacency[b.index()].contains(&a) {
            self.adjacency[b.index()].push(a);
        }
        Ok(())
    }

    /// Build the complete graph for an `n`-entry address list from its
    /// distance matrix.  Validates shape, symmetry, non-negativity, and a
    /// zero diagonal first — any violation is fatal.
    pub fn from_matrix(rows: &[Vec<f64>]) -> GraphResult<DeliveryGraph> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare { row: i, len: row.len(), expected: n });
            }
            if rows[i][i] != 0.0 {
                return Err(GraphError::NonZeroDiagonal(i));
            }
        }
        for a in 0..n {
            for b in (a + 1)..n {
                if rows[a][b] != rows[b][a] {
                    return Err(GraphError::Asymmetric { a, b });
                }
            }
        }

        let mut graph = DeliveryGraph::new();
        for label in 0..n as u32 {
            graph.add_vertex(VertexId(label))?;
        }
        for a in 0..n {
            for b in (a + 1)..n {
                graph.add_undirected_edge(
                    VertexId(a as u32),
                    VertexId(b as u32),
                    rows[a][b],
                )?;
            }
        }
        Ok(graph)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterator over all vertex labels in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.adjacency.len() as u32).map(VertexId)
    }

    /// Neighbors of `v` (every vertex it shares an edge with, no duplicates).
    pub fn adjacency(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v.index()]
    }

    /// Weight of the edge `a - b`.  `edge_weight(v, v)` is always 0; an
    /// unconnected pair returns `None`.
    pub fn edge_weight(&self, a: VertexId, b: VertexId) -> Option<f64> {
        if a == b {
            return Some(0.0);
        }
        self.weights.get(&(a.0, b.0)).copied()
    }

    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v))
        }
    }
}

impl Default for DeliveryGraph {
    fn default() -> Self {
        Self::new()
    }
}
