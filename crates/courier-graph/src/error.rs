//! Graph-subsystem error type.

use courier_core::VertexId;
use thiserror::Error;

/// Errors produced by `courier-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} already present")]
    DuplicateVertex(VertexId),

    #[error("vertex {label} added out of order (expected label {expected})")]
    VertexOutOfOrder { label: VertexId, expected: u32 },

    #[error("vertex {0} not found in graph")]
    UnknownVertex(VertexId),

    #[error("self edge on vertex {0}: edge_weight(v, v) is fixed at 0")]
    SelfEdge(VertexId),

    #[error("negative weight {weight} on edge {a} - {b}")]
    NegativeWeight { a: VertexId, b: VertexId, weight: f64 },

    #[error("distance matrix row {row} has {len} columns, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("distance matrix is asymmetric at ({a}, {b})")]
    Asymmetric { a: usize, b: usize },

    #[error("distance matrix diagonal entry {0} is non-zero")]
    NonZeroDiagonal(usize),

    #[error("no path from {from} to {to}")]
    Unreachable { from: VertexId, to: VertexId },

    #[error("duplicate address {0:?} in address list")]
    DuplicateAddress(String),

    #[error("address list is empty (entry 0 must be the hub)")]
    EmptyAddressList,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
