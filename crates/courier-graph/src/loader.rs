//! Address-list and distance-matrix CSV loaders.
//!
//! # CSV formats
//!
//! Neither file has a header row.
//!
//! **Address list** — one address per row; row index = vertex label, row 0
//! is the hub:
//!
//! ```csv
//! 100 Depot Way
//! 12 Birch Ave
//! 480 Mill Rd
//! ```
//!
//! **Distance matrix** — square, one row per vertex, entries are
//! non-negative distances; [`DeliveryGraph::from_matrix`] enforces shape,
//! symmetry, and the zero diagonal:
//!
//! ```csv
//! 0.0,3.5,6.0
//! 3.5,0.0,4.1
//! 6.0,4.1,0.0
//! ```

use std::io::Read;
use std::path::Path;

use crate::graph::DeliveryGraph;
use crate::{GraphError, GraphResult};

// ── Address list ──────────────────────────────────────────────────────────────

/// Load the ordered address list from a CSV file.
pub fn load_addresses(path: &Path) -> GraphResult<Vec<String>> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_addresses_reader(file)
}

/// Like [`load_addresses`] but accepts any `Read` source.
pub fn load_addresses_reader<R: Read>(reader: R) -> GraphResult<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut addresses = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let address = record
            .get(0)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        if address.is_empty() {
            return Err(GraphError::Parse(format!(
                "empty address at row {}",
                addresses.len()
            )));
        }
        addresses.push(address);
    }
    Ok(addresses)
}

// ── Distance matrix ───────────────────────────────────────────────────────────

/// Load the distance matrix and build the validated [`DeliveryGraph`].
pub fn load_matrix(path: &Path) -> GraphResult<DeliveryGraph> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_matrix_reader(file)
}

/// Like [`load_matrix`] but accepts any `Read` source.
pub fn load_matrix_reader<R: Read>(reader: R) -> GraphResult<DeliveryGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let row = record
            .iter()
            .map(|field| {
                field.trim().parse::<f64>().map_err(|_| {
                    GraphError::Parse(format!(
                        "bad distance {field:?} at matrix row {}",
                        rows.len()
                    ))
                })
            })
            .collect::<GraphResult<Vec<f64>>>()?;
        rows.push(row);
    }

    DeliveryGraph::from_matrix(&rows)
}
