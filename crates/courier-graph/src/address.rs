//! Address list ↔ vertex label mapping.
//!
//! The ordered address list defines the graph's vertex labels: entry 0 is
//! the hub, entry `i` is vertex `i`.  `AddressBook` keeps the list plus a
//! reverse index so parcel addresses resolve to vertices in O(1).

use rustc_hash::FxHashMap;

use courier_core::VertexId;

use crate::{GraphError, GraphResult, HUB};

/// Ordered address list with a reverse string → vertex index.
#[derive(Debug)]
pub struct AddressBook {
    labels: Vec<String>,
    index:  FxHashMap<String, VertexId>,
}

impl AddressBook {
    /// Build from an ordered address list.  The list must be non-empty
    /// (entry 0 is the hub) and free of duplicates — two vertices sharing an
    /// address would make parcel→stop resolution ambiguous.
    pub fn from_list(labels: Vec<String>) -> GraphResult<AddressBook> {
        if labels.is_empty() {
            return Err(GraphError::EmptyAddressList);
        }

        let mut index = FxHashMap::default();
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), VertexId(i as u32)).is_some() {
                return Err(GraphError::DuplicateAddress(label.clone()));
            }
        }
        Ok(AddressBook { labels, index })
    }

    /// Vertex 0 — the hub address every route starts and ends at.
    pub fn hub(&self) -> VertexId {
        HUB
    }

    /// Resolve an address string to its vertex, if listed.
    pub fn vertex_of(&self, address: &str) -> Option<VertexId> {
        self.index.get(address).copied()
    }

    /// The address string at `v`.
    pub fn address(&self, v: VertexId) -> &str {
        &self.labels[v.index()]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
