//! `courier-graph` — delivery locations, distances, and shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`graph`]    | `DeliveryGraph` (vertices + symmetric edge weights) |
//! | [`shortest`] | `shortest_paths` (Dijkstra), `ShortestPaths`        |
//! | [`address`]  | `AddressBook` (address string ↔ vertex)             |
//! | [`loader`]   | address-list and distance-matrix CSV loaders        |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                      |

pub mod address;
pub mod error;
pub mod graph;
pub mod loader;
pub mod shortest;

#[cfg(test)]
mod tests;

pub use address::AddressBook;
pub use error::{GraphError, GraphResult};
pub use graph::{DeliveryGraph, HUB};
pub use loader::{load_addresses, load_addresses_reader, load_matrix, load_matrix_reader};
pub use shortest::{ShortestPaths, shortest_paths};
