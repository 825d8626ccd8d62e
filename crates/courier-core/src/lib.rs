//! `courier-core` — foundational types for the courier dispatch planner.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and only `thiserror`
//! externally.
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`ids`]   | `ParcelId`, `VertexId`, `TruckId`, `LoadId`     |
//! | [`time`]  | `ClockTime`, `TimeClock`                        |
//! | [`error`] | `CoreError`, `CoreResult`                       |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LoadId, ParcelId, TruckId, VertexId};
pub use time::{ClockTime, TimeClock};
