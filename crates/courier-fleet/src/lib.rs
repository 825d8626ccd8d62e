//! `courier-fleet` — which parcels ride on which truck, and when a load may
//! leave the hub.
//!
//! # Crate layout
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`plan`]   | `LoadSpec`, `FleetPlan` (validated)         |
//! | [`loader`] | `load_fleet` / `load_fleet_reader` (CSV)    |
//! | [`error`]  | `FleetError`, `FleetResult<T>`              |

pub mod error;
pub mod loader;
pub mod plan;


pub use error::{FleetError, FleetResult};
pub use loader::{load_fleet, load_fleet_reader};
pub use plan::{FleetPlan, LoadSpec};
