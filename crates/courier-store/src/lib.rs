//! `courier-store` — parcel records and the parcel lookup table.
//!
//! # Crate layout
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`parcel`] | `Parcel`, `Deadline`, `DeliveryStatus`         |
//! | [`table`]  | `ParcelTable` (fixed-bucket chaining table)    |
//! | [`loader`] | `load_parcels` / `load_parcels_reader` (CSV)   |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                 |

pub mod error;
pub mod loader;
pub mod parcel;
pub mod table;


pub use error::{StoreError, StoreResult};
pub use loader::{load_parcels, load_parcels_reader};
pub use parcel::{Deadline, DeliveryStatus, Parcel};
pub use table::ParcelTable;
