use courier_core::{ClockTime, ParcelId, TruckId};
use courier_fleet::FleetError;
use courier_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("query time {query} is before business hours; the shift starts at {opening}")]
    BeforeOpening { query: ClockTime, opening: ClockTime },

    #[error("parcel {0} not found")]
    ParcelNotFound(ParcelId),

    #[error("truck {0} is not part of this dispatch")]
    UnknownTruck(TruckId),

    #[error("fleet configuration error: {0}")]
    Fleet(#[from] FleetError),

    #[error("route planning failed: {0}")]
    Route(#[from] RouteError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
