use courier_core::{LoadId, ParcelId, TruckId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("truck {0} declared twice")]
    DuplicateTruck(TruckId),

    #[error("load {0} declared twice")]
    DuplicateLoad(LoadId),

    #[error("load {load} assigned to truck {truck}, which is not in the fleet")]
    UnknownTruck { load: LoadId, truck: TruckId },

    #[error("parcel {parcel} assigned to both load {first} and load {second}")]
    DuplicateAssignment {
        parcel: ParcelId,
        first:  LoadId,
        second: LoadId,
    },

    #[error("load {load} references parcel {parcel}, which is not in the manifest")]
    UnknownParcel { load: LoadId, parcel: ParcelId },

    #[error("parcel {0} is in the manifest but assigned to no load")]
    UnassignedParcel(ParcelId),

    #[error("load {0} has conflicting departure floors")]
    ConflictingFloor(LoadId),

    #[error("load {0} assigned to more than one truck")]
    ConflictingTruck(LoadId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
