//! Fleet assignment CSV loader.
//!
//! # CSV format
//!
//! One row per parcel assignment, with a header row.  Rows for the same load
//! must agree on `truck_id` and `departure_floor` (repeat the floor on every
//! row or leave it empty on all of them):
//!
//! ```csv
//! load_id,truck_id,parcel_id,departure_floor
//! 1,1,13,
//! 1,1,14,
//! 2,2,3,09:05
//! 2,2,18,09:05
//! ```
//!
//! Loads keep their first-appearance order, which is also their per-truck
//! run order.  The declared fleet is the set of trucks the rows name.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use courier_core::{ClockTime, LoadId, ParcelId, TruckId};

use crate::plan::{FleetPlan, LoadSpec};
use crate::{FleetError, FleetResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AssignmentRecord {
    load_id:         u16,
    truck_id:        u16,
    parcel_id:       u32,
    departure_floor: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the fleet assignment table from a CSV file.
pub fn load_fleet(path: &Path) -> FleetResult<FleetPlan> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_fleet_reader(file)
}

/// Like [`load_fleet`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(reader: R) -> FleetResult<FleetPlan> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut trucks: Vec<TruckId> = Vec::new();
    let mut loads: Vec<LoadSpec> = Vec::new();

    for result in csv_reader.deserialize::<AssignmentRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;

        let load = LoadId(row.load_id);
        let truck = TruckId(row.truck_id);
        let parcel = ParcelId(row.parcel_id);
        let floor = match row.departure_floor.as_deref() {
            None | Some("") => None,
            Some(s) => Some(
                ClockTime::parse(s)
                    .map_err(|e| FleetError::Parse(format!("load {}: {e}", row.load_id)))?,
            ),
        };

        if !trucks.contains(&truck) {
            trucks.push(truck);
        }

        match loads.iter_mut().find(|spec| spec.load == load) {
            Some(spec) => {
                // Shared per-load fields must agree across rows.
                if spec.truck != truck {
                    return Err(FleetError::ConflictingTruck(load));
                }
                if spec.departure_floor != floor {
                    return Err(FleetError::ConflictingFloor(load));
                }
                spec.parcels.push(parcel);
            }
            None => loads.push(LoadSpec {
                load,
                truck,
                parcels: vec![parcel],
                departure_floor: floor,
            }),
        }
    }

    FleetPlan::new(trucks, loads)
}
