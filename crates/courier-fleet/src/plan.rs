//! Fleet plan: the static truck/load assignment the dispatcher executes.
//!
//! # Sequencing model
//!
//! Loads are declared in an ordered list; a truck's loads run in declaration
//! order, and a later load's clock starts when the truck's previous route
//! (including its return leg) completes.  A load may additionally carry a
//! **departure floor** — the earliest clock time it may leave the hub
//! regardless of truck availability, modeling external constraints such as
//! parcels that arrive late at the depot.
//!
//! The plan is validated once at construction and read-only thereafter.
//! Departure gating is data on the load, consulted uniformly by the
//! dispatcher and the status classifier — there is no per-truck
//! special-casing anywhere downstream.

use rustc_hash::FxHashMap;

use courier_core::{ClockTime, LoadId, ParcelId, TruckId};
use courier_store::ParcelTable;

use crate::{FleetError, FleetResult};

// ── LoadSpec ──────────────────────────────────────────────────────────────────

/// One truck load: an ordered set of parcels for one outbound run.
#[derive(Clone, Debug)]
pub struct LoadSpec {
    pub load:  LoadId,
    pub truck: TruckId,
    /// Parcels on this load, in manifest order.  No parcel appears in more
    /// than one load across the whole plan (validated).
    pub parcels: Vec<ParcelId>,
    /// Earliest clock time this load may leave the hub, if constrained.
    pub departure_floor: Option<ClockTime>,
}

// ── FleetPlan ─────────────────────────────────────────────────────────────────

/// The validated truck/load assignment table.
#[derive(Debug)]
pub struct FleetPlan {
    trucks: Vec<TruckId>,
    loads:  Vec<LoadSpec>,
    /// Reverse index: which load carries each parcel.
    assignment: FxHashMap<ParcelId, LoadId>,
}

impl FleetPlan {
    /// Build and validate a plan.
    ///
    /// Fatal configuration errors: a truck or load declared twice, a load
    /// naming a truck outside the declared fleet, or a parcel assigned to
    /// more than one load.  Route correctness depends on these invariants
    /// holding before any planning runs, so none of them is recoverable.
    pub fn new(trucks: Vec<TruckId>, loads: Vec<LoadSpec>) -> FleetResult<FleetPlan> {
        let mut seen_trucks: Vec<TruckId> = Vec::new();
        for &truck in &trucks {
            if seen_trucks.contains(&truck) {
                return Err(FleetError::DuplicateTruck(truck));
            }
            seen_trucks.push(truck);
        }

        let mut assignment: FxHashMap<ParcelId, LoadId> = FxHashMap::default();
        let mut seen_loads: Vec<LoadId> = Vec::new();
        for spec in &loads {
            if seen_loads.contains(&spec.load) {
                return Err(FleetError::DuplicateLoad(spec.load));
            }
            seen_loads.push(spec.load);

            if !trucks.contains(&spec.truck) {
                return Err(FleetError::UnknownTruck { load: spec.load, truck: spec.truck });
            }

            for &parcel in &spec.parcels {
                if let Some(&first) = assignment.get(&parcel) {
                    return Err(FleetError::DuplicateAssignment {
                        parcel,
                        first,
                        second: spec.load,
                    });
                }
                assignment.insert(parcel, spec.load);
            }
        }

        Ok(FleetPlan { trucks, loads, assignment })
    }

    /// Check the plan against the loaded manifest: every assigned parcel
    /// must exist, and every manifest parcel must be assigned exactly once
    /// (uniqueness already holds by construction).
    pub fn validate_against(&self, table: &ParcelTable) -> FleetResult<()> {
        for spec in &self.loads {
            for &parcel in &spec.parcels {
                if table.search(parcel).is_none() {
                    return Err(FleetError::UnknownParcel { load: spec.load, parcel });
                }
            }
        }
        for id in table.ids_sorted() {
            if !self.assignment.contains_key(&id) {
                return Err(FleetError::UnassignedParcel(id));
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Declared trucks, in declaration order.
    pub fn trucks(&self) -> &[TruckId] {
        &self.trucks
    }

    /// All loads, in declaration order.
    pub fn loads(&self) -> &[LoadSpec] {
        &self.loads
    }

    /// The loads of one truck, in run order.
    pub fn loads_for(&self, truck: TruckId) -> impl Iterator<Item = &LoadSpec> + '_ {
        self.loads.iter().filter(move |spec| spec.truck == truck)
    }

    /// The load carrying `parcel`, if assigned.
    pub fn load_of(&self, parcel: ParcelId) -> Option<LoadId> {
        self.assignment.get(&parcel).copied()
    }
}
