//! The dispatch run: every load routed once, in a deterministic order.

use rustc_hash::FxHashMap;

use courier_core::{ClockTime, ParcelId, TimeClock, TruckId};
use courier_fleet::FleetPlan;
use courier_graph::{AddressBook, DeliveryGraph};
use courier_route::{Itinerary, RoutePlanner};
use courier_store::ParcelTable;

use crate::DispatchResult;

// ── LoadRecord ────────────────────────────────────────────────────────────────

/// One executed load: its effective departure and the planned itinerary.
#[derive(Clone, Debug)]
pub struct LoadRecord {
    /// When the load actually left the hub:
    /// `max(truck available, departure floor)`.
    pub departure: ClockTime,
    pub itinerary: Itinerary,
}

impl LoadRecord {
    pub fn truck(&self) -> TruckId {
        self.itinerary.truck
    }

    pub fn total_distance(&self) -> f64 {
        self.itinerary.total_distance
    }

    /// When the truck was back at the hub after this load.
    pub fn return_time(&self) -> ClockTime {
        self.itinerary.return_time
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Executes a validated fleet plan against the manifest.
///
/// All collaborators are borrowed explicitly — the dispatcher holds no
/// ambient state and a run is a pure function of its inputs.
pub struct Dispatcher<'a> {
    graph:     &'a DeliveryGraph,
    addresses: &'a AddressBook,
    fleet:     &'a FleetPlan,
    clock:     TimeClock,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        graph:     &'a DeliveryGraph,
        addresses: &'a AddressBook,
        fleet:     &'a FleetPlan,
        clock:     TimeClock,
    ) -> Self {
        Self { graph, addresses, fleet, clock }
    }

    /// Route every load and commit the resulting deliveries.
    ///
    /// Trucks run in ascending id order; each truck's loads run in plan
    /// order, with a later load departing at
    /// `max(previous return time, departure floor)`.  Any planning failure
    /// aborts the run — partial dispatches are never reported as snapshots.
    pub fn run(&self, table: &mut ParcelTable) -> DispatchResult<DispatchSnapshot> {
        self.fleet.validate_against(table)?;
        let planner = RoutePlanner::new(self.graph, self.addresses, self.clock)?;

        let mut trucks: Vec<TruckId> = self.fleet.trucks().to_vec();
        trucks.sort_unstable();

        let mut records: Vec<LoadRecord> = Vec::with_capacity(self.fleet.loads().len());
        for truck in trucks {
            let mut available = self.clock.shift_start;
            for spec in self.fleet.loads_for(truck) {
                let departure = match spec.departure_floor {
                    Some(floor) if floor > available => floor,
                    _ => available,
                };

                let itinerary = planner.plan(spec, table, departure)?;
                planner.commit(&itinerary, table)?;

                available = itinerary.return_time;
                records.push(LoadRecord { departure, itinerary });
            }
        }

        Ok(DispatchSnapshot::new(records, self.clock))
    }
}

// ── DispatchSnapshot ──────────────────────────────────────────────────────────

/// The immutable result of one dispatch run.  Every status query reads this
/// plus the committed manifest; nothing re-plans.
#[derive(Debug)]
pub struct DispatchSnapshot {
    records: Vec<LoadRecord>,
    clock:   TimeClock,
    /// Reverse index: parcel → position of its load record.
    by_parcel: FxHashMap<ParcelId, usize>,
}

impl DispatchSnapshot {
    fn new(records: Vec<LoadRecord>, clock: TimeClock) -> Self {
        let mut by_parcel = FxHashMap::default();
        for (pos, record) in records.iter().enumerate() {
            for stop in &record.itinerary.stops {
                for &parcel in &stop.parcels {
                    by_parcel.insert(parcel, pos);
                }
            }
        }
        Self { records, clock, by_parcel }
    }

    /// All load records in execution order.
    pub fn records(&self) -> &[LoadRecord] {
        &self.records
    }

    pub fn clock(&self) -> TimeClock {
        self.clock
    }

    /// The record of the load that carried `parcel`.
    pub fn record_for_parcel(&self, parcel: ParcelId) -> Option<&LoadRecord> {
        self.by_parcel.get(&parcel).map(|&pos| &self.records[pos])
    }

    /// Trucks that ran, ascending.
    pub fn trucks(&self) -> Vec<TruckId> {
        let mut trucks: Vec<TruckId> = self.records.iter().map(|r| r.truck()).collect();
        trucks.sort_unstable();
        trucks.dedup();
        trucks
    }

    /// The records of one truck, in run order.
    pub fn truck_records(&self, truck: TruckId) -> impl Iterator<Item = &LoadRecord> + '_ {
        self.records.iter().filter(move |r| r.truck() == truck)
    }

    /// Sum of every load's total distance.
    pub fn grand_total_distance(&self) -> f64 {
        self.records.iter().map(|r| r.total_distance()).sum()
    }
}
