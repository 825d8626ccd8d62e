//! Route output types.

use courier_core::{ClockTime, LoadId, ParcelId, TruckId, VertexId};

/// One visited stop on a route.
#[derive(Clone, Debug)]
pub struct Stop {
    /// The delivery location visited.
    pub vertex: VertexId,
    /// Shortest-path distance from the previous stop.
    pub leg_distance: f64,
    /// Distance travelled from departure up to and including this stop.
    pub cumulative_distance: f64,
    /// Clock time of arrival at this stop.
    pub arrival: ClockTime,
    /// Every parcel dropped off here (multiple parcels may share an address).
    pub parcels: Vec<ParcelId>,
}

/// The planned route for one truck load: ordered stops, the return leg back
/// to the hub, and totals.
#[derive(Clone, Debug)]
pub struct Itinerary {
    pub load:  LoadId,
    pub truck: TruckId,
    /// Effective departure from the hub.
    pub departure: ClockTime,
    /// Stops in visitation order.  Arrival times are non-decreasing.
    pub stops: Vec<Stop>,
    /// Distance of the final hop from the last stop back to the hub.
    pub return_leg_distance: f64,
    /// Sum of all hop distances plus the return leg.
    pub total_distance: f64,
    /// Clock time at which the truck is back at the hub.
    pub return_time: ClockTime,
}

impl Itinerary {
    /// Total parcels delivered on this route.
    pub fn parcel_count(&self) -> usize {
        self.stops.iter().map(|s| s.parcels.len()).sum()
    }
}
