//! Greedy multi-stop route builder.
//!
//! # Algorithm
//!
//! Nearest-unvisited-stop: from the current position, solve single-source
//! shortest paths over the whole graph, pick the cheapest remaining target
//! (ties to the lowest vertex label), travel there, repeat; finish with the
//! return leg to the hub.  This is a deterministic, explainable heuristic,
//! not an optimal tour — the right trade for a handful of stops per load.
//!
//! Each round gets its own [`ShortestPaths`](courier_graph::ShortestPaths)
//! scratch object, so repeated solves never observe each other's state and
//! per-truck planning stays order-independent.
//!
//! # Side-effect discipline
//!
//! [`RoutePlanner::plan`] only computes: it reads the manifest and returns
//! an [`Itinerary`], touching nothing.  Applying the parcel mutations —
//! `Delivered`, timestamp, carrying truck — is the separate, auditable
//! [`RoutePlanner::commit`] step.

use rustc_hash::FxHashMap;

use courier_core::{ClockTime, ParcelId, TimeClock, VertexId};
use courier_fleet::LoadSpec;
use courier_graph::{AddressBook, DeliveryGraph, GraphError, shortest_paths};
use courier_store::ParcelTable;

use crate::itinerary::{Itinerary, Stop};
use crate::{RouteError, RouteResult};

/// Builds routes over one graph/address-book pair.
pub struct RoutePlanner<'a> {
    graph:     &'a DeliveryGraph,
    addresses: &'a AddressBook,
    clock:     TimeClock,
}

impl<'a> RoutePlanner<'a> {
    /// The graph and the address list must describe the same locations —
    /// one vertex per address.
    pub fn new(
        graph:     &'a DeliveryGraph,
        addresses: &'a AddressBook,
        clock:     TimeClock,
    ) -> RouteResult<Self> {
        if graph.vertex_count() != addresses.len() {
            return Err(RouteError::AddressCountMismatch {
                graph:     graph.vertex_count(),
                addresses: addresses.len(),
            });
        }
        Ok(Self { graph, addresses, clock })
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Plan the route for `spec`, departing the hub at `departure`.
    ///
    /// Returns the itinerary without mutating any parcel.  An unreachable
    /// target aborts the whole route with a planning failure rather than
    /// silently skipping the stop.
    pub fn plan(
        &self,
        spec:      &LoadSpec,
        table:     &ParcelTable,
        departure: ClockTime,
    ) -> RouteResult<Itinerary> {
        // Resolve the load's parcels to a deduplicated target vertex set.
        let mut by_vertex: FxHashMap<VertexId, Vec<ParcelId>> = FxHashMap::default();
        let mut remaining: Vec<VertexId> = Vec::new();
        for &id in &spec.parcels {
            let parcel = table.search(id).ok_or(RouteError::UnknownParcel(id))?;
            let vertex = self
                .addresses
                .vertex_of(&parcel.address)
                .ok_or_else(|| RouteError::UnknownAddress {
                    parcel:  id,
                    address: parcel.address.clone(),
                })?;
            if !remaining.contains(&vertex) {
                remaining.push(vertex);
            }
            by_vertex.entry(vertex).or_default().push(id);
        }

        let hub = self.addresses.hub();
        let mut current = hub;
        let mut cumulative = 0.0;
        let mut stops: Vec<Stop> = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let paths = shortest_paths(self.graph, current)?;

            // Cheapest remaining target; equal distances resolve to the
            // lowest vertex label.
            let mut best = remaining[0];
            let mut best_dist = self.reachable_distance(&paths, current, best)?;
            for &candidate in remaining.iter().skip(1) {
                let dist = self.reachable_distance(&paths, current, candidate)?;
                if dist < best_dist || (dist == best_dist && candidate < best) {
                    best = candidate;
                    best_dist = dist;
                }
            }

            cumulative += best_dist;
            stops.push(Stop {
                vertex:              best,
                leg_distance:        best_dist,
                cumulative_distance: cumulative,
                arrival:             self.clock.time_after(departure, cumulative),
                parcels:             by_vertex.remove(&best).unwrap_or_default(),
            });
            remaining.retain(|&v| v != best);
            current = best;
        }

        // Return leg back to the hub.
        let paths = shortest_paths(self.graph, current)?;
        let return_leg = self.reachable_distance(&paths, current, hub)?;
        let total = cumulative + return_leg;

        Ok(Itinerary {
            load:                spec.load,
            truck:               spec.truck,
            departure,
            stops,
            return_leg_distance: return_leg,
            total_distance:      total,
            return_time:         self.clock.time_after(departure, total),
        })
    }

    /// Apply a planned itinerary to the manifest: every parcel at every stop
    /// is marked delivered at that stop's arrival time, on this itinerary's
    /// truck.
    pub fn commit(&self, itinerary: &Itinerary, table: &mut ParcelTable) -> RouteResult<()> {
        for stop in &itinerary.stops {
            for &id in &stop.parcels {
                let parcel = table.search_mut(id).ok_or(RouteError::UnknownParcel(id))?;
                parcel.mark_delivered(itinerary.truck, stop.arrival);
            }
        }
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Distance to `target`, or an `Unreachable` failure — never an infinite
    /// distance leaking into the totals.
    fn reachable_distance(
        &self,
        paths:  &courier_graph::ShortestPaths,
        from:   VertexId,
        target: VertexId,
    ) -> RouteResult<f64> {
        let dist = paths.distance_to(target);
        if dist.is_infinite() {
            return Err(GraphError::Unreachable { from, to: target }.into());
        }
        Ok(dist)
    }
}
