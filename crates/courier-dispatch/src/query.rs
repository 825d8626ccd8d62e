//! Point-in-time status classification over a finished dispatch.
//!
//! Classification is pure: the snapshot and the committed manifest are read
//! only, so querying the same parcel at the same time twice always yields
//! the same report.

use courier_core::{ClockTime, ParcelId, TruckId};
use courier_store::{DeliveryStatus, ParcelTable};

use crate::dispatcher::DispatchSnapshot;
use crate::report::{FinalSummary, StatusReport, TruckSummary};
use crate::{DispatchError, DispatchResult};

/// Read-only view answering "where was everything at time T?".
pub struct StatusQuery<'a> {
    snapshot: &'a DispatchSnapshot,
    table:    &'a ParcelTable,
}

impl<'a> StatusQuery<'a> {
    pub fn new(snapshot: &'a DispatchSnapshot, table: &'a ParcelTable) -> Self {
        Self { snapshot, table }
    }

    // ── Parcel queries ────────────────────────────────────────────────────

    /// Status of one parcel at `at`.
    ///
    /// Classification, in order: not yet departed (the load's effective
    /// departure gates it), en route (delivered later than `at`), delivered.
    pub fn parcel_status(&self, at: ClockTime, parcel: ParcelId) -> DispatchResult<StatusReport> {
        self.check_business_hours(at)?;

        let record = self
            .snapshot
            .record_for_parcel(parcel)
            .ok_or(DispatchError::ParcelNotFound(parcel))?;
        let found = self
            .table
            .search(parcel)
            .ok_or(DispatchError::ParcelNotFound(parcel))?;

        let report = if at < record.departure {
            StatusReport {
                parcel,
                status: DeliveryStatus::AtHub,
                time:   record.departure,
            }
        } else if found.delivered_at > at {
            StatusReport {
                parcel,
                status: DeliveryStatus::EnRoute,
                time:   found.delivered_at,
            }
        } else {
            StatusReport {
                parcel,
                status: found.status,
                time:   found.delivered_at,
            }
        };
        Ok(report)
    }

    /// Status of every parcel at `at`, ascending parcel id.
    pub fn all_statuses(&self, at: ClockTime) -> DispatchResult<Vec<StatusReport>> {
        self.check_business_hours(at)?;
        self.table
            .ids_sorted()
            .into_iter()
            .map(|id| self.parcel_status(at, id))
            .collect()
    }

    // ── Truck queries ─────────────────────────────────────────────────────

    /// Distance a truck had covered by `at`, summed piecewise over its
    /// loads: nothing before a load departs, speed × elapsed while it is
    /// out, the full route total once it has returned.
    pub fn truck_mileage_at(&self, at: ClockTime, truck: TruckId) -> DispatchResult<f64> {
        self.check_business_hours(at)?;

        let mut seen = false;
        let mut total = 0.0;
        for record in self.snapshot.truck_records(truck) {
            seen = true;
            if at <= record.departure {
                continue;
            }
            let elapsed = f64::from(at.since(record.departure));
            let travelled = self.snapshot.clock().distance_in(elapsed);
            total += travelled.min(record.total_distance());
        }

        if !seen {
            return Err(DispatchError::UnknownTruck(truck));
        }
        Ok(total)
    }

    // ── Summaries ─────────────────────────────────────────────────────────

    /// Per-truck totals and the fleet grand total.
    pub fn final_summary(&self) -> FinalSummary {
        let trucks = self
            .snapshot
            .trucks()
            .into_iter()
            .filter_map(|truck| {
                let records: Vec<_> = self.snapshot.truck_records(truck).collect();
                let first = records.first()?;
                let last = records.last()?;
                Some(TruckSummary {
                    truck,
                    departed_at:    first.departure,
                    returned_at:    last.return_time(),
                    total_distance: records.iter().map(|r| r.total_distance()).sum(),
                })
            })
            .collect();

        FinalSummary {
            trucks,
            grand_total_distance: self.snapshot.grand_total_distance(),
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Queries before the shift start are an input-validation failure, not a
    /// status result.
    fn check_business_hours(&self, at: ClockTime) -> DispatchResult<()> {
        let opening = self.snapshot.clock().shift_start;
        if at < opening {
            return Err(DispatchError::BeforeOpening { query: at, opening });
        }
        Ok(())
    }
}
