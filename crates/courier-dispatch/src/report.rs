//! Report types consumed by the console layer.

use courier_core::{ClockTime, ParcelId, TruckId};
use courier_store::DeliveryStatus;

/// Point-in-time classification of one parcel.
///
/// The meaning of `time` follows the status:
///
/// | `status`    | `time`                         |
/// |-------------|--------------------------------|
/// | `AtHub`     | scheduled departure (the gate) |
/// | `EnRoute`   | estimated delivery time        |
/// | `Delivered` | actual delivery time           |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub parcel: ParcelId,
    pub status: DeliveryStatus,
    pub time:   ClockTime,
}

/// One truck's day in summary.
#[derive(Clone, Debug)]
pub struct TruckSummary {
    pub truck: TruckId,
    /// First departure from the hub.
    pub departed_at: ClockTime,
    /// Final return to the hub after the last load.
    pub returned_at: ClockTime,
    /// Distance across all of the truck's loads.
    pub total_distance: f64,
}

/// End-of-run totals across the whole fleet.
#[derive(Clone, Debug)]
pub struct FinalSummary {
    /// Per-truck summaries, ascending truck id.
    pub trucks: Vec<TruckSummary>,
    pub grand_total_distance: f64,
}
