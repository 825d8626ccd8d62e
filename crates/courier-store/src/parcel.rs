//! The parcel record and its lifecycle types.
//!
//! A `Parcel` is created once at load time with `status = AtHub` and a
//! delivery timestamp equal to the shift start.  It is mutated exactly once
//! per simulation run — by the route commit step, when the stop serving its
//! address is visited — and never destroyed.  `EnRoute` is the transitional
//! state reported by the status classifier for query times between a load's
//! departure and the parcel's delivery; the stored status jumps straight to
//! the terminal `Delivered`.

use std::fmt;

use courier_core::{ClockTime, CoreResult, ParcelId, TruckId};

// ── DeliveryStatus ────────────────────────────────────────────────────────────

/// Where a parcel is in its delivery lifecycle.  Only ever advances.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum DeliveryStatus {
    /// Waiting at the hub (initial state).
    #[default]
    AtHub,
    /// On a truck that has departed.
    EnRoute,
    /// Dropped off at its address (terminal state).
    Delivered,
}

impl DeliveryStatus {
    /// Human-readable label for console tables.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::AtHub     => "at hub",
            DeliveryStatus::EnRoute   => "en route",
            DeliveryStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Deadline ──────────────────────────────────────────────────────────────────

/// The latest acceptable delivery time for a parcel.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Deadline {
    /// No fixed time — any point before end of day.
    Eod,
    /// Must arrive by the given clock time.
    By(ClockTime),
}

impl Deadline {
    /// Parse a deadline field: the literal `EOD` (case-insensitive) or an
    /// `HH:MM` time.
    pub fn parse(s: &str) -> CoreResult<Deadline> {
        if s.trim().eq_ignore_ascii_case("eod") {
            Ok(Deadline::Eod)
        } else {
            ClockTime::parse(s).map(Deadline::By)
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::Eod   => f.write_str("EOD"),
            Deadline::By(t) => write!(f, "{t}"),
        }
    }
}

// ── Parcel ────────────────────────────────────────────────────────────────────

/// One parcel: immutable shipping-label identity plus the mutable delivery
/// state the planner fills in.
#[derive(Clone, Debug)]
pub struct Parcel {
    // ── Identity (never mutated after load) ───────────────────────────────
    pub id:       ParcelId,
    pub address:  String,
    pub city:     String,
    pub state:    String,
    pub zip:      String,
    pub deadline: Deadline,
    pub mass_kg:  f64,
    pub note:     String,

    // ── Delivery state (written once, by the route commit step) ───────────
    /// Truck that carried the parcel, set when its stop is committed.
    pub assigned_truck: Option<TruckId>,
    /// Lifecycle state; advances `AtHub → Delivered` on commit.
    pub status: DeliveryStatus,
    /// Delivery timestamp.  Shift start until the parcel is delivered.
    pub delivered_at: ClockTime,
}

impl Parcel {
    /// Create a parcel at the hub, timestamped with the shift start.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id:          ParcelId,
        address:     String,
        city:        String,
        state:       String,
        zip:         String,
        deadline:    Deadline,
        mass_kg:     f64,
        note:        String,
        shift_start: ClockTime,
    ) -> Self {
        Self {
            id,
            address,
            city,
            state,
            zip,
            deadline,
            mass_kg,
            note,
            assigned_truck: None,
            status:         DeliveryStatus::AtHub,
            delivered_at:   shift_start,
        }
    }

    /// Record the delivery.  Status only ever advances — committing the same
    /// parcel twice within one run is a planner bug.
    pub fn mark_delivered(&mut self, truck: TruckId, at: ClockTime) {
        debug_assert!(
            self.status != DeliveryStatus::Delivered,
            "parcel {} delivered twice",
            self.id
        );
        self.assigned_truck = Some(truck);
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = at;
    }
}

impl fmt::Display for Parcel {
    /// One-line label form used by console tables.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | deadline {} | {} kg",
            self.id.0, self.address, self.city, self.state, self.zip, self.deadline, self.mass_kg
        )
    }
}
