//! Parcel manifest CSV loader.
//!
//! # CSV format
//!
//! One row per parcel, with a header row:
//!
//! ```csv
//! id,address,city,state,zip,deadline,mass_kg,note
//! 1,12 Birch Ave,Fairview,UT,84004,10:30,2.0,
//! 2,480 Mill Rd,Fairview,UT,84010,EOD,11.5,second-day air
//! ```
//!
//! **`deadline`** is either the literal `EOD` or an `HH:MM` time.  A
//! duplicate parcel id is fatal — the table must be a unique-key system of
//! record before any planning runs.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use courier_core::{ClockTime, ParcelId};

use crate::parcel::{Deadline, Parcel};
use crate::table::ParcelTable;
use crate::{StoreError, StoreResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParcelRecord {
    id:       u32,
    address:  String,
    city:     String,
    state:    String,
    zip:      String,
    deadline: String,
    mass_kg:  f64,
    note:     Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the parcel manifest from a CSV file into a fresh [`ParcelTable`].
///
/// The table's bucket count is sized to the row count, so lookups stay O(1)
/// for the dataset actually loaded.
pub fn load_parcels(path: &Path, shift_start: ClockTime) -> StoreResult<ParcelTable> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_parcels_reader(file, shift_start)
}

/// Like [`load_parcels`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_parcels_reader<R: Read>(
    reader: R,
    shift_start: ClockTime,
) -> StoreResult<ParcelTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Buffer rows first so the table can be sized to the dataset.
    let mut rows: Vec<ParcelRecord> = Vec::new();
    for result in csv_reader.deserialize::<ParcelRecord>() {
        rows.push(result.map_err(|e| StoreError::Parse(e.to_string()))?);
    }

    let mut table = ParcelTable::with_buckets(rows.len().max(1));
    for row in rows {
        let id = ParcelId(row.id);
        if table.search(id).is_some() {
            return Err(StoreError::DuplicateParcel(id));
        }

        let deadline = Deadline::parse(&row.deadline)
            .map_err(|e| StoreError::Parse(format!("parcel {}: {e}", row.id)))?;

        table.insert(Parcel::new(
            id,
            row.address,
            row.city,
            row.state,
            row.zip,
            deadline,
            row.mass_kg,
            row.note.unwrap_or_default(),
            shift_start,
        ));
    }

    Ok(table)
}
