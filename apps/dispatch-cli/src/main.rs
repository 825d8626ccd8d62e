//! dispatch-cli — interactive console for the courier dispatch planner.
//!
//! Loads the four input CSVs from a data directory (first CLI argument,
//! default `apps/dispatch-cli/data`), routes the whole fleet once, then
//! answers point-in-time questions against the resulting snapshot until the
//! operator quits.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use courier_core::{ClockTime, ParcelId, TimeClock, TruckId};
use courier_dispatch::{Dispatcher, StatusQuery, StatusReport};
use courier_fleet::load_fleet;
use courier_graph::{AddressBook, load_addresses, load_matrix};
use courier_store::{DeliveryStatus, ParcelTable, load_parcels};

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let data_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("apps/dispatch-cli/data"));

    println!("=== courier dispatch ===");
    println!("Data directory: {}", data_dir.display());
    println!();

    let clock = TimeClock::default();

    // 1. Load inputs.
    let mut table = load_parcels(&data_dir.join("packages.csv"), clock.shift_start)
        .context("loading packages.csv")?;
    let addresses = AddressBook::from_list(
        load_addresses(&data_dir.join("addresses.csv")).context("loading addresses.csv")?,
    )?;
    let graph = load_matrix(&data_dir.join("distances.csv")).context("loading distances.csv")?;
    let fleet = load_fleet(&data_dir.join("loads.csv")).context("loading loads.csv")?;
    println!(
        "Loaded {} parcels, {} locations, {} trucks, {} loads",
        table.len(),
        addresses.len(),
        fleet.trucks().len(),
        fleet.loads().len()
    );

    // 2. Route the whole fleet once.
    let snapshot = Dispatcher::new(&graph, &addresses, &fleet, clock)
        .run(&mut table)
        .context("dispatching the fleet")?;
    println!("Dispatched {} loads.", snapshot.records().len());
    println!();

    // 3. Answer queries until the operator quits.
    let query = StatusQuery::new(&snapshot, &table);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("  1  status of all parcels at a time");
        println!("  2  status of one parcel at a time");
        println!("  3  truck mileage at a time");
        println!("  4  final summary");
        println!("  q  quit");

        let Some(choice) = prompt(&mut lines, "Selection: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => all_parcels(&query, &table, &mut lines)?,
            "2" => one_parcel(&query, &table, &mut lines)?,
            "3" => truck_mileage(&query, &mut lines)?,
            "4" => final_summary(&query),
            "q" | "Q" => break,
            other => println!("Invalid selection {other:?}, choose again.\n"),
        }
    }

    Ok(())
}

// ── Menu actions ──────────────────────────────────────────────────────────────

fn all_parcels<L: Iterator<Item = std::io::Result<String>>>(
    query: &StatusQuery<'_>,
    table: &ParcelTable,
    lines: &mut L,
) -> Result<()> {
    let Some(at) = read_time(lines)? else {
        return Ok(());
    };

    match query.all_statuses(at) {
        Ok(reports) => {
            println!("\n----- status of all parcels at {at} -----");
            for report in reports {
                print_report(table, &report);
            }
            println!();
        }
        Err(e) => println!("{e}\n"),
    }
    Ok(())
}

fn one_parcel<L: Iterator<Item = std::io::Result<String>>>(
    query: &StatusQuery<'_>,
    table: &ParcelTable,
    lines: &mut L,
) -> Result<()> {
    let Some(at) = read_time(lines)? else {
        return Ok(());
    };
    let Some(raw) = prompt(lines, "Parcel id: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u32>() else {
        println!("{raw:?} is not a parcel id.\n");
        return Ok(());
    };

    match query.parcel_status(at, ParcelId(id)) {
        Ok(report) => {
            println!("\n----- status of parcel {id} at {at} -----");
            print_report(table, &report);
            println!();
        }
        Err(e) => println!("{e}\n"),
    }
    Ok(())
}

fn truck_mileage<L: Iterator<Item = std::io::Result<String>>>(
    query: &StatusQuery<'_>,
    lines: &mut L,
) -> Result<()> {
    let Some(at) = read_time(lines)? else {
        return Ok(());
    };
    let Some(raw) = prompt(lines, "Truck id: ")? else {
        return Ok(());
    };
    let Ok(id) = raw.parse::<u16>() else {
        println!("{raw:?} is not a truck id.\n");
        return Ok(());
    };

    match query.truck_mileage_at(at, TruckId(id)) {
        Ok(distance) => println!("\nTruck {id} at {at}: {distance:.2} miles travelled\n"),
        Err(e) => println!("{e}\n"),
    }
    Ok(())
}

fn final_summary(query: &StatusQuery<'_>) {
    let summary = query.final_summary();
    println!("\n===== all deliveries completed in {:.2} miles =====", summary.grand_total_distance);
    for truck in &summary.trucks {
        println!(
            "Truck {:<3} {:>8.2} miles  |  departed {}  |  back at the hub at {}",
            truck.truck.0, truck.total_distance, truck.departed_at, truck.returned_at
        );
    }
    println!();
}

// ── Console helpers ───────────────────────────────────────────────────────────

/// Print a prompt and read one trimmed line.  `None` on end of input.
fn prompt<L: Iterator<Item = std::io::Result<String>>>(
    lines: &mut L,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    match lines.next() {
        None => Ok(None),
        Some(line) => Ok(Some(line?.trim().to_string())),
    }
}

/// Keep asking until the operator types a well-formed `HH:MM` time.
fn read_time<L: Iterator<Item = std::io::Result<String>>>(
    lines: &mut L,
) -> Result<Option<ClockTime>> {
    loop {
        let Some(raw) = prompt(lines, "Time (HH:MM): ")? else {
            return Ok(None);
        };
        match ClockTime::parse(&raw) {
            Ok(t) => return Ok(Some(t)),
            Err(e) => println!("{e}"),
        }
    }
}

fn print_report(table: &ParcelTable, report: &StatusReport) {
    // The parcel is known to exist — the report was built from the table.
    let label = table
        .search(report.parcel)
        .map(|p| p.to_string())
        .unwrap_or_else(|| report.parcel.to_string());

    match report.status {
        DeliveryStatus::AtHub => {
            println!("{label} | at hub | scheduled departure {}", report.time);
        }
        DeliveryStatus::EnRoute => {
            println!("{label} | en route | est. delivery {}", report.time);
        }
        DeliveryStatus::Delivered => {
            println!("{label} | delivered | {}", report.time);
        }
    }
}
