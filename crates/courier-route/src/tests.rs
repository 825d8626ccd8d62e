//! Unit tests for courier-route.

#[cfg(test)]
mod helpers {
    use courier_core::{ClockTime, LoadId, ParcelId, TimeClock, TruckId};
    use courier_fleet::LoadSpec;
    use courier_graph::{AddressBook, DeliveryGraph};
    use courier_store::{Deadline, Parcel, ParcelTable};

    /// Four locations: hub plus three delivery addresses.
    ///
    /// Distances: d(0,1)=2, d(0,2)=5, d(0,3)=9, d(1,2)=4, d(1,3)=6, d(2,3)=3.
    pub fn four_location_world() -> (DeliveryGraph, AddressBook) {
        let rows = vec![
            vec![0.0, 2.0, 5.0, 9.0],
            vec![2.0, 0.0, 4.0, 6.0],
            vec![5.0, 4.0, 0.0, 3.0],
            vec![9.0, 6.0, 3.0, 0.0],
        ];
        let graph = DeliveryGraph::from_matrix(&rows).unwrap();
        let book = AddressBook::from_list(
            ["100 Depot Way", "12 Birch Ave", "480 Mill Rd", "77 Harbor St"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();
        (graph, book)
    }

    pub fn parcel_at(id: u32, address: &str) -> Parcel {
        Parcel::new(
            ParcelId(id),
            address.to_string(),
            "Fairview".to_string(),
            "UT".to_string(),
            "84004".to_string(),
            Deadline::Eod,
            1.0,
            String::new(),
            ClockTime::parse("08:00").unwrap(),
        )
    }

    /// Manifest with one parcel per non-hub address plus a second parcel
    /// sharing the Harbor St address.
    pub fn manifest() -> ParcelTable {
        let mut table = ParcelTable::new();
        table.insert(parcel_at(1, "12 Birch Ave"));
        table.insert(parcel_at(2, "480 Mill Rd"));
        table.insert(parcel_at(3, "77 Harbor St"));
        table.insert(parcel_at(4, "77 Harbor St"));
        table.insert(parcel_at(5, "12 Birch Ave"));
        table
    }

    pub fn load(parcels: &[u32]) -> LoadSpec {
        LoadSpec {
            load:  LoadId(1),
            truck: TruckId(1),
            parcels: parcels.iter().map(|&p| ParcelId(p)).collect(),
            departure_floor: None,
        }
    }

    pub fn clock() -> TimeClock {
        TimeClock::default()
    }
}

// ── Greedy route construction ─────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use courier_core::{ParcelId, VertexId};
    use courier_graph::DeliveryGraph;
    use courier_graph::AddressBook;

    use crate::{RouteError, RoutePlanner};
    use super::helpers::{clock, four_location_world, load, manifest};

    #[test]
    fn visits_nearest_remaining_stop_each_round() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner
            .plan(&load(&[1, 2, 3]), &table, clock().shift_start)
            .unwrap();

        // Greedy from the hub: 1 (2), then 2 (4 from vertex 1), then 3
        // (3 from vertex 2).
        let visited: Vec<u32> = itinerary.stops.iter().map(|s| s.vertex.0).collect();
        assert_eq!(visited, vec![1, 2, 3]);

        let cumulative: Vec<f64> = itinerary
            .stops
            .iter()
            .map(|s| s.cumulative_distance)
            .collect();
        assert_eq!(cumulative, vec![2.0, 6.0, 9.0]);

        // Cheapest way home from vertex 3 is 8 (3-1-0 or 3-2-0), beating the
        // direct 9 edge — the return leg is engine-solved, not read off the
        // matrix.
        assert_eq!(itinerary.return_leg_distance, 8.0);
        assert_eq!(itinerary.total_distance, 17.0);
    }

    #[test]
    fn total_is_sum_of_hops_plus_return() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner
            .plan(&load(&[1, 2, 3]), &table, clock().shift_start)
            .unwrap();

        let hop_sum: f64 = itinerary.stops.iter().map(|s| s.leg_distance).sum();
        assert_eq!(itinerary.total_distance, hop_sum + itinerary.return_leg_distance);
    }

    #[test]
    fn arrival_times_are_monotonic_and_truncated() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner
            .plan(&load(&[1, 2, 3]), &table, clock().shift_start)
            .unwrap();

        // At 18 units/hour: 2 → 6 min, 6 → 20 min, 9 → 30 min.
        let arrivals: Vec<String> = itinerary.stops.iter().map(|s| s.arrival.to_string()).collect();
        assert_eq!(arrivals, vec!["08:06", "08:20", "08:30"]);

        for pair in itinerary.stops.windows(2) {
            assert!(pair[0].arrival <= pair[1].arrival);
        }

        // Total 17 → 56 min (56.67 truncated).
        assert_eq!(itinerary.return_time.to_string(), "08:56");
    }

    #[test]
    fn equal_distance_tie_goes_to_lowest_label() {
        // Vertices 1 and 2 both sit 4.0 from the hub.
        let rows = vec![
            vec![0.0, 4.0, 4.0],
            vec![4.0, 0.0, 1.0],
            vec![4.0, 1.0, 0.0],
        ];
        let graph = DeliveryGraph::from_matrix(&rows).unwrap();
        let book = AddressBook::from_list(
            ["100 Depot Way", "12 Birch Ave", "480 Mill Rd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();

        let mut table = super::helpers::manifest();
        table.remove(ParcelId(3));
        table.remove(ParcelId(4));

        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();
        let itinerary = planner
            .plan(&load(&[2, 1]), &table, clock().shift_start)
            .unwrap();

        // Load lists parcel 2 (Mill Rd, vertex 2) first, but vertex 1 wins
        // the 4.0-distance tie on label.
        let visited: Vec<u32> = itinerary.stops.iter().map(|s| s.vertex.0).collect();
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn parcels_sharing_an_address_share_one_stop() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner
            .plan(&load(&[3, 4]), &table, clock().shift_start)
            .unwrap();

        assert_eq!(itinerary.stops.len(), 1);
        assert_eq!(itinerary.stops[0].vertex, VertexId(3));
        assert_eq!(
            itinerary.stops[0].parcels,
            vec![ParcelId(3), ParcelId(4)]
        );
        assert_eq!(itinerary.parcel_count(), 2);
    }

    #[test]
    fn empty_load_stays_at_the_hub() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner.plan(&load(&[]), &table, clock().shift_start).unwrap();
        assert!(itinerary.stops.is_empty());
        assert_eq!(itinerary.total_distance, 0.0);
        assert_eq!(itinerary.return_time, clock().shift_start);
    }

    #[test]
    fn unreachable_target_aborts_the_route() {
        use courier_graph::GraphError;

        // Vertex 2 is disconnected; the address count still matches.
        let mut graph = DeliveryGraph::new();
        for label in 0..3 {
            graph.add_vertex(VertexId(label)).unwrap();
        }
        graph.add_undirected_edge(VertexId(0), VertexId(1), 1.0).unwrap();
        let book = AddressBook::from_list(
            ["100 Depot Way", "12 Birch Ave", "480 Mill Rd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();

        let mut table = super::helpers::manifest();
        table.remove(ParcelId(3));
        table.remove(ParcelId(4));

        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();
        let err = planner
            .plan(&load(&[1, 2]), &table, clock().shift_start)
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::Graph(GraphError::Unreachable { to: VertexId(2), .. })
        ));
    }

    #[test]
    fn unknown_address_is_a_configuration_error() {
        let (graph, book) = four_location_world();
        let mut table = manifest();
        table.insert(super::helpers::parcel_at(9, "1 Nowhere Pl"));

        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();
        let err = planner
            .plan(&load(&[9]), &table, clock().shift_start)
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownAddress { parcel: ParcelId(9), .. }));
    }

    #[test]
    fn mismatched_address_book_rejected() {
        let (graph, _) = four_location_world();
        let short_book = AddressBook::from_list(vec!["100 Depot Way".to_string()]).unwrap();
        assert!(matches!(
            RoutePlanner::new(&graph, &short_book, clock()),
            Err(RouteError::AddressCountMismatch { graph: 4, addresses: 1 })
        ));
    }
}

// ── Commit step ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod commit {
    use courier_core::{ParcelId, TruckId};
    use courier_store::DeliveryStatus;

    use crate::RoutePlanner;
    use super::helpers::{clock, four_location_world, load, manifest};

    #[test]
    fn plan_alone_mutates_nothing() {
        let (graph, book) = four_location_world();
        let table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        planner.plan(&load(&[1, 2, 3]), &table, clock().shift_start).unwrap();

        for id in table.ids_sorted() {
            assert_eq!(table.search(id).unwrap().status, DeliveryStatus::AtHub);
        }
    }

    #[test]
    fn commit_applies_stop_arrivals() {
        let (graph, book) = four_location_world();
        let mut table = manifest();
        let planner = RoutePlanner::new(&graph, &book, clock()).unwrap();

        let itinerary = planner
            .plan(&load(&[1, 2, 3]), &table, clock().shift_start)
            .unwrap();
        planner.commit(&itinerary, &mut table).unwrap();

        let p1 = table.search(ParcelId(1)).unwrap();
        assert_eq!(p1.status, DeliveryStatus::Delivered);
        assert_eq!(p1.delivered_at.to_string(), "08:06");
        assert_eq!(p1.assigned_truck, Some(TruckId(1)));

        let p3 = table.search(ParcelId(3)).unwrap();
        assert_eq!(p3.delivered_at.to_string(), "08:30");

        // Parcels not on the load stay untouched.
        assert_eq!(table.search(ParcelId(5)).unwrap().status, DeliveryStatus::AtHub);
    }
}
