//! End-to-end tests for route queries.

use super::*;
use crate::domain::{
    Coordinates, LineId, LineNetwork, LineNetworkBuilder, Route, Station, StationId,
};
use crate::network::Graph;
use crate::stations::StationTable;
use std::collections::BTreeSet;

fn id(s: &str) -> StationId {
    StationId::parse(s).unwrap()
}

/// Every station on any branch, in first-appearance order, plus `extra`
/// stations that sit on no line.
fn table_for(network: &LineNetwork, extra: &[&str]) -> StationTable {
    let mut seen: Vec<StationId> = Vec::new();
    for line in network.lines() {
        for branch in &line.branches {
            for station in branch.stations() {
                if !seen.contains(station) {
                    seen.push(station.clone());
                }
            }
        }
    }
    seen.extend(extra.iter().map(|s| id(s)));

    let records = seen
        .into_iter()
        .map(|sid| {
            let lines: Vec<LineId> = network
                .lines()
                .filter(|l| l.branches.iter().any(|b| b.stations().contains(&sid)))
                .map(|l| l.id.clone())
                .collect();
            let name = sid.as_str().replace('-', " ");
            Station::new(sid, name, Coordinates::new(51.5, -0.12).unwrap()).with_lines(lines)
        })
        .collect();
    StationTable::new(records).unwrap()
}

fn router(network: &LineNetwork) -> Router {
    Router::new(network, table_for(network, &[]), CostConfig::default()).unwrap()
}

fn path_of(route: &Route) -> Vec<&str> {
    route.station_path().into_iter().map(StationId::as_str).collect()
}

fn lines_of(route: &Route) -> Vec<&str> {
    route.lines().map(LineId::as_str).collect()
}

/// A small slice of central London.
fn london() -> LineNetwork {
    LineNetworkBuilder::new()
        .branch(
            "central",
            &[
                "marble-arch",
                "bond-street",
                "oxford-circus",
                "tottenham-court-road",
                "holborn",
                "bank",
                "liverpool-street",
            ],
        )
        .branch(
            "jubilee",
            &["bond-street", "green-park", "westminster", "waterloo", "london-bridge"],
        )
        .branch(
            "northern",
            &[
                "euston",
                "kings-cross",
                "angel",
                "old-street",
                "moorgate",
                "bank",
                "london-bridge",
            ],
        )
        .branch(
            "victoria",
            &[
                "victoria",
                "green-park",
                "oxford-circus",
                "warren-street",
                "euston",
                "kings-cross",
            ],
        )
        .color("central", "#DC241F")
        .color("jubilee", "#A0A5A9")
        .color("northern", "#000000")
        .color("victoria", "#0098D4")
        .name("central", "Central")
        .build()
}

#[test]
fn two_line_network_changes_once() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C"])
        .branch("L2", &["C", "D", "E"])
        .build();
    let router = router(&network);

    let route = router.find_route(&id("A"), &id("E")).unwrap();

    assert_eq!(lines_of(&route), vec!["L1", "L2"]);
    assert_eq!(path_of(&route), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(route.total_stations, 5);
    assert_eq!(route.changes, 1);
    assert_eq!(route.estimated_minutes, 11);
    assert_eq!(route.change_stations(), vec![&id("C")]);
}

#[test]
fn parallel_lines_ride_without_change() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C"])
        .branch("L2", &["A", "B", "C"])
        .build();
    let router = router(&network);

    let route = router.find_route(&id("A"), &id("C")).unwrap();

    assert_eq!(route.segments.len(), 1);
    assert_eq!(lines_of(&route), vec!["L1"]);
    assert_eq!(route.total_stations, 3);
    assert_eq!(route.changes, 0);
    assert_eq!(route.estimated_minutes, 4);
}

#[test]
fn same_station_is_empty_route() {
    let router = router(&london());
    let bank = id("bank");

    let route = router.find_route(&bank, &bank).unwrap();

    assert!(route.is_empty());
    assert_eq!(route.total_stations, 0);
    assert_eq!(route.changes, 0);
    assert_eq!(route.estimated_minutes, 0);
    assert_eq!(route.origin, bank);
    assert_eq!(route.destination, bank);
}

#[test]
fn same_unknown_station_short_circuits() {
    let router = router(&london());
    let nowhere = id("nowhere");

    // The plain query does not check existence for a reflexive route.
    assert!(router.find_route(&nowhere, &nowhere).unwrap().is_empty());
    assert_eq!(
        router.try_find_route(&nowhere, &nowhere).unwrap_err(),
        RouteError::UnknownStation(nowhere)
    );
}

#[test]
fn unknown_station_has_no_route() {
    let router = router(&london());

    assert!(router.find_route(&id("bank"), &id("nowhere")).is_none());
    assert!(router.find_route(&id("nowhere"), &id("bank")).is_none());
    assert_eq!(
        router.try_find_route(&id("nowhere"), &id("bank")).unwrap_err(),
        RouteError::UnknownStation(id("nowhere"))
    );
}

#[test]
fn disconnected_components_have_no_route() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B"])
        .branch("L2", &["C", "D"])
        .build();
    let router = router(&network);

    assert!(router.find_route(&id("A"), &id("D")).is_none());
    assert_eq!(
        router.try_find_route(&id("A"), &id("D")).unwrap_err(),
        RouteError::NoRoute {
            origin: id("A"),
            destination: id("D")
        }
    );
}

#[test]
fn station_on_no_line_is_known_but_unreachable() {
    let network = london();
    let table = table_for(&network, &["aldwych"]);
    let router = Router::new(&network, table, CostConfig::default()).unwrap();

    assert!(router.station("aldwych").is_some());
    assert!(router.find_route(&id("holborn"), &id("aldwych")).is_none());
    assert!(matches!(
        router.try_find_route(&id("holborn"), &id("aldwych")),
        Err(RouteError::NoRoute { .. })
    ));
}

#[test]
fn change_penalty_outweighs_extra_hops() {
    // Two hops with a change cost 1 + 1 + 3; four hops on one line cost 4.
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C", "D", "E"])
        .branch("L2", &["A", "F"])
        .branch("L3", &["F", "E"])
        .build();
    let router = router(&network);

    let route = router.find_route(&id("A"), &id("E")).unwrap();
    assert_eq!(path_of(&route), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(route.changes, 0);
    assert_eq!(route.estimated_minutes, 8);

    let outcome =
        shortest_path(router.graph(), &id("A"), &id("E"), &CostConfig::default()).unwrap();
    assert_eq!(outcome.cost, 4);
}

#[test]
fn without_penalty_fewest_hops_wins() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C", "D", "E"])
        .branch("L2", &["A", "F"])
        .branch("L3", &["F", "E"])
        .build();
    let router = Router::new(
        &network,
        table_for(&network, &[]),
        CostConfig::new(1, 0, 2, 3),
    )
    .unwrap();

    let route = router.find_route(&id("A"), &id("E")).unwrap();
    assert_eq!(path_of(&route), vec!["A", "F", "E"]);
    assert_eq!(lines_of(&route), vec!["L2", "L3"]);
    assert_eq!(route.changes, 1);
    assert_eq!(route.estimated_minutes, 7);
}

#[test]
fn penalty_charged_on_line_change() {
    // B-C carries both lines; whichever line covers it, one change is needed.
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C"])
        .branch("L2", &["B", "C", "D"])
        .build();
    let router = router(&network);

    let outcome = shortest_path(router.graph(), &id("A"), &id("D"), router.config()).unwrap();
    assert_eq!(outcome.cost, 3 + 3);
    assert_eq!(outcome.changes, 1);

    let route = router.find_route(&id("A"), &id("D")).unwrap();
    assert_eq!(lines_of(&route), vec!["L1", "L2"]);
    assert_eq!(route.segments[0].station_ids, vec![id("A"), id("B"), id("C")]);
    assert_eq!(route.changes, 1);
    assert_eq!(route.estimated_minutes, 9);
}

#[test]
fn longer_ride_without_change_wins_both_ways() {
    // S2-S4 is one hop on L0, but S4-S1 is only on L1. Riding L1 the whole
    // way costs 3; taking the L0 shortcut costs 1 + 1 + 3.
    let network = LineNetworkBuilder::new()
        .branch("L0", &["S2", "S4"])
        .branch("L1", &["S2", "S0"])
        .branch("L1", &["S0", "S4", "S1"])
        .build();
    let router = router(&network);

    let there = router.find_route(&id("S2"), &id("S1")).unwrap();
    let back = router.find_route(&id("S1"), &id("S2")).unwrap();

    assert_eq!(path_of(&there), vec!["S2", "S0", "S4", "S1"]);
    assert_eq!(lines_of(&there), vec!["L1"]);
    assert_eq!(path_of(&back), vec!["S1", "S4", "S0", "S2"]);
    assert_eq!(lines_of(&back), vec!["L1"]);
    for route in [&there, &back] {
        assert_eq!(route.total_stations, 4);
        assert_eq!(route.changes, 0);
        assert_eq!(route.estimated_minutes, 6);
    }
}

#[test]
fn search_stops_at_destination() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "C", "D", "E", "F", "G", "H"])
        .build();
    let graph = Graph::build(&network).unwrap();

    let outcome = shortest_path(&graph, &id("A"), &id("B"), &CostConfig::default()).unwrap();

    assert_eq!(outcome.path, vec![id("A"), id("B")]);
    assert_eq!(outcome.cost, 1);
    assert_eq!(outcome.settled, 2);
}

#[test]
fn equal_cost_tie_is_stable() {
    // A-B-D and A-C-D cost the same; B is pushed first.
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B", "D"])
        .branch("L2", &["A", "C", "D"])
        .build();
    let router = router(&network);

    let first = router.find_route(&id("A"), &id("D")).unwrap();
    assert_eq!(path_of(&first), vec!["A", "B", "D"]);
    assert_eq!(lines_of(&first), vec!["L1"]);

    for _ in 0..10 {
        assert_eq!(router.find_route(&id("A"), &id("D")).unwrap(), first);
    }
}

#[test]
fn london_cross_town() {
    let router = router(&london());

    let route = router
        .find_route(&id("marble-arch"), &id("kings-cross"))
        .unwrap();

    assert_eq!(lines_of(&route), vec!["central", "victoria"]);
    assert_eq!(
        path_of(&route),
        vec![
            "marble-arch",
            "bond-street",
            "oxford-circus",
            "warren-street",
            "euston",
            "kings-cross"
        ]
    );
    assert_eq!(route.segments[0].color, "#DC241F");
    assert_eq!(route.segments[1].color, "#0098D4");
    assert_eq!(route.segments[1].stations[0].name, "oxford circus");
    assert_eq!(route.total_stations, 6);
    assert_eq!(route.changes, 1);
    assert_eq!(route.estimated_minutes, 13);
    assert_eq!(route.estimated_duration(), chrono::Duration::minutes(13));
}

#[test]
fn london_reverse_matches_forward() {
    let router = router(&london());
    let pairs = [
        ("marble-arch", "kings-cross"),
        ("victoria", "liverpool-street"),
        ("waterloo", "angel"),
        ("warren-street", "moorgate"),
    ];

    for (a, b) in pairs {
        let there = router.find_route(&id(a), &id(b)).unwrap();
        let back = router.find_route(&id(b), &id(a)).unwrap();
        assert_eq!(there.total_stations, back.total_stations, "{a} <-> {b}");
        assert_eq!(there.changes, back.changes, "{a} <-> {b}");
    }
}

#[test]
fn shared_track_rides_the_through_line() {
    // Kings Cross to Euston is on both the Northern and Victoria lines; only
    // the Victoria continues to Warren Street.
    let router = router(&london());

    let route = router
        .find_route(&id("kings-cross"), &id("marble-arch"))
        .unwrap();

    assert_eq!(lines_of(&route), vec!["victoria", "central"]);
    assert_eq!(route.changes, 1);
}

#[test]
fn london_interchanges() {
    let router = router(&london());

    let result = router.interchanges();
    let stations: BTreeSet<&str> = result.keys().map(StationId::as_str).collect();
    assert_eq!(
        stations,
        BTreeSet::from([
            "bank",
            "bond-street",
            "euston",
            "green-park",
            "kings-cross",
            "london-bridge",
            "oxford-circus",
        ])
    );

    let lines: BTreeSet<&str> = result[&id("green-park")]
        .iter()
        .map(LineId::as_str)
        .collect();
    assert_eq!(lines, BTreeSet::from(["jubilee", "victoria"]));
}

#[test]
fn station_lookups() {
    let router = router(&london());

    assert_eq!(router.station("waterloo").unwrap().name, "waterloo");
    assert!(router.station("paddington").is_none());

    let found: Vec<&str> = router
        .search_stations("street", 10)
        .into_iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(
        found,
        vec!["bond-street", "liverpool-street", "old-street", "warren-street"]
    );
}

#[test]
fn branch_station_without_record_is_rejected() {
    let network = LineNetworkBuilder::new()
        .branch("L1", &["A", "B"])
        .build();
    let table = StationTable::new(vec![Station::new(
        id("A"),
        "A",
        Coordinates::new(51.5, -0.1).unwrap(),
    )])
    .unwrap();

    let err = Router::new(&network, table, CostConfig::default()).unwrap_err();
    assert_eq!(
        err,
        crate::network::NetworkError::MissingStation {
            station: id("B"),
            line: LineId::parse("L1").unwrap()
        }
    );
}

#[test]
fn router_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router>();

    let router = router(&london());
    let expected = router
        .find_route(&id("waterloo"), &id("euston"))
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let router = router.clone();
                scope.spawn(move || router.find_route(&id("waterloo"), &id("euston")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_ref(), Some(&expected));
        }
    });
}

mod proptests {
    use super::*;
    use crate::domain::{Branch, Line};
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn network_strategy() -> impl Strategy<Value = LineNetwork> {
        let branch = prop::collection::vec(0usize..8, 2..6).prop_map(|mut idxs| {
            idxs.dedup();
            if idxs.len() < 2 {
                idxs = vec![0, 1];
            }
            idxs
        });
        prop::collection::vec(prop::collection::vec(branch, 1..3), 1..5).prop_map(|lines| {
            let mut network = LineNetwork::new();
            for (line_idx, branches) in lines.into_iter().enumerate() {
                let mut line = Line::new(LineId::parse(&format!("L{line_idx}")).unwrap());
                for idxs in branches {
                    let stations = idxs
                        .into_iter()
                        .map(|i| StationId::parse(&format!("S{i}")).unwrap())
                        .collect();
                    line = line.with_branch(Branch::new(stations));
                }
                network.insert(line);
            }
            network
        })
    }

    fn station_pairs(router: &Router) -> Vec<(StationId, StationId)> {
        let stations: Vec<StationId> = router.graph().stations().cloned().collect();
        let mut pairs = Vec::new();
        for a in &stations {
            for b in &stations {
                pairs.push((a.clone(), b.clone()));
            }
        }
        pairs
    }

    /// Exhaustive search over simple paths, each costed with its fewest
    /// possible line changes.
    fn cheapest_simple_path(
        graph: &Graph,
        from: &StationId,
        to: &StationId,
        config: &CostConfig,
    ) -> Option<u32> {
        fn walk(
            graph: &Graph,
            path: &mut Vec<StationId>,
            to: &StationId,
            config: &CostConfig,
            best: &mut Option<u32>,
        ) {
            let here = path.last().unwrap().clone();
            if &here == to {
                if let Some(cost) = path_cost(graph, path, config) {
                    *best = Some(best.map_or(cost, |b| b.min(cost)));
                }
                return;
            }
            for next in graph.neighbors(&here) {
                if path.contains(next) {
                    continue;
                }
                path.push(next.clone());
                walk(graph, path, to, config, best);
                path.pop();
            }
        }

        let mut best = None;
        walk(graph, &mut vec![from.clone()], to, config, &mut best);
        best
    }

    /// Cost of a fixed path when each hop may ride any line on its edge.
    fn path_cost(graph: &Graph, path: &[StationId], config: &CostConfig) -> Option<u32> {
        let mut by_line: HashMap<LineId, u32> = HashMap::new();
        for (i, hop) in path.windows(2).enumerate() {
            let lines = graph.edge_lines(&hop[0], &hop[1])?;
            let fewest = by_line.values().copied().min();
            by_line = lines
                .iter()
                .map(|line| {
                    let stay = by_line.get(line).copied();
                    let switch = fewest.map(|c| c + 1);
                    let changes = if i == 0 {
                        0
                    } else {
                        [stay, switch].into_iter().flatten().min().unwrap_or(0)
                    };
                    (line.clone(), changes)
                })
                .collect();
        }
        let changes = by_line.values().copied().min()?;
        let hops = u32::try_from(path.len() - 1).ok()?;
        Some(hops * config.hop_cost + changes * config.change_penalty)
    }

    proptest! {
        /// Routes are well-formed: they start and end where asked, segments
        /// join up, each hop is on its segment's line and the statistics agree
        /// with the segments.
        #[test]
        fn routes_are_well_formed(network in network_strategy()) {
            let router = router(&network);
            let config = router.config().clone();

            for (a, b) in station_pairs(&router) {
                let Some(route) = router.find_route(&a, &b) else { continue };
                prop_assert!(route.estimated_minutes >= 0);
                if a == b {
                    prop_assert!(route.is_empty());
                    continue;
                }

                let path = route.station_path();
                prop_assert_eq!(path.len(), route.total_stations);
                prop_assert_eq!(path.first().copied(), Some(&a));
                prop_assert_eq!(path.last().copied(), Some(&b));
                prop_assert_eq!(route.changes, route.segments.len() - 1);
                prop_assert_eq!(
                    route.estimated_minutes,
                    config.estimate_minutes(route.total_stations, route.changes)
                );

                for pair in route.segments.windows(2) {
                    prop_assert_eq!(pair[0].last_station(), pair[1].first_station());
                    prop_assert_ne!(&pair[0].line, &pair[1].line);
                }
                for segment in &route.segments {
                    prop_assert!(segment.station_ids.len() >= 2);
                    prop_assert_eq!(segment.stations.len(), segment.station_ids.len());
                    for hop in segment.station_ids.windows(2) {
                        let lines = router.graph().edge_lines(&hop[0], &hop[1]).unwrap();
                        prop_assert!(lines.contains(&segment.line));
                    }
                }
            }
        }

        /// If B is reachable from A then A is reachable from B, through as
        /// many stations and with as many changes.
        #[test]
        fn reachability_is_symmetric(network in network_strategy()) {
            let router = router(&network);
            for (a, b) in station_pairs(&router) {
                let there = router.find_route(&a, &b);
                let back = router.find_route(&b, &a);
                prop_assert_eq!(there.is_some(), back.is_some());
                if let (Some(there), Some(back)) = (there, back) {
                    prop_assert_eq!(there.total_stations, back.total_stations);
                    prop_assert_eq!(there.changes, back.changes);
                }
            }
        }

        /// No simple path is cheaper than the one found, and the displayed
        /// route carries the changes the search paid for.
        #[test]
        fn routes_are_lowest_cost(network in network_strategy()) {
            let router = router(&network);
            let config = router.config().clone();
            let Some(origin) = router.graph().stations().next().cloned() else {
                return Ok(());
            };

            for target in router.graph().stations() {
                if *target == origin {
                    continue;
                }
                let outcome = shortest_path(router.graph(), &origin, target, &config);
                let cheapest = cheapest_simple_path(router.graph(), &origin, target, &config);
                prop_assert_eq!(outcome.as_ref().map(|o| o.cost), cheapest);

                if let Some(outcome) = outcome {
                    let route = router.find_route(&origin, target).unwrap();
                    let hops = u32::try_from(route.total_stations - 1).unwrap();
                    let changes = u32::try_from(route.changes).unwrap();
                    prop_assert_eq!(changes, outcome.changes);
                    prop_assert_eq!(
                        hops * config.hop_cost + changes * config.change_penalty,
                        outcome.cost
                    );
                }
            }
        }

        /// Repeated queries give identical answers.
        #[test]
        fn queries_are_repeatable(network in network_strategy()) {
            let router = router(&network);
            let rebuilt = super::router(&network);
            for (a, b) in station_pairs(&router) {
                let first = router.find_route(&a, &b);
                prop_assert_eq!(&first, &router.find_route(&a, &b));
                prop_assert_eq!(&first, &rebuilt.find_route(&a, &b));
            }
        }
    }
}
