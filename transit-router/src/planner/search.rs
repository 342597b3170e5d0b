//! Shortest-path search with a line-change penalty.
//!
//! Dijkstra over (station, line ridden into it) states. Each hop costs
//! `hop_cost`; riding the next edge on a different line from the one used
//! to arrive adds `change_penalty`. The origin state has no line, so the
//! first hop is never penalised. Keeping one distance per state means a
//! station reached cheaply on the wrong line cannot block a cheaper
//! continuation on the right one.
//!
//! Distances compare as (cost, changes, hops). All three are unchanged by
//! reversing a path, so a query and its reverse settle on routes with the
//! same station and change counts.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::domain::{LineId, StationId};
use crate::network::Graph;

use super::config::CostConfig;

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Stations from origin to destination, both included.
    pub path: Vec<StationId>,

    /// Line ridden along each hop; one shorter than `path`.
    pub lines: Vec<LineId>,

    /// Total search cost of the path, penalties included.
    pub cost: u32,

    /// Line changes along `lines`.
    pub changes: u32,

    /// Number of states settled before the search stopped.
    pub settled: usize,
}

/// A station and the line ridden into it. `None` only at the origin.
type State = (StationId, Option<LineId>);

/// Tentative distance of a state, compared field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Distance {
    cost: u32,
    changes: u32,
    hops: u32,
}

impl Distance {
    fn step(self, config: &CostConfig, change: bool) -> Self {
        let penalty = if change { config.change_penalty } else { 0 };
        Self {
            cost: self
                .cost
                .saturating_add(config.hop_cost)
                .saturating_add(penalty),
            changes: self.changes.saturating_add(u32::from(change)),
            hops: self.hops.saturating_add(1),
        }
    }
}

/// Frontier entry.
///
/// Ordered so that `BinaryHeap` pops the lowest distance first and, among
/// equal distances, the entry pushed first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frontier {
    distance: Distance,
    seq: u64,
    state: State,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the lowest-cost path from `origin` to `destination`.
///
/// Returns `None` if either station is not in the graph or the destination
/// is unreachable. Stops as soon as the destination is settled on any line.
pub fn shortest_path(
    graph: &Graph,
    origin: &StationId,
    destination: &StationId,
    config: &CostConfig,
) -> Option<SearchOutcome> {
    if !graph.contains(origin) || !graph.contains(destination) {
        debug!(%origin, %destination, "station not in graph");
        return None;
    }

    let start: State = (origin.clone(), None);
    let mut dist: HashMap<State, Distance> = HashMap::new();
    let mut prev: HashMap<State, State> = HashMap::new();
    let mut settled: HashSet<State> = HashSet::new();
    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;

    dist.insert(start.clone(), Distance::default());
    heap.push(Frontier {
        distance: Distance::default(),
        seq,
        state: start,
    });

    let mut reached = None;
    while let Some(Frontier {
        distance, state, ..
    }) = heap.pop()
    {
        if !settled.insert(state.clone()) {
            continue; // stale entry
        }
        if &state.0 == destination {
            reached = Some((state, distance));
            break;
        }

        let (station, riding) = &state;
        for neighbor in graph.neighbors(station) {
            let Some(lines) = graph
                .edge_lines(station, neighbor)
                .filter(|lines| !lines.is_empty())
            else {
                warn!(from = %station, to = %neighbor, "edge with no known line; skipping");
                continue;
            };

            for line in lines {
                let next: State = (neighbor.clone(), Some(line.clone()));
                if settled.contains(&next) {
                    continue;
                }

                let change = riding.as_ref().is_some_and(|r| r != line);
                let candidate = distance.step(config, change);
                if dist.get(&next).is_none_or(|best| candidate < *best) {
                    trace!(
                        from = %station,
                        to = %neighbor,
                        %line,
                        cost = candidate.cost,
                        change,
                        "relaxed edge"
                    );
                    dist.insert(next.clone(), candidate);
                    prev.insert(next.clone(), state.clone());
                    seq += 1;
                    heap.push(Frontier {
                        distance: candidate,
                        seq,
                        state: next,
                    });
                }
            }
        }
    }

    let Some((end, distance)) = reached else {
        debug!(
            %origin,
            %destination,
            settled = settled.len(),
            "destination unreachable"
        );
        return None;
    };

    let (path, lines) = reconstruct(&prev, end)?;

    debug!(
        %origin,
        %destination,
        cost = distance.cost,
        changes = distance.changes,
        stations = path.len(),
        settled = settled.len(),
        "search complete"
    );

    Some(SearchOutcome {
        path,
        lines,
        cost: distance.cost,
        changes: distance.changes,
        settled: settled.len(),
    })
}

/// Follow predecessor links from `end` back to the line-less origin state,
/// collecting stations and the line ridden along each hop.
fn reconstruct(
    prev: &HashMap<State, State>,
    end: State,
) -> Option<(Vec<StationId>, Vec<LineId>)> {
    let mut path = Vec::new();
    let mut lines = Vec::new();
    let mut current = end;

    loop {
        let (station, line) = current;
        let Some(line) = line else {
            path.push(station);
            break;
        };
        let before = prev.get(&(station.clone(), Some(line.clone())))?.clone();
        path.push(station);
        lines.push(line);
        current = before;
    }

    path.reverse();
    lines.reverse();
    Some((path, lines))
}
