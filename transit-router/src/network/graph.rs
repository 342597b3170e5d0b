//! The station graph.
//!
//! Built once from the line network and read-only afterwards. Every edge is
//! backed by at least one line: the adjacency structure is exactly the union
//! of consecutive-pair edges over all branches.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::domain::{DEFAULT_LINE_COLOR, LineId, LineNetwork, StationId};

use super::edge_index::{EdgeKey, EdgeLineIndex};
use super::error::NetworkError;

/// Undirected station graph with per-station and per-edge line sets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Neighbours in order of first appearance in the branch data.
    adjacency: HashMap<StationId, Vec<StationId>>,

    /// Lines serving each station.
    station_lines: HashMap<StationId, BTreeSet<LineId>>,

    /// Lines serving each edge.
    edge_lines: EdgeLineIndex,

    /// Display colour per line.
    line_colors: BTreeMap<LineId, String>,
}

impl Graph {
    /// Build the graph from a line network.
    ///
    /// Lines are visited in line id order and branches in their given order,
    /// so the same network always yields the same graph, down to neighbour
    /// iteration order.
    ///
    /// Fails on malformed branches: empty, a single station, or the same
    /// station listed twice in a row.
    pub fn build(network: &LineNetwork) -> Result<Self, NetworkError> {
        let mut graph = Graph::default();

        for line in network.lines() {
            graph
                .line_colors
                .insert(line.id.clone(), line.color().to_string());

            for (branch_idx, branch) in line.branches.iter().enumerate() {
                if branch.is_empty() {
                    return Err(NetworkError::EmptyBranch {
                        line: line.id.clone(),
                        branch: branch_idx,
                    });
                }
                if branch.len() < 2 {
                    return Err(NetworkError::BranchTooShort {
                        line: line.id.clone(),
                        branch: branch_idx,
                    });
                }

                for (a, b) in branch.pairs() {
                    if a == b {
                        return Err(NetworkError::RepeatedStation {
                            line: line.id.clone(),
                            branch: branch_idx,
                            station: a.clone(),
                        });
                    }
                    graph.add_edge(a, b, &line.id);
                }
            }
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            lines = graph.line_colors.len(),
            "built station graph"
        );

        Ok(graph)
    }

    fn add_edge(&mut self, a: &StationId, b: &StationId, line: &LineId) {
        link(&mut self.adjacency, a, b);
        link(&mut self.adjacency, b, a);

        for station in [a, b] {
            self.station_lines
                .entry(station.clone())
                .or_default()
                .insert(line.clone());
        }

        self.edge_lines.insert(a, b, line);
    }

    /// Returns true if the station lies on at least one branch.
    pub fn contains(&self, station: &StationId) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Directly connected stations. Empty for unknown stations.
    pub fn neighbors(&self, station: &StationId) -> &[StationId] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lines serving a station.
    pub fn lines_at(&self, station: &StationId) -> Option<&BTreeSet<LineId>> {
        self.station_lines.get(station)
    }

    /// Lines serving the edge between two stations, in line id order.
    pub fn edge_lines(&self, a: &StationId, b: &StationId) -> Option<&BTreeSet<LineId>> {
        self.edge_lines.lines(a, b)
    }

    /// The precomputed edge index.
    pub fn edge_index(&self) -> &EdgeLineIndex {
        &self.edge_lines
    }

    /// Display colour for a line, falling back to the default colour.
    pub fn line_color(&self, line: &LineId) -> &str {
        self.line_colors
            .get(line)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// Every station with at least one edge.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.adjacency.keys()
    }

    /// Every edge, once per unordered pair.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edge_lines.iter().map(|(key, _)| key)
    }

    /// Station → lines map, for interchange queries.
    pub(crate) fn station_lines(&self) -> &HashMap<StationId, BTreeSet<LineId>> {
        &self.station_lines
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_lines.len()
    }
}

fn link(adjacency: &mut HashMap<StationId, Vec<StationId>>, from: &StationId, to: &StationId) {
    let neighbors = adjacency.entry(from.clone()).or_default();
    if !neighbors.contains(to) {
        neighbors.push(to.clone());
    }
}
