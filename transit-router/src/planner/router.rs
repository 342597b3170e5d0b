//! Route queries over a shared network.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{LineId, LineNetwork, Route, Station, StationId};
use crate::network::{self, Graph, NetworkError};
use crate::stations::StationTable;

use super::config::CostConfig;
use super::search::shortest_path;
use super::segment::Segmenter;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The station id is neither in the station table nor on any line
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Both stations exist but no path connects them
    #[error("no route from {origin} to {destination}")]
    NoRoute {
        origin: StationId,
        destination: StationId,
    },
}

/// Answers route and interchange queries.
///
/// Holds the graph, station table and costs behind `Arc`s: cloning is cheap
/// and clones share the same immutable data, so a single router built at
/// startup can serve any number of threads without locking. Each query owns
/// its search state.
#[derive(Debug, Clone)]
pub struct Router {
    graph: Arc<Graph>,
    stations: Arc<StationTable>,
    config: Arc<CostConfig>,
}

impl Router {
    /// Build the graph from `network` and create a router over it.
    ///
    /// Fails if the network is malformed or a station on any branch has no
    /// record in `stations`.
    pub fn new(
        network: &LineNetwork,
        stations: StationTable,
        config: CostConfig,
    ) -> Result<Self, NetworkError> {
        let graph = Graph::build(network)?;
        Self::from_parts(Arc::new(graph), Arc::new(stations), Arc::new(config))
    }

    /// Create a router over an already-built graph.
    pub fn from_parts(
        graph: Arc<Graph>,
        stations: Arc<StationTable>,
        config: Arc<CostConfig>,
    ) -> Result<Self, NetworkError> {
        for station in graph.stations() {
            if !stations.contains(station.as_str()) {
                let line = graph
                    .lines_at(station)
                    .and_then(|lines| lines.first())
                    .cloned();
                if let Some(line) = line {
                    return Err(NetworkError::MissingStation {
                        station: station.clone(),
                        line,
                    });
                }
            }
        }

        debug!(
            stations = stations.len(),
            graph_stations = graph.station_count(),
            edges = graph.edge_count(),
            "router ready"
        );

        Ok(Self {
            graph,
            stations,
            config,
        })
    }

    /// Find the lowest-cost route between two stations.
    ///
    /// Each hop costs `hop_cost` and each change of line ridden costs
    /// `change_penalty`. The path is then split into segments: the rider
    /// stays on the current line while it serves the next hop, and otherwise
    /// boards the line that serves the most consecutive hops ahead (first in
    /// id order on ties).
    ///
    /// Returns a zero-length route when origin and destination are the same,
    /// without searching. Returns `None` when no route exists, including when
    /// either id is unknown.
    pub fn find_route(&self, origin: &StationId, destination: &StationId) -> Option<Route> {
        if origin == destination {
            return Some(Route::empty(origin.clone(), destination.clone()));
        }
        self.try_find_route(origin, destination).ok()
    }

    /// Like [`find_route`](Self::find_route), but tells unknown stations
    /// apart from unreachable ones.
    ///
    /// A station counts as known if it is in the station table or on any
    /// line.
    pub fn try_find_route(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<Route, RouteError> {
        for station in [origin, destination] {
            if !self.is_known(station) {
                return Err(RouteError::UnknownStation(station.clone()));
            }
        }

        if origin == destination {
            return Ok(Route::empty(origin.clone(), destination.clone()));
        }

        let no_route = || RouteError::NoRoute {
            origin: origin.clone(),
            destination: destination.clone(),
        };

        let outcome =
            shortest_path(&self.graph, origin, destination, &self.config).ok_or_else(no_route)?;

        Segmenter::new(&self.graph, &self.stations, &self.config)
            .build_route(origin, destination, &outcome.path)
            .map_err(|e| {
                warn!(%origin, %destination, error = %e, "failed to segment path");
                no_route()
            })
    }

    /// Every station served by more than one line.
    pub fn interchanges(&self) -> BTreeMap<StationId, Vec<LineId>> {
        network::interchanges(&self.graph)
    }

    /// Look up a station record.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Search stations by name or id.
    pub fn search_stations(&self, query: &str, limit: usize) -> Vec<&Station> {
        self.stations.search(query, limit)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn stations(&self) -> &StationTable {
        &self.stations
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// True if the station is in the station table or on any line.
    pub fn is_known(&self, station: &StationId) -> bool {
        self.graph.contains(station) || self.stations.contains(station.as_str())
    }
}
