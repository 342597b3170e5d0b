//! Reference data loading.
//!
//! Reads the station table and the line network from JSON files, validates
//! them, and assembles a [`Router`]. All of this happens once at startup;
//! any malformed record is an error rather than a warning.

mod convert;
mod error;
mod types;

use std::path::Path;

use tracing::{info, warn};

use crate::domain::LineNetwork;
use crate::planner::{CostConfig, Router};
use crate::stations::StationTable;

pub use convert::{convert_network, convert_station, convert_stations};
pub use error::DataError;
pub use types::{RawLine, RawNetwork, RawStation};

/// Parse a stations file body.
pub fn parse_stations(json: &str) -> Result<StationTable, DataError> {
    let raw: Vec<RawStation> = serde_json::from_str(json)?;
    convert_stations(&raw)
}

/// Parse a network file body.
pub fn parse_network(json: &str) -> Result<LineNetwork, DataError> {
    let raw: RawNetwork = serde_json::from_str(json)?;
    convert_network(&raw)
}

pub fn load_stations(path: &Path) -> Result<StationTable, DataError> {
    let table = read(path)
        .and_then(|json| parse_stations(&json))
        .map_err(|e| e.in_file(path))?;
    info!(path = %path.display(), stations = table.len(), "loaded stations");
    Ok(table)
}

pub fn load_network(path: &Path) -> Result<LineNetwork, DataError> {
    let network = read(path)
        .and_then(|json| parse_network(&json))
        .map_err(|e| e.in_file(path))?;
    info!(path = %path.display(), lines = network.len(), "loaded line network");
    Ok(network)
}

/// Load both files and build a router over them.
pub fn load_router(
    stations_path: &Path,
    network_path: &Path,
    config: CostConfig,
) -> Result<Router, DataError> {
    let stations = load_stations(stations_path)?;
    let network = load_network(network_path)?;
    build_router(&network, stations, config)
}

/// Build a router, warning about stations whose published lines are not in
/// the network.
pub fn build_router(
    network: &LineNetwork,
    stations: StationTable,
    config: CostConfig,
) -> Result<Router, DataError> {
    for station in stations.iter() {
        for line in &station.lines {
            if network.get(line.as_str()).is_none() {
                warn!(station = %station.id, %line, "station lists a line not in the network");
            }
        }
    }

    Ok(Router::new(network, stations, config)?)
}

fn read(path: &Path) -> Result<String, DataError> {
    Ok(std::fs::read_to_string(path)?)
}
