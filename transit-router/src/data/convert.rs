//! Conversion from raw records to domain types.
//!
//! Unlike `LineNetworkBuilder`, which skips bad branches with a warning,
//! conversion fails on the first invalid identifier: reference data is
//! loaded once at startup and a silently shortened line would give wrong
//! routes for the lifetime of the process.

use tracing::warn;

use crate::domain::{
    Branch, Coordinates, DomainError, Line, LineId, LineNetwork, Station, StationId,
};
use crate::stations::StationTable;

use super::error::DataError;
use super::types::{RawLine, RawNetwork, RawStation};

/// Validate one station record.
pub fn convert_station(raw: &RawStation) -> Result<Station, DataError> {
    let invalid = |source: DomainError| DataError::InvalidStation {
        id: raw.id.clone(),
        source,
    };

    let id = StationId::parse(&raw.id).map_err(|e| invalid(e.into()))?;
    let coordinates = Coordinates::new(raw.lat, raw.lng).map_err(invalid)?;
    let lines = raw
        .lines
        .iter()
        .map(|l| LineId::parse(l))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(e.into()))?;

    Ok(Station::new(id, raw.name.clone(), coordinates)
        .with_lines(lines)
        .with_zones(raw.zones.iter().copied()))
}

/// Validate all station records and index them.
pub fn convert_stations(raw: &[RawStation]) -> Result<StationTable, DataError> {
    let stations = raw
        .iter()
        .map(convert_station)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StationTable::new(stations)?)
}

fn convert_line(id: &str, raw: &RawLine) -> Result<Line, DataError> {
    let invalid = |source: DomainError| DataError::InvalidLine {
        id: id.to_string(),
        source,
    };

    let mut line = Line::new(LineId::parse(id).map_err(|e| invalid(e.into()))?);
    if let Some(name) = &raw.name {
        line = line.with_name(name.clone());
    }
    if let Some(color) = &raw.color {
        line = line.with_color(color.clone());
    }

    for stations in &raw.branches {
        let stations = stations
            .iter()
            .map(|s| StationId::parse(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(e.into()))?;
        line = line.with_branch(Branch::new(stations));
    }

    if line.branches.is_empty() {
        warn!(line = id, "line has no branches");
    }

    Ok(line)
}

/// Validate the network file.
///
/// Branch shape (length, repeated stations) is checked later when the graph
/// is built.
pub fn convert_network(raw: &RawNetwork) -> Result<LineNetwork, DataError> {
    let mut network = LineNetwork::new();
    for (id, raw_line) in &raw.lines {
        network.insert(convert_line(id, raw_line)?);
    }
    Ok(network)
}
