//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Route, Segment, Station, StationId};

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station id
    #[serde(default)]
    pub from: String,

    /// Destination station id
    #[serde(default)]
    pub to: String,
}

/// A route, ready for display.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub origin: StationId,
    pub destination: StationId,
    pub segments: Vec<SegmentResult>,
    pub total_stations: usize,
    pub changes: usize,
    pub estimated_minutes: i64,
}

/// One single-line segment of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub line: LineId,

    /// Display colour, e.g. "#E32017"
    pub color: String,

    /// Hops ridden on this line
    pub hops: usize,

    /// Stations in travel order, boarding and alighting included
    pub stations: Vec<StationInfo>,
}

/// A station record.
#[derive(Debug, Serialize)]
pub struct StationInfo {
    pub id: StationId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub lines: Vec<LineId>,
    pub zones: Vec<u8>,
}

/// Every interchange station with the lines serving it.
#[derive(Debug, Serialize)]
pub struct InterchangesResponse {
    pub interchanges: BTreeMap<StationId, Vec<LineId>>,
}

/// Station search request.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Station search response.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationInfo>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            segments: route.segments.iter().map(SegmentResult::from_segment).collect(),
            total_stations: route.total_stations,
            changes: route.changes,
            estimated_minutes: route.estimated_minutes,
        }
    }
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            line: segment.line.clone(),
            color: segment.color.clone(),
            hops: segment.hops(),
            stations: segment.stations.iter().map(StationInfo::from_station).collect(),
        }
    }
}

impl StationInfo {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            lat: station.coordinates.latitude,
            lng: station.coordinates.longitude,
            lines: station.lines.iter().cloned().collect(),
            zones: station.zones.clone(),
        }
    }
}
