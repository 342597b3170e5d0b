//! Route types.
//!
//! A `Route` is the public result of a query: the stations from origin to
//! destination grouped into segments, each ridden on a single line. Routes
//! are plain values with no shared state.

use chrono::Duration;

use super::{LineId, Station, StationId};

/// A maximal run of stations ridden on one line without changing.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub line: LineId,
    pub color: String,
    /// Station ids in travel order. Always at least two.
    pub station_ids: Vec<StationId>,
    /// Station records, parallel to `station_ids`.
    pub stations: Vec<Station>,
}

impl Segment {
    /// Returns the boarding station.
    pub fn first_station(&self) -> Option<&StationId> {
        self.station_ids.first()
    }

    /// Returns the alighting station.
    pub fn last_station(&self) -> Option<&StationId> {
        self.station_ids.last()
    }

    /// Number of inter-station hops in this segment.
    pub fn hops(&self) -> usize {
        self.station_ids.len().saturating_sub(1)
    }
}

/// A route from origin to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub origin: StationId,
    pub destination: StationId,
    pub segments: Vec<Segment>,
    /// Length of the station path, origin and destination included.
    pub total_stations: usize,
    /// Number of line changes: segments minus one, floored at zero.
    pub changes: usize,
    pub estimated_minutes: i64,
}

impl Route {
    /// Create a route, deriving the change count from the segments.
    pub fn new(
        origin: StationId,
        destination: StationId,
        segments: Vec<Segment>,
        total_stations: usize,
        estimated_minutes: i64,
    ) -> Self {
        let changes = segments.len().saturating_sub(1);
        Self {
            origin,
            destination,
            segments,
            total_stations,
            changes,
            estimated_minutes,
        }
    }

    /// A zero-length route with zero statistics.
    pub fn empty(origin: StationId, destination: StationId) -> Self {
        Self::new(origin, destination, Vec::new(), 0, 0)
    }

    /// Returns true if the route has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Estimated travel time as a Duration.
    pub fn estimated_duration(&self) -> Duration {
        Duration::minutes(self.estimated_minutes)
    }

    /// Lines ridden, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LineId> {
        self.segments.iter().map(|s| &s.line)
    }

    /// The full station path, with each change station listed once.
    pub fn station_path(&self) -> Vec<&StationId> {
        let mut path: Vec<&StationId> = Vec::with_capacity(self.total_stations);
        for segment in &self.segments {
            let skip = usize::from(!path.is_empty());
            path.extend(segment.station_ids.iter().skip(skip));
        }
        path
    }

    /// Stations where the rider changes line.
    pub fn change_stations(&self) -> Vec<&StationId> {
        self.segments
            .iter()
            .skip(1)
            .filter_map(Segment::first_station)
            .collect()
    }
}
