//! Station lookup.

use std::collections::HashMap;

use crate::domain::{Station, StationId};

use super::error::StationError;

/// Immutable id → station lookup.
///
/// Keeps records in their load order and indexes them by id.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
}

impl StationTable {
    /// Build a table, rejecting duplicate ids.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id.clone(), i).is_some() {
                return Err(StationError::Duplicate(station.id.clone()));
            }
        }
        Ok(Self { stations, index })
    }

    /// Look up a station by id.
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.index.get(id).map(|&i| &self.stations[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All stations in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Case-insensitive search on station name and id.
    ///
    /// Exact id matches rank first, then names starting with the query, then
    /// names or ids merely containing it. Ties are broken by name. A blank
    /// query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &Station)> = self
            .stations
            .iter()
            .filter_map(|station| {
                let name = station.name.to_lowercase();
                let id = station.id.as_str().to_lowercase();
                let rank = if id == needle {
                    0
                } else if name.starts_with(&needle) {
                    1
                } else if name.contains(&needle) || id.contains(&needle) {
                    2
                } else {
                    return None;
                };
                Some((rank, station))
            })
            .collect();

        matches.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.name.cmp(&b.name)));
        matches.into_iter().take(limit).map(|(_, s)| s).collect()
    }
}
