//! Interchange lookup.

use std::collections::BTreeMap;

use crate::domain::{LineId, StationId};

use super::Graph;

/// Every station served by more than one line, with its lines in id order.
pub fn interchanges(graph: &Graph) -> BTreeMap<StationId, Vec<LineId>> {
    graph
        .station_lines()
        .iter()
        .filter(|(_, lines)| lines.len() > 1)
        .map(|(station, lines)| (station.clone(), lines.iter().cloned().collect()))
        .collect()
}
