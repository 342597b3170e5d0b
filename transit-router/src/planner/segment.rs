//! Path segmentation.
//!
//! Groups a station path into maximal runs ridden on one line. When an edge
//! is served by several lines the rider stays on the current line if it is
//! one of them. Otherwise a new segment starts on the candidate that serves
//! the most consecutive edges ahead, the first in id order on ties.

use std::collections::BTreeSet;

use crate::domain::{LineId, Route, Segment, StationId};
use crate::network::{Graph, NetworkError};
use crate::stations::StationTable;

use super::config::CostConfig;

/// Builds routes from station paths.
pub struct Segmenter<'a> {
    graph: &'a Graph,
    stations: &'a StationTable,
    config: &'a CostConfig,
}

/// A segment before station records are attached.
struct Draft {
    line: LineId,
    station_ids: Vec<StationId>,
}

impl<'a> Segmenter<'a> {
    pub fn new(graph: &'a Graph, stations: &'a StationTable, config: &'a CostConfig) -> Self {
        Self {
            graph,
            stations,
            config,
        }
    }

    /// Turn a station path into a route.
    ///
    /// An empty path yields an empty route. Fails if two consecutive stations
    /// share no line or a station has no record.
    pub fn build_route(
        &self,
        origin: &StationId,
        destination: &StationId,
        path: &[StationId],
    ) -> Result<Route, NetworkError> {
        let drafts = self.split(path)?;

        let segments = drafts
            .into_iter()
            .map(|draft| self.resolve(draft))
            .collect::<Result<Vec<_>, _>>()?;

        let total_stations = path.len();
        let changes = segments.len().saturating_sub(1);
        let estimated_minutes = self.config.estimate_minutes(total_stations, changes);

        Ok(Route::new(
            origin.clone(),
            destination.clone(),
            segments,
            total_stations,
            estimated_minutes,
        ))
    }

    fn split(&self, path: &[StationId]) -> Result<Vec<Draft>, NetworkError> {
        let mut drafts: Vec<Draft> = Vec::new();
        let mut current: Option<LineId> = None;

        for (i, pair) in path.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            let candidates = self
                .graph
                .edge_lines(from, to)
                .filter(|lines| !lines.is_empty())
                .ok_or_else(|| NetworkError::UnresolvedEdge {
                    from: from.clone(),
                    to: to.clone(),
                })?;

            let stay = current.as_ref().is_some_and(|l| candidates.contains(l));
            if stay && let Some(draft) = drafts.last_mut() {
                draft.station_ids.push(to.clone());
                continue;
            }

            // Non-empty, checked above.
            let Some(line) = self.pick_line(candidates, &path[i..]) else {
                continue;
            };
            drafts.push(Draft {
                line: line.clone(),
                station_ids: vec![from.clone(), to.clone()],
            });
            current = Some(line);
        }

        Ok(drafts)
    }

    /// The candidate serving the longest run of edges from the start of
    /// `rest`; the first in id order on ties.
    fn pick_line(&self, candidates: &BTreeSet<LineId>, rest: &[StationId]) -> Option<LineId> {
        let mut best: Option<(&LineId, usize)> = None;
        for line in candidates {
            let reach = self.reach(line, rest);
            if best.is_none_or(|(_, r)| reach > r) {
                best = Some((line, reach));
            }
        }
        best.map(|(line, _)| line.clone())
    }

    /// Number of consecutive edges from the start of `rest` served by `line`.
    fn reach(&self, line: &LineId, rest: &[StationId]) -> usize {
        rest.windows(2)
            .take_while(|w| {
                self.graph
                    .edge_lines(&w[0], &w[1])
                    .is_some_and(|lines| lines.contains(line))
            })
            .count()
    }

    fn resolve(&self, draft: Draft) -> Result<Segment, NetworkError> {
        let stations = draft
            .station_ids
            .iter()
            .map(|id| {
                self.stations
                    .get(id.as_str())
                    .cloned()
                    .ok_or_else(|| NetworkError::MissingStation {
                        station: id.clone(),
                        line: draft.line.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Segment {
            color: self.graph.line_color(&draft.line).to_string(),
            line: draft.line,
            station_ids: draft.station_ids,
            stations,
        })
    }
}
