//! Network construction errors.

use crate::domain::{LineId, StationId};

/// Errors raised while building or interpreting the line network.
///
/// These indicate malformed reference data and are meant to surface once,
/// at startup, rather than per query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A branch lists no stations
    #[error("line {line} branch {branch} is empty")]
    EmptyBranch { line: LineId, branch: usize },

    /// A branch lists a single station, so it contributes no track
    #[error("line {line} branch {branch} has fewer than two stations")]
    BranchTooShort { line: LineId, branch: usize },

    /// A branch lists the same station twice in a row
    #[error("line {line} branch {branch} repeats station {station}")]
    RepeatedStation {
        line: LineId,
        branch: usize,
        station: StationId,
    },

    /// A branch references a station absent from the station table
    #[error("station {station} on line {line} has no station record")]
    MissingStation { station: StationId, line: LineId },

    /// Two consecutive path stations share no line
    #[error("no line serves the edge {from} - {to}")]
    UnresolvedEdge { from: StationId, to: StationId },
}
