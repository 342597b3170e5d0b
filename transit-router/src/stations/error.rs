//! Station table error types.

use crate::domain::StationId;

/// Errors that can occur when building the station table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// The same station id appears in more than one record
    #[error("duplicate station id: {0}")]
    Duplicate(StationId),
}
