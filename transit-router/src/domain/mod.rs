//! Domain types for the transit router.
//!
//! This module contains the validated reference data (stations, lines,
//! branches) and the route values produced by the planner. Identifiers and
//! coordinates enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod ids;
mod line;
mod route;
mod station;

pub use error::DomainError;
pub use ids::{InvalidId, LineId, StationId};
pub use line::{Branch, DEFAULT_LINE_COLOR, Line, LineNetwork, LineNetworkBuilder};
pub use route::{Route, Segment};
pub use station::{Coordinates, Station};
