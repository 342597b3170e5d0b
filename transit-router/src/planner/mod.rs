//! Route planner.
//!
//! This module answers "how do I get from station A to station B": a
//! Dijkstra search over the station graph that penalises line changes,
//! followed by segmentation of the station path into single-line legs with
//! display metadata and a travel time estimate.

mod config;
mod router;
mod search;
mod segment;

#[cfg(test)]
mod search_tests;

pub use config::CostConfig;
pub use router::{RouteError, Router};
pub use search::{SearchOutcome, shortest_path};
pub use segment::Segmenter;
