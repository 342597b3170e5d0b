//! Transit route planner.
//!
//! Answers "how do I get from station A to station B" over a metro network
//! described as lines of ordered station branches: a change-penalised
//! shortest-path search, segmentation into single-line legs with a travel
//! time estimate, and interchange detection. A small JSON web layer exposes
//! the queries to map and list UIs.

pub mod cache;
pub mod data;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stations;
pub mod web;
