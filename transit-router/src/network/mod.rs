//! Station graph construction.
//!
//! Turns the per-line branch data into an undirected station graph with a
//! station → lines map and a precomputed edge → lines index. The graph is
//! built once at startup and shared read-only between queries.

mod edge_index;
mod error;
mod graph;
mod interchange;

pub use edge_index::{EdgeKey, EdgeLineIndex, scan_edge_lines};
pub use error::NetworkError;
pub use graph::Graph;
pub use interchange::interchanges;
