//! Raw records for the reference data files.
//!
//! These types mirror the JSON layout one-to-one. Identifiers are kept as
//! plain strings here and validated during conversion.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One entry of the stations file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,

    /// Lines serving the station as published. Informational only: the
    /// graph derives line membership from the branches.
    #[serde(default)]
    pub lines: Vec<String>,

    #[serde(default)]
    pub zones: Vec<u8>,
}

/// The network file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNetwork {
    pub lines: BTreeMap<String, RawLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLine {
    pub name: Option<String>,

    /// Display colour, e.g. `"#E32017"`.
    pub color: Option<String>,

    /// Ordered station id sequences.
    pub branches: Vec<Vec<String>>,
}
