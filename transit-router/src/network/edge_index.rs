//! Edge to line resolution.
//!
//! An edge (two adjacent stations) may be served by several lines, e.g. two
//! lines sharing track. [`EdgeLineIndex`] answers "which lines run between
//! these two stations" in constant time; [`scan_edge_lines`] answers the same
//! question by walking every branch and is kept as the reference behaviour.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{LineId, LineNetwork, StationId};

/// An unordered pair of stations.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    low: StationId,
    high: StationId,
}

impl EdgeKey {
    pub fn new(a: &StationId, b: &StationId) -> Self {
        if a <= b {
            Self {
                low: a.clone(),
                high: b.clone(),
            }
        } else {
            Self {
                low: b.clone(),
                high: a.clone(),
            }
        }
    }

    /// The two stations, lexicographically smaller first.
    pub fn stations(&self) -> (&StationId, &StationId) {
        (&self.low, &self.high)
    }
}

/// Precomputed edge → lines lookup, built alongside the graph.
#[derive(Debug, Clone, Default)]
pub struct EdgeLineIndex {
    lines: HashMap<EdgeKey, BTreeSet<LineId>>,
}

impl EdgeLineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `line` runs between `a` and `b`.
    pub fn insert(&mut self, a: &StationId, b: &StationId, line: &LineId) {
        self.lines
            .entry(EdgeKey::new(a, b))
            .or_default()
            .insert(line.clone());
    }

    /// Lines serving the edge, in line id order.
    ///
    /// Returns `None` if no branch contains the pair.
    pub fn lines(&self, a: &StationId, b: &StationId) -> Option<&BTreeSet<LineId>> {
        self.lines.get(&EdgeKey::new(a, b))
    }

    /// Iterate over every indexed edge and its lines.
    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, &BTreeSet<LineId>)> {
        self.lines.iter()
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Resolve the lines serving an edge by scanning every branch.
///
/// O(lines × branch length) per call. Returns an empty set when no branch
/// contains the pair.
pub fn scan_edge_lines(network: &LineNetwork, a: &StationId, b: &StationId) -> BTreeSet<LineId> {
    network
        .lines()
        .filter(|line| line.branches.iter().any(|branch| branch.connects(a, b)))
        .map(|line| line.id.clone())
        .collect()
}
