//! Line network types.
//!
//! A line is one or more branches; a branch is an ordered run of stations
//! along physically contiguous track. Branches of the same or different lines
//! may share stations, which is how interchanges arise.

use std::collections::BTreeMap;

use tracing::warn;

use super::{LineId, StationId};

/// Colour used for lines that do not publish one.
pub const DEFAULT_LINE_COLOR: &str = "#808080";

/// An ordered sequence of stations on one stretch of track.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branch {
    stations: Vec<StationId>,
}

impl Branch {
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Consecutive station pairs, in branch order.
    pub fn pairs(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// True if `a` and `b` appear next to each other, in either order.
    pub fn connects(&self, a: &StationId, b: &StationId) -> bool {
        self.pairs()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

impl From<Vec<StationId>> for Branch {
    fn from(stations: Vec<StationId>) -> Self {
        Self::new(stations)
    }
}

/// A named line with its branches and display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: Option<String>,
    pub color: Option<String>,
    pub branches: Vec<Branch>,
}

impl Line {
    /// Create a line with no branches and no display metadata.
    pub fn new(id: LineId) -> Self {
        Self {
            id,
            name: None,
            color: None,
            branches: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<Branch>) -> Self {
        self.branches.push(branch.into());
        self
    }

    /// Display colour, falling back to [`DEFAULT_LINE_COLOR`].
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_LINE_COLOR)
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// The static line network: line id to line, iterated in line id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineNetwork {
    lines: BTreeMap<LineId, Line>,
}

impl LineNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line, replacing any line with the same id.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        self.lines.insert(line.id.clone(), line)
    }

    pub fn get(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Builder for line networks from string identifiers.
///
/// Branches containing an invalid identifier are skipped whole, so a bad id
/// never silently joins two stations that are not adjacent.
///
/// ```
/// use transit_router::domain::LineNetworkBuilder;
///
/// let network = LineNetworkBuilder::new()
///     .branch("L1", &["A", "B", "C"])
///     .branch("L2", &["C", "D", "E"])
///     .color("L1", "#E32017")
///     .build();
///
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.get("L1").unwrap().color(), "#E32017");
/// ```
#[derive(Debug, Default)]
pub struct LineNetworkBuilder {
    inner: LineNetwork,
}

impl LineNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a branch to `line`, creating the line if needed.
    pub fn branch(mut self, line: &str, stations: &[&str]) -> Self {
        let Ok(line_id) = LineId::parse(line) else {
            warn!(line, "skipping branch with invalid line id");
            return self;
        };
        let parsed: Result<Vec<StationId>, _> =
            stations.iter().map(|s| StationId::parse(s)).collect();
        let Ok(parsed) = parsed else {
            warn!(line, "skipping branch with invalid station id");
            return self;
        };

        self.line_mut(line_id).branches.push(Branch::new(parsed));
        self
    }

    /// Set the display colour of `line`, creating the line if needed.
    pub fn color(mut self, line: &str, color: &str) -> Self {
        if let Ok(line_id) = LineId::parse(line) {
            self.line_mut(line_id).color = Some(color.to_string());
        }
        self
    }

    /// Set the display name of `line`, creating the line if needed.
    pub fn name(mut self, line: &str, name: &str) -> Self {
        if let Ok(line_id) = LineId::parse(line) {
            self.line_mut(line_id).name = Some(name.to_string());
        }
        self
    }

    pub fn build(self) -> LineNetwork {
        self.inner
    }

    fn line_mut(&mut self, id: LineId) -> &mut Line {
        self.inner
            .lines
            .entry(id.clone())
            .or_insert_with(|| Line::new(id))
    }
}
