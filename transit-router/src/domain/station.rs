//! Station reference records.

use std::collections::BTreeSet;
use std::fmt;

use super::{DomainError, LineId, StationId};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite or out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::Coordinates;
    ///
    /// assert!(Coordinates::new(51.5133, -0.0886).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// A station in the reference table.
///
/// Loaded once and never mutated by the routing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub coordinates: Coordinates,
    /// Lines serving this station, as published in the reference data.
    pub lines: BTreeSet<LineId>,
    /// Fare zones. Boundary stations list more than one.
    pub zones: Vec<u8>,
}

impl Station {
    /// Create a station with no lines or zones.
    pub fn new(id: StationId, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id,
            name: name.into(),
            coordinates,
            lines: BTreeSet::new(),
            zones: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: impl IntoIterator<Item = LineId>) -> Self {
        self.lines.extend(lines);
        self
    }

    pub fn with_zones(mut self, zones: impl IntoIterator<Item = u8>) -> Self {
        self.zones.extend(zones);
        self
    }

    /// True if the reference data lists more than one line here.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}
