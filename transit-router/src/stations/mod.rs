//! Station reference table.
//!
//! Provides id → station lookup and name search over the immutable station
//! records loaded at startup.

mod error;
mod table;

pub use error::StationError;
pub use table::StationTable;
