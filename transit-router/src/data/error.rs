//! Data loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;
use crate::network::NetworkError;
use crate::stations::StationError;

/// Errors from loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Error while loading a particular file
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<DataError>,
    },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A station record failed validation
    #[error("invalid station {id:?}: {source}")]
    InvalidStation {
        id: String,
        #[source]
        source: DomainError,
    },

    /// A line id or one of its branch station ids failed validation
    #[error("invalid line {id:?}: {source}")]
    InvalidLine {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl DataError {
    /// Attach the path of the file being loaded.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        DataError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
