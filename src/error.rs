//! Error types for the family planning core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the family planning core
///
/// The decision engines themselves never fail; these errors come from file
/// access, command parsing and the host binding layer.
#[derive(Error, Debug)]
pub enum FamilyPlanningError {
    #[error("Failed to access {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid command input: {0}")]
    InvalidCommandInput(String),

    #[error("Malformed host data: {0}")]
    HostData(#[source] serde_json::Error),

    #[error("Content pack error: {0}")]
    ContentPack(String),

    #[error("No save file is loaded")]
    SessionNotLoaded,

    #[error("Global settings not initialized")]
    SettingsNotInitialized,
}

#[cfg(feature = "python")]
impl From<FamilyPlanningError> for pyo3::PyErr {
    fn from(err: FamilyPlanningError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};

        match err {
            FamilyPlanningError::ConfigIo { .. } => PyIOError::new_err(err.to_string()),
            FamilyPlanningError::ConfigParse { .. }
            | FamilyPlanningError::InvalidCommandInput(_)
            | FamilyPlanningError::HostData(_)
            | FamilyPlanningError::ContentPack(_) => PyValueError::new_err(err.to_string()),
            FamilyPlanningError::SessionNotLoaded
            | FamilyPlanningError::SettingsNotInitialized => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

/// Result type alias for the family planning core
pub type Result<T> = std::result::Result<T, FamilyPlanningError>;
