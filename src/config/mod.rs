//! Configuration module
//!
//! Per-save family limits and the process-wide settings file, both stored
//! as JSON next to the host's mod data.

mod family;
mod settings;

pub use family::*;
pub use settings::*;

use crate::error::{FamilyPlanningError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON file
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| FamilyPlanningError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| FamilyPlanningError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize and write a JSON file, creating parent directories
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| FamilyPlanningError::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let text = serde_json::to_string_pretty(value).map_err(|source| {
        FamilyPlanningError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, text).map_err(|source| FamilyPlanningError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}
