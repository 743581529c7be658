//! Process-wide settings, read once at startup

use super::read_json;
use crate::error::{FamilyPlanningError, Result};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Global options shared by every save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Let a roommate partner ask to adopt
    #[serde(rename = "AdoptChildrenWithRoommate")]
    pub allow_adoption_with_cohabitant: bool,
    /// Report nightly eligibility to the console
    #[serde(rename = "BabyQuestionMessages")]
    pub verbose_eligibility_messages: bool,
}

impl GlobalSettings {
    /// Read the settings file; a missing or broken file yields all-false
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        match read_json(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "settings file unreadable, using defaults");
                Self::default()
            }
        }
    }
}

/// Settings for the running process
static GLOBAL_SETTINGS: OnceCell<Arc<RwLock<Option<GlobalSettings>>>> = OnceCell::new();

fn slot() -> &'static Arc<RwLock<Option<GlobalSettings>>> {
    GLOBAL_SETTINGS.get_or_init(|| Arc::new(RwLock::new(None)))
}

/// Install the process-wide settings (call once at startup)
pub fn init_global_settings(settings: GlobalSettings) {
    *slot().write() = Some(settings);
}

/// The installed settings
pub fn global_settings() -> Result<GlobalSettings> {
    let settings = *slot().read();
    settings.ok_or(FamilyPlanningError::SettingsNotInitialized)
}

/// Drop the installed settings so they can be read again
pub fn reset_global_settings() {
    *slot().write() = None;
}
