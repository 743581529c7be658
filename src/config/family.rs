//! Per-save family limits

use super::{read_json, write_json};
use crate::error::{FamilyPlanningError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Cap used when the save has fewer dependents than this
pub const DEFAULT_MAX_DEPENDENTS: u32 = 2;
/// The host's own nightly question chance
pub const BASELINE_QUESTION_PERCENT: u32 = 5;
pub const MAX_QUESTION_PERCENT: u32 = 100;

/// Tunable limits for one save file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    /// Dependents at which the spouse stops asking; 0 disables asking
    #[serde(rename = "MaxChildren")]
    max_dependents: u32,
    /// Nightly chance in percent, 0..=100
    #[serde(rename = "BabyQuestionChance")]
    question_probability_percent: u32,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self::defaults_for(0)
    }
}

impl FamilyConfig {
    /// Build a config, rejecting a percentage above 100
    pub fn new(max_dependents: u32, question_probability_percent: u32) -> Result<Self> {
        if question_probability_percent > MAX_QUESTION_PERCENT {
            return Err(FamilyPlanningError::InvalidCommandInput(format!(
                "question chance {} is outside 0-{}",
                question_probability_percent, MAX_QUESTION_PERCENT
            )));
        }
        Ok(Self {
            max_dependents,
            question_probability_percent,
        })
    }

    /// Defaults for a save that already has `current_dependents`
    pub fn defaults_for(current_dependents: usize) -> Self {
        let current = u32::try_from(current_dependents).unwrap_or(u32::MAX);
        Self {
            max_dependents: current.max(DEFAULT_MAX_DEPENDENTS),
            question_probability_percent: BASELINE_QUESTION_PERCENT,
        }
    }

    #[inline]
    pub fn max_dependents(&self) -> u32 {
        self.max_dependents
    }

    #[inline]
    pub fn question_probability_percent(&self) -> u32 {
        self.question_probability_percent
    }

    /// Chance as a fraction in [0, 1]
    #[inline]
    pub fn question_probability(&self) -> f64 {
        f64::from(self.question_probability_percent) / 100.0
    }

    /// Whether the chance equals the host's unmodified one
    #[inline]
    pub fn is_baseline_probability(&self) -> bool {
        self.question_probability_percent == BASELINE_QUESTION_PERCENT
    }

    /// Whether the configured cap leaves room for another dependent
    #[inline]
    pub fn has_capacity_for(&self, dependent_count: usize) -> bool {
        dependent_count < self.max_dependents as usize
    }
}

/// File-backed owner of a save's [`FamilyConfig`]
///
/// Every setter writes the file before returning.
#[derive(Debug)]
pub struct FamilyConfigStore {
    path: PathBuf,
    config: FamilyConfig,
}

impl FamilyConfigStore {
    /// Conventional location: `<data_dir>/<save_name>.json`
    pub fn path_for_save(data_dir: &Path, save_name: &str) -> PathBuf {
        data_dir.join(format!("{}.json", save_name))
    }

    /// Load the save's config, synthesizing and persisting defaults when the
    /// file is missing or unreadable
    pub fn load_or_create(path: impl Into<PathBuf>, current_dependents: usize) -> Self {
        let path = path.into();

        let config = match read_json::<FamilyConfig>(&path) {
            Ok(config) => sanitize(config, &path),
            Err(err) => {
                if path.exists() {
                    warn!(path = %path.display(), error = %err, "family config unreadable, using defaults");
                } else {
                    warn!(path = %path.display(), "no family config yet, creating defaults");
                }

                let config = FamilyConfig::defaults_for(current_dependents);
                if let Err(err) = write_json(&path, &config) {
                    warn!(path = %path.display(), error = %err, "failed to write default family config");
                }
                config
            }
        };

        Self { path, config }
    }

    /// A store that starts from `config` without touching the disk
    pub fn with_config(path: impl Into<PathBuf>, config: FamilyConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &FamilyConfig {
        &self.config
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change the cap and persist it
    ///
    /// On a write failure the new value stays in effect for this session
    /// and the error is returned.
    pub fn set_max_dependents(&mut self, value: u32) -> Result<()> {
        self.config.max_dependents = value;
        self.persist()
    }

    /// Change the nightly chance and persist it; values above 100 are
    /// rejected without touching stored state
    pub fn set_question_probability_percent(&mut self, value: u32) -> Result<()> {
        self.config = FamilyConfig::new(self.config.max_dependents, value)?;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        write_json(&self.path, &self.config)
    }
}

fn sanitize(config: FamilyConfig, path: &Path) -> FamilyConfig {
    if config.question_probability_percent > MAX_QUESTION_PERCENT {
        warn!(
            path = %path.display(),
            value = config.question_probability_percent,
            "question chance above 100, clamping"
        );
        return FamilyConfig {
            question_probability_percent: MAX_QUESTION_PERCENT,
            ..config
        };
    }
    config
}
