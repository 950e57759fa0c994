//! User settings for Draagkracht
//!
//! Display preferences and planner defaults. The legal amounts used by the
//! engine are fixed and deliberately not configurable here.

use serde::{Deserialize, Serialize};

use super::paths::DraagkrachtPaths;
use crate::engine::DistributionStrategy;
use crate::error::DraagkrachtError;

/// User settings for Draagkracht
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Strategy used by `distribute` and `plan` when none is given
    #[serde(default)]
    pub default_strategy: DistributionStrategy,

    /// Extra name fragments that mark a groceries pot
    #[serde(default)]
    pub priority_keywords: Vec<String>,

    /// Snapshot file, relative to the base directory unless absolute
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_snapshot_file() -> String {
    "household.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_strategy: DistributionStrategy::default(),
            priority_keywords: Vec::new(),
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &DraagkrachtPaths) -> Result<Self, DraagkrachtError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DraagkrachtError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DraagkrachtError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DraagkrachtPaths) -> Result<(), DraagkrachtError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DraagkrachtError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DraagkrachtError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
