//! User settings for Spendora
//!
//! Manages user preferences such as the currency symbol, the default category
//! for new expenses, and the default number of rows shown by `list`.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendoraPaths;
use crate::error::SpendoraError;

/// Category assigned to expenses added without one
pub const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// User settings for Spendora
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category used by `add` when none is given
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Number of rows `list` shows when no limit is given
    #[serde(default = "default_list_limit")]
    pub default_list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_list_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_category: default_category(),
            default_list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendoraPaths) -> Result<Self, SpendoraError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SpendoraError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SpendoraError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), SpendoraError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SpendoraError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendoraPaths) -> Result<(), SpendoraError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendoraError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendoraError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
