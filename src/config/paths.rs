//! Path management for Spendora
//!
//! Provides XDG-compliant path resolution for configuration, the database,
//! and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDORA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendora` or `~/.config/spendora`
//! 3. Windows: `%APPDATA%\spendora`

use std::path::PathBuf;

use crate::error::SpendoraError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDORA_DATA_DIR";

/// Manages all paths used by Spendora
#[derive(Debug, Clone)]
pub struct SpendoraPaths {
    /// Base directory for all Spendora data
    base_dir: PathBuf,
}

impl SpendoraPaths {
    /// Create a new SpendoraPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendoraError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendoraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendora/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/spendora/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("spendora.db")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendoraError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendoraError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendoraError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendoraError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SpendoraError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spendora"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendoraError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendoraError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendora"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.database_file(),
            temp_dir.path().join("data").join("spendora.db")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
