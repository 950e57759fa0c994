//! Path management for Draagkracht
//!
//! ## Path Resolution Order
//!
//! 1. `DRAAGKRACHT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/draagkracht` or `~/.config/draagkracht`
//! 3. Windows: `%APPDATA%\draagkracht`

use std::path::PathBuf;

use crate::error::DraagkrachtError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DRAAGKRACHT_DATA_DIR";

/// Manages all paths used by Draagkracht
#[derive(Debug, Clone)]
pub struct DraagkrachtPaths {
    base_dir: PathBuf,
}

impl DraagkrachtPaths {
    /// Create a new DraagkrachtPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DraagkrachtError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a snapshot file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn snapshot_file(&self, name: &str) -> PathBuf {
        let path = PathBuf::from(name);
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DraagkrachtError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DraagkrachtError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Draagkracht has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DraagkrachtError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                DraagkrachtError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("draagkracht"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DraagkrachtError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DraagkrachtError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("draagkracht"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DraagkrachtPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_snapshot_file_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DraagkrachtPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.snapshot_file("household.json"),
            temp_dir.path().join("household.json")
        );

        let absolute = temp_dir.path().join("elsewhere.yaml");
        assert_eq!(paths.snapshot_file(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DraagkrachtPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
