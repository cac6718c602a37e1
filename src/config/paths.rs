//! Path resolution for wellb configuration and data files.
//!
//! All wellb data is stored in `~/.wellb/`:
//! - `config.yaml` - Main configuration file
//! - `wellness-tracker-v1.json` - The wellness data file (schema version
//!   in the name)

use std::path::PathBuf;

use crate::error::WellbError;
use crate::storage::STORE_FILE_NAME;

/// Paths to wellb configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.wellb/`
    pub root: PathBuf,
    /// Config file: `~/.wellb/config.yaml`
    pub config_file: PathBuf,
    /// Data file: `~/.wellb/wellness-tracker-v1.json`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WellbError> {
        let home = std::env::var("HOME")
            .map_err(|_| WellbError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".wellb")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join(STORE_FILE_NAME),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), WellbError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                WellbError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-wellb");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.data_file, root.join("wellness-tracker-v1.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".wellb"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
