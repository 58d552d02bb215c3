//! Path resolution for mindful configuration files.
//!
//! Everything lives in `~/.mindful/`:
//! - `config.yaml` - Main configuration file
//!
//! `MINDFUL_HOME` overrides the root directory.

use std::path::PathBuf;

use crate::error::MindfulError;

/// Environment variable that overrides the root directory.
pub const MINDFUL_HOME_ENV: &str = "MINDFUL_HOME";

/// Paths to mindful configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.mindful/`
    pub root: PathBuf,
    /// Config file: `~/.mindful/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `MINDFUL_HOME`, falling back to `$HOME/.mindful`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, MindfulError> {
        if let Some(root) = std::env::var_os(MINDFUL_HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var_os("HOME").ok_or_else(|| {
            MindfulError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".mindful")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), MindfulError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                MindfulError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
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
        let root = PathBuf::from("/tmp/test-mindful");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("mindful"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op.
        paths.ensure_dirs().unwrap();
    }
}
