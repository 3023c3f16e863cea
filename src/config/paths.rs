//! Path management for budgetbook
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgetbook` or `~/.config/budgetbook`
//! 3. Windows: `%APPDATA%\budgetbook`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Manages all paths used by budgetbook
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all budgetbook data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// Path resolution:
    /// 1. `BUDGETBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/budgetbook` or `~/.config/budgetbook`
    /// 3. Windows: `%APPDATA%\budgetbook`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("BUDGETBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budgetbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/budgetbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let base = directories::BaseDirs::new().ok_or_else(|| {
                BudgetError::Config("Could not determine home directory".into())
            })?;
            base.home_dir().join(".config")
        }
    };
    Ok(config_base.join("budgetbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgetbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("BUDGETBOOK_DATA_DIR", custom_path);

        let paths = BudgetPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("BUDGETBOOK_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.categories_file(),
            temp_dir.path().join("data").join("categories.json")
        );
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }
}
