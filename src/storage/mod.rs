//! Storage layer for budgetbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::{TransactionFilter, TransactionRepository, MAX_LIST_ROWS};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BudgetError> {
        self.categories.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.categories.save()?;
        self.transactions.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.categories.count().unwrap(), 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
