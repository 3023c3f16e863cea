//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for category in file_data.categories {
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = CategoryData { categories };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all categories, ordered by name ascending
    pub fn get_all(&self) -> Result<Vec<Category>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(category.id, category);
        Ok(())
    }

    /// Delete a category; returns whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
