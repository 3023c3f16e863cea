//! Category service
//!
//! Provides business logic for category management: CRUD operations,
//! name-or-id lookup, and the dependent-transaction guard on delete.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, CategoryId, CategoryKind, CategoryPatch, Money};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        kind: CategoryKind,
        budget_limit: Option<Money>,
        color: Option<&str>,
    ) -> BudgetResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation("Category name cannot be empty".into()));
        }

        // Names double as lookup keys, keep them unique
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(BudgetError::Validation(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let mut category = Category::new(name, kind);
        if let Some(limit) = budget_limit {
            category.budget_limit = limit;
        }
        if let Some(color) = color {
            category.color = color.to_string();
        }

        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> BudgetResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> BudgetResult<Option<Category>> {
        self.storage.categories.get_by_name(name)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> BudgetResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// List all categories, ordered by name
    pub fn list(&self) -> BudgetResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Update a category
    ///
    /// The kind is immutable after creation; only name, budget limit and
    /// color can change.
    pub fn update(&self, id: CategoryId, patch: &CategoryPatch) -> BudgetResult<Category> {
        if patch.is_empty() {
            return Err(BudgetError::Validation("No fields to update".into()));
        }

        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        if let Some(ref new_name) = patch.name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(BudgetError::Validation("Category name cannot be empty".into()));
            }

            if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
                if existing.id != id {
                    return Err(BudgetError::Validation(format!(
                        "Category '{}' already exists",
                        new_name
                    )));
                }
            }

            category.name = new_name.to_string();
        }

        if let Some(limit) = patch.budget_limit {
            category.budget_limit = limit;
        }

        if let Some(ref color) = patch.color {
            category.color = color.clone();
        }

        category
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        Ok(category)
    }

    /// Delete a category
    ///
    /// Fails with [`BudgetError::CategoryInUse`] when any transaction still
    /// references the category; callers must reassign or delete those first.
    pub fn delete(&self, id: CategoryId) -> BudgetResult<()> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

        let transaction_count = self.storage.transactions.count_by_category(id)?;
        if transaction_count > 0 {
            return Err(BudgetError::CategoryInUse {
                name: category.name,
                transaction_count,
            });
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        Ok(())
    }
}
