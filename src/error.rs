//! Error types for budgetbook
//!
//! A single error enum covers the storage layer, the services, and input
//! validation, defined with thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budgetbook operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors raised before any write
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Category delete blocked because transactions still reference it
    #[error("Cannot delete category '{name}': {transaction_count} transactions reference it")]
    CategoryInUse {
        name: String,
        transaction_count: usize,
    },

    /// Storage errors (lock poisoning, corrupt files)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a blocked category delete
    pub fn is_category_in_use(&self) -> bool {
        matches!(self, Self::CategoryInUse { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budgetbook operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Validation("amount must be positive".into());
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("cat-1234");
        assert_eq!(err.to_string(), "Category not found: cat-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_category_in_use_error() {
        let err = BudgetError::CategoryInUse {
            name: "Groceries".into(),
            transaction_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Cannot delete category 'Groceries': 3 transactions reference it"
        );
        assert!(err.is_category_in_use());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
