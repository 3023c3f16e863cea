//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json, with a
//! category index backing the dependent-count check and category filters.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{CategoryId, Period, Transaction, TransactionId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// Hard cap on rows returned by a filtered listing; callers page past it
/// with [`TransactionFilter::offset`] or by narrowing the filter.
pub const MAX_LIST_ROWS: usize = 1000;

/// Filter for transaction listings
///
/// All criteria are conjunctive. Results are ordered date descending
/// (newest created first on equal dates) and capped at [`MAX_LIST_ROWS`]
/// rows starting at `offset`.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Restrict to a calendar month (half-open date range)
    pub period: Option<Period>,
    /// Restrict to a transaction kind
    pub kind: Option<TransactionKind>,
    /// Restrict to a category
    pub category_id: Option<CategoryId>,
    /// Number of matching rows to skip before the cap applies
    pub offset: usize,
}

impl TransactionFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(period) = self.period {
            if !period.contains(txn.date) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if txn.category_id != category_id {
                return false;
            }
        }
        true
    }
}

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: category_id -> transaction_ids
    by_category: RwLock<HashMap<CategoryId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and rebuild the category index
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_category.clear();

        for txn in file_data.transactions {
            by_category.entry(txn.category_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, ordered date descending
    pub fn get_all(&self) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Get matching transactions, ordered date descending, capped at
    /// [`MAX_LIST_ROWS`] rows after skipping `filter.offset` matches
    pub fn filter(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, BudgetError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| filter.matches(t))
            .skip(filter.offset)
            .take(MAX_LIST_ROWS)
            .collect())
    }

    /// Count transactions referencing a category
    pub fn count_by_category(&self, category_id: CategoryId) -> Result<usize, BudgetError> {
        let by_category = self
            .by_category
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_category.get(&category_id).map_or(0, |ids| ids.len()))
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Drop the old index entry when the category changed
        if let Some(old) = data.get(&txn.id) {
            if old.category_id != txn.category_id {
                if let Some(ids) = by_category.get_mut(&old.category_id) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        let ids = by_category.entry(txn.category_id).or_default();
        if !ids.contains(&txn.id) {
            ids.push(txn.id);
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction; returns whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_category = self
            .by_category
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(ids) = by_category.get_mut(&txn.category_id) {
                ids.retain(|&tid| tid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
