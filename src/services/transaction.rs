//! Transaction service
//!
//! Provides business logic for recording, listing, updating and deleting
//! transactions. Every write validates the transaction and checks that the
//! referenced category exists before anything touches disk.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionKind, TransactionPatch};
use crate::storage::{Storage, TransactionFilter};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(
        &self,
        kind: TransactionKind,
        amount: Money,
        category_id: CategoryId,
        description: &str,
        date: NaiveDate,
    ) -> BudgetResult<Transaction> {
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(BudgetError::category_not_found(category_id.to_string()));
        }

        let mut txn = Transaction::new(kind, amount, category_id, date);
        txn.description = description.trim().to_string();

        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> BudgetResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions matching a filter
    ///
    /// Results are ordered date descending and capped at
    /// [`crate::storage::MAX_LIST_ROWS`] rows; use `filter.offset` to page.
    pub fn list(&self, filter: &TransactionFilter) -> BudgetResult<Vec<Transaction>> {
        if let Some(category_id) = filter.category_id {
            if self.storage.categories.get(category_id)?.is_none() {
                return Err(BudgetError::category_not_found(category_id.to_string()));
            }
        }
        self.storage.transactions.filter(filter)
    }

    /// Update a transaction
    pub fn update(&self, id: TransactionId, patch: &TransactionPatch) -> BudgetResult<Transaction> {
        if patch.is_empty() {
            return Err(BudgetError::Validation("No fields to update".into()));
        }

        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| BudgetError::transaction_not_found(id.to_string()))?;

        if let Some(category_id) = patch.category_id {
            if self.storage.categories.get(category_id)?.is_none() {
                return Err(BudgetError::category_not_found(category_id.to_string()));
            }
            txn.category_id = category_id;
        }

        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(ref description) = patch.description {
            txn.description = description.trim().to_string();
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }

        txn.validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> BudgetResult<()> {
        if !self.storage.transactions.delete(id)? {
            return Err(BudgetError::transaction_not_found(id.to_string()));
        }
        self.storage.transactions.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Category, CategoryKind, Period};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, CategoryId) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let category = Category::new("Groceries", CategoryKind::Expense);
        let category_id = category.id;
        storage.categories.upsert(category).unwrap();

        (temp_dir, storage, category_id)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(
                TransactionKind::Expense,
                Money::from_cents(4599),
                category_id,
                "Weekly shop",
                date(2025, 6, 15),
            )
            .unwrap();

        assert_eq!(txn.amount.cents(), 4599);
        assert_eq!(txn.description, "Weekly shop");
        assert!(service.get(txn.id).unwrap().is_some());
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let (_temp_dir, storage, _) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.create(
            TransactionKind::Expense,
            Money::from_cents(100),
            CategoryId::new(),
            "",
            date(2025, 6, 15),
        );
        assert!(matches!(result, Err(BudgetError::NotFound { .. })));
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let result = service.create(
            TransactionKind::Expense,
            Money::zero(),
            category_id,
            "",
            date(2025, 6, 15),
        );
        assert!(matches!(result, Err(BudgetError::Validation(_))));

        // Nothing was written
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_list_with_period_filter() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(TransactionKind::Expense, Money::from_cents(100), category_id, "", date(2025, 5, 31))
            .unwrap();
        service
            .create(TransactionKind::Expense, Money::from_cents(200), category_id, "", date(2025, 6, 15))
            .unwrap();

        let filter = TransactionFilter {
            period: Period::new(2025, 6),
            ..Default::default()
        };
        let june = service.list(&filter).unwrap();
        assert_eq!(june.len(), 1);
        assert_eq!(june[0].amount.cents(), 200);
    }

    #[test]
    fn test_list_rejects_unknown_category_filter() {
        let (_temp_dir, storage, _) = create_test_storage();
        let service = TransactionService::new(&storage);

        let filter = TransactionFilter {
            category_id: Some(CategoryId::new()),
            ..Default::default()
        };
        assert!(matches!(
            service.list(&filter),
            Err(BudgetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(TransactionKind::Expense, Money::from_cents(100), category_id, "", date(2025, 6, 15))
            .unwrap();

        let patch = TransactionPatch {
            amount: Some(Money::from_cents(250)),
            description: Some("Corrected".to_string()),
            ..Default::default()
        };
        let updated = service.update(txn.id, &patch).unwrap();

        assert_eq!(updated.amount.cents(), 250);
        assert_eq!(updated.description, "Corrected");
    }

    #[test]
    fn test_update_rejects_empty_patch() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(TransactionKind::Expense, Money::from_cents(100), category_id, "", date(2025, 6, 15))
            .unwrap();

        let result = service.update(txn.id, &TransactionPatch::default());
        assert!(matches!(result, Err(BudgetError::Validation(_))));
    }

    #[test]
    fn test_update_rejects_unknown_category() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(TransactionKind::Expense, Money::from_cents(100), category_id, "", date(2025, 6, 15))
            .unwrap();

        let patch = TransactionPatch {
            category_id: Some(CategoryId::new()),
            ..Default::default()
        };
        assert!(matches!(
            service.update(txn.id, &patch),
            Err(BudgetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, storage, category_id) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(TransactionKind::Expense, Money::from_cents(100), category_id, "", date(2025, 6, 15))
            .unwrap();

        service.delete(txn.id).unwrap();
        assert!(service.get(txn.id).unwrap().is_none());

        let result = service.delete(txn.id);
        assert!(matches!(result, Err(BudgetError::NotFound { .. })));
    }
}
