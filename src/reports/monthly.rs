//! Monthly summary report
//!
//! Aggregates one calendar month of transactions into income, expense and
//! investment totals plus a per-category breakdown.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{Category, CategoryId, CategoryKind, Money, Period, Transaction};
use crate::storage::Storage;

/// Per-category total within a month
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    /// Category ID, kept even when it no longer resolves so historical
    /// rows stay traceable
    pub category_id: CategoryId,
    /// Category name, or "Unknown" when the category cannot be resolved
    pub category_name: String,
    /// The category's kind; unresolved categories count as expense
    pub kind: CategoryKind,
    /// Total amount recorded against this category
    pub total: Money,
    /// The category's monthly budget limit (zero when unset)
    pub budget_limit: Money,
    /// Display color
    pub color: String,
    /// Number of transactions
    pub transaction_count: usize,
}

/// Monthly summary report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    /// The month this summary covers; serialized as `year`/`month` scalars
    #[serde(flatten)]
    pub period: Period,
    /// Sum of income transactions
    pub total_income: Money,
    /// Sum of expense transactions
    pub total_expenses: Money,
    /// Sum of investment transactions
    pub total_investments: Money,
    /// Income minus expenses; investments are tracked separately
    pub balance: Money,
    /// Totals per category across all kinds, largest first
    #[serde(rename = "category_breakdown")]
    pub by_category: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Compute a monthly summary from in-memory data
    ///
    /// Transactions outside `period` are ignored, so callers may pass an
    /// unfiltered slice.
    pub fn compute(transactions: &[Transaction], categories: &[Category], period: Period) -> Self {
        let category_map: HashMap<CategoryId, &Category> =
            categories.iter().map(|c| (c.id, c)).collect();

        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut total_investments = Money::zero();
        let mut per_category: HashMap<CategoryId, (Money, usize)> = HashMap::new();

        for txn in transactions.iter().filter(|t| period.contains(t.date)) {
            if txn.kind.is_income() {
                total_income += txn.amount;
            } else if txn.kind.is_investment() {
                total_investments += txn.amount;
            } else {
                total_expenses += txn.amount;
            }

            let entry = per_category
                .entry(txn.category_id)
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut by_category: Vec<CategoryTotal> = per_category
            .into_iter()
            .map(|(id, (total, count))| match category_map.get(&id) {
                Some(category) => CategoryTotal {
                    category_id: id,
                    category_name: category.name.clone(),
                    kind: category.kind,
                    total,
                    budget_limit: category.budget_limit,
                    color: category.color.clone(),
                    transaction_count: count,
                },
                None => CategoryTotal {
                    category_id: id,
                    category_name: "Unknown".to_string(),
                    kind: CategoryKind::Expense,
                    total,
                    budget_limit: Money::zero(),
                    color: crate::models::DEFAULT_COLOR.to_string(),
                    transaction_count: count,
                },
            })
            .collect();

        // Largest spend first, names break ties for stable output
        by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        Self {
            period,
            total_income,
            total_expenses,
            total_investments,
            balance: total_income - total_expenses,
            by_category,
        }
    }

    /// Generate a monthly summary from storage
    pub fn generate(storage: &Storage, period: Period) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        Ok(Self::compute(&transactions, &categories, period))
    }
}
