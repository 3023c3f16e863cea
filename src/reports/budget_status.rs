//! Budget status report
//!
//! Compares each expense category's spending in a month against its budget
//! limit. Categories without a limit still appear so the listing is complete,
//! but their percentage stays at zero and they can never be over budget.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{Category, CategoryId, Money, Period, Transaction};
use crate::storage::Storage;

/// Budget standing for a single expense category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBudgetStatus {
    /// Category ID
    pub category_id: CategoryId,
    /// Category name
    pub category_name: String,
    /// Monthly budget limit (zero when unset)
    pub budget_limit: Money,
    /// Amount spent in the period
    pub spent: Money,
    /// Limit minus spent, clamped at zero
    pub remaining: Money,
    /// Spent over limit as a percentage, clamped to [0, 100]; 0 when no limit
    pub percentage: f64,
    /// True only when a limit is set and spending exceeds it
    pub over_budget: bool,
    /// Display color
    pub color: String,
}

/// Budget status report for one month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    /// The month this report covers
    pub period: Period,
    /// One entry per expense category, ordered by name
    pub categories: Vec<CategoryBudgetStatus>,
}

impl BudgetStatus {
    /// Compute the budget status from in-memory data
    ///
    /// Only expense-kind transactions inside `period` count as spending;
    /// income and investments never consume a budget.
    pub fn compute(transactions: &[Transaction], categories: &[Category], period: Period) -> Self {
        let mut spent_by_category: HashMap<CategoryId, Money> = HashMap::new();

        for txn in transactions
            .iter()
            .filter(|t| t.kind.is_expense() && period.contains(t.date))
        {
            *spent_by_category
                .entry(txn.category_id)
                .or_insert(Money::zero()) += txn.amount;
        }

        let mut entries: Vec<CategoryBudgetStatus> = categories
            .iter()
            .filter(|c| c.kind.is_expense())
            .map(|category| {
                let spent = spent_by_category
                    .get(&category.id)
                    .copied()
                    .unwrap_or_else(Money::zero);
                let limit = category.budget_limit;

                let percentage = spent.percent_of(limit).clamp(0.0, 100.0);

                CategoryBudgetStatus {
                    category_id: category.id,
                    category_name: category.name.clone(),
                    budget_limit: limit,
                    spent,
                    remaining: limit.saturating_sub_to_zero(spent),
                    percentage,
                    over_budget: limit.is_positive() && spent > limit,
                    color: category.color.clone(),
                }
            })
            .collect();

        entries.sort_by(|a, b| a.category_name.cmp(&b.category_name));

        Self {
            period,
            categories: entries,
        }
    }

    /// Generate a budget status report from storage
    pub fn generate(storage: &Storage, period: Period) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        Ok(Self::compute(&transactions, &categories, period))
    }

    /// Entries currently over their limit
    pub fn over_budget(&self) -> impl Iterator<Item = &CategoryBudgetStatus> {
        self.categories.iter().filter(|c| c.over_budget)
    }
}
