//! Yearly summary report
//!
//! Rolls a whole calendar year up into twelve per-month totals plus the
//! yearly aggregates. Months without transactions appear as zero rows so the
//! output always has exactly twelve entries.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{Money, Period, Transaction};
use crate::storage::Storage;

/// Totals for a single month within a yearly summary
#[derive(Debug, Clone, Serialize)]
pub struct MonthTotals {
    /// The month these totals cover; serialized as `year`/`month` scalars
    #[serde(flatten)]
    pub period: Period,
    /// Sum of income transactions
    pub income: Money,
    /// Sum of expense transactions
    pub expenses: Money,
    /// Sum of investment transactions
    pub investments: Money,
    /// Income minus expenses
    pub balance: Money,
}

/// Yearly summary report
#[derive(Debug, Clone, Serialize)]
pub struct YearlySummary {
    /// The year this summary covers
    pub year: i32,
    /// Twelve entries, January through December
    #[serde(rename = "monthly_data")]
    pub months: Vec<MonthTotals>,
    /// Sum of income across the year
    pub total_income: Money,
    /// Sum of expenses across the year
    pub total_expenses: Money,
    /// Sum of investments across the year
    pub total_investments: Money,
    /// Yearly income minus yearly expenses
    pub balance: Money,
}

impl YearlySummary {
    /// Compute a yearly summary from in-memory data
    ///
    /// Transactions outside `year` are ignored.
    pub fn compute(transactions: &[Transaction], year: i32) -> Self {
        let months: Vec<MonthTotals> = Period::months_of(year)
            .map(|period| {
                let mut income = Money::zero();
                let mut expenses = Money::zero();
                let mut investments = Money::zero();

                for txn in transactions.iter().filter(|t| period.contains(t.date)) {
                    if txn.kind.is_income() {
                        income += txn.amount;
                    } else if txn.kind.is_investment() {
                        investments += txn.amount;
                    } else {
                        expenses += txn.amount;
                    }
                }

                MonthTotals {
                    period,
                    income,
                    expenses,
                    investments,
                    balance: income - expenses,
                }
            })
            .collect();

        let total_income: Money = months.iter().map(|m| m.income).sum();
        let total_expenses: Money = months.iter().map(|m| m.expenses).sum();
        let total_investments: Money = months.iter().map(|m| m.investments).sum();

        Self {
            year,
            months,
            total_income,
            total_expenses,
            total_investments,
            balance: total_income - total_expenses,
        }
    }

    /// Generate a yearly summary from storage
    pub fn generate(storage: &Storage, year: i32) -> BudgetResult<Self> {
        let transactions = storage.transactions.get_all()?;
        Ok(Self::compute(&transactions, year))
    }
}
