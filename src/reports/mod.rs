//! Aggregation reports
//!
//! Each report has a pure `compute` over in-memory slices plus a `generate`
//! convenience that pulls from storage. Totals are summed in integer cents.

pub mod budget_status;
pub mod monthly;
pub mod yearly;

pub use budget_status::{BudgetStatus, CategoryBudgetStatus};
pub use monthly::{CategoryTotal, MonthlySummary};
pub use yearly::{MonthTotals, YearlySummary};
