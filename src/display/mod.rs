//! Terminal output formatting

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use report::{format_budget_status, format_monthly_summary, format_yearly_summary};
pub use transaction::format_transaction_list;
