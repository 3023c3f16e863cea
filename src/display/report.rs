//! Report display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{BudgetStatus, MonthlySummary, YearlySummary};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Txns")]
    count: usize,
}

/// Format a monthly summary for terminal display
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Summary: {}\n\n", summary.period));
    output.push_str(&format!("  Income:      {}\n", summary.total_income));
    output.push_str(&format!("  Expenses:    {}\n", summary.total_expenses));
    output.push_str(&format!("  Investments: {}\n", summary.total_investments));
    output.push_str(&format!("  Balance:     {}\n", summary.balance));

    if !summary.by_category.is_empty() {
        let rows: Vec<BreakdownRow> = summary
            .by_category
            .iter()
            .map(|c| BreakdownRow {
                category: c.category_name.clone(),
                kind: c.kind.to_string(),
                total: c.total.to_string(),
                budget: if c.budget_limit.is_positive() {
                    c.budget_limit.to_string()
                } else {
                    "-".to_string()
                },
                count: c.transaction_count,
            })
            .collect();

        output.push('\n');
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Investments")]
    investments: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a yearly summary for terminal display
pub fn format_yearly_summary(summary: &YearlySummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Yearly Summary: {}\n\n", summary.year));

    let rows: Vec<MonthRow> = summary
        .months
        .iter()
        .map(|m| MonthRow {
            month: m.period.to_string(),
            income: m.income.to_string(),
            expenses: m.expenses.to_string(),
            investments: m.investments.to_string(),
            balance: m.balance.to_string(),
        })
        .collect();

    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');

    output.push_str(&format!("\n  Income:      {}\n", summary.total_income));
    output.push_str(&format!("  Expenses:    {}\n", summary.total_expenses));
    output.push_str(&format!("  Investments: {}\n", summary.total_investments));
    output.push_str(&format!("  Balance:     {}\n", summary.balance));

    output
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format a budget status report for terminal display
pub fn format_budget_status(status: &BudgetStatus) -> String {
    if status.categories.is_empty() {
        return format!(
            "Budget Status: {}\n\nNo expense categories found.",
            status.period
        );
    }

    let rows: Vec<BudgetRow> = status
        .categories
        .iter()
        .map(|c| BudgetRow {
            category: c.category_name.clone(),
            budget: if c.budget_limit.is_positive() {
                c.budget_limit.to_string()
            } else {
                "-".to_string()
            },
            spent: c.spent.to_string(),
            remaining: if c.budget_limit.is_positive() {
                c.remaining.to_string()
            } else {
                "-".to_string()
            },
            used: if c.budget_limit.is_positive() {
                format!("{:.0}%", c.percentage)
            } else {
                "-".to_string()
            },
            status: if c.over_budget {
                "OVER".to_string()
            } else {
                "ok".to_string()
            },
        })
        .collect();

    format!(
        "Budget Status: {}\n\n{}\n",
        status.period,
        Table::new(rows).with(Style::rounded())
    )
}
