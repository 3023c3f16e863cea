//! Transaction display formatting

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryId, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a table of transactions, resolving category names
pub fn format_transaction_list(transactions: &[Transaction], categories: &[Category]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow {
            date: t.date.format("%Y-%m-%d").to_string(),
            kind: t.kind.to_string(),
            amount: t.amount.to_string(),
            category: names
                .get(&t.category_id)
                .copied()
                .unwrap_or("Unknown")
                .to_string(),
            description: t.description.clone(),
            id: t.id.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
