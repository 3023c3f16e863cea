//! Transaction CLI commands
//!
//! Bridges clap argument parsing with the transaction service.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Period, TransactionId, TransactionKind, TransactionPatch};
use crate::services::{CategoryService, TransactionService};
use crate::storage::{Storage, TransactionFilter};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "45.99")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction kind: income, expense or investment
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List transactions
    List {
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Filter by kind: income, expense or investment
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Number of rows to show; defaults to the configured list limit
        #[arg(short, long)]
        limit: Option<usize>,
        /// Skip this many matching rows (for paging)
        #[arg(long, default_value = "0")]
        offset: usize,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New kind
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let categories = CategoryService::new(storage);
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let cat = categories
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(kind, amount, cat.id, &description, date)?;

            println!("Recorded {} of {} in '{}'", txn.kind, txn.amount, cat.name);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            month,
            kind,
            category,
            limit,
            offset,
        } => {
            let period = month.as_deref().map(parse_month).transpose()?;
            let category_id = match category {
                Some(ref identifier) => Some(
                    categories
                        .find(identifier)?
                        .ok_or_else(|| BudgetError::category_not_found(identifier))?
                        .id,
                ),
                None => None,
            };

            let filter = TransactionFilter {
                period,
                kind,
                category_id,
                offset,
            };

            let mut transactions = service.list(&filter)?;
            transactions.truncate(limit.unwrap_or(settings.list_limit));

            let all_categories = categories.list()?;
            println!("{}", format_transaction_list(&transactions, &all_categories));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let id = parse_id(&id)?;

            let category_id = match category {
                Some(ref identifier) => Some(
                    categories
                        .find(identifier)?
                        .ok_or_else(|| BudgetError::category_not_found(identifier))?
                        .id,
                ),
                None => None,
            };

            let patch = TransactionPatch {
                kind,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category_id,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let updated = service.update(id, &patch)?;
            println!("Updated transaction: {}", updated.id);
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            service.delete(id)?;
            println!("Deleted transaction: {}", id);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

fn parse_month(s: &str) -> BudgetResult<Period> {
    Period::parse(s).map_err(|e| BudgetError::Validation(e.to_string()))
}

fn parse_id(s: &str) -> BudgetResult<TransactionId> {
    s.parse::<TransactionId>()
        .map_err(|_| BudgetError::transaction_not_found(s))
}
