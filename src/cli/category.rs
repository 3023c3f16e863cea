//! Category CLI commands
//!
//! Bridges clap argument parsing with the category service.

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryKind, CategoryPatch, Money};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: CategoryKind,
        /// Monthly budget limit (e.g., "500" or "500.00")
        #[arg(short, long)]
        budget: Option<String>,
        /// Display color (hex, e.g. "#E07A5F")
        #[arg(long)]
        color: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New monthly budget limit
        #[arg(short, long)]
        budget: Option<String>,
        /// New display color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category (fails if transactions reference it)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", format_category_list(&categories));
        }

        CategoryCommands::Create {
            name,
            kind,
            budget,
            color,
        } => {
            let budget_limit = budget.as_deref().map(parse_budget).transpose()?;
            let category = service.create(&name, kind, budget_limit, color.as_deref())?;

            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;
            print!("{}", format_category_details(&cat));
        }

        CategoryCommands::Edit {
            category,
            name,
            budget,
            color,
        } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            let patch = CategoryPatch {
                name,
                budget_limit: budget.as_deref().map(parse_budget).transpose()?,
                color,
            };

            let updated = service.update(cat.id, &patch)?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| BudgetError::category_not_found(&category))?;

            service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}

fn parse_budget(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(format!("Invalid budget amount: {}", e)))
}
