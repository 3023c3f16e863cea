//! Report CLI commands
//!
//! Runs the aggregation reports and prints them as tables or JSON.

use chrono::Datelike;
use clap::Subcommand;

use crate::display::{format_budget_status, format_monthly_summary, format_yearly_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Period;
use crate::reports::{BudgetStatus, MonthlySummary, YearlySummary};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly income/expense summary with a category breakdown
    Monthly {
        /// Month to report on (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Month-by-month totals for a whole year
    Yearly {
        /// Year to report on; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spending versus budget limits per expense category
    Budget {
        /// Month to report on (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BudgetResult<()> {
    match cmd {
        ReportCommands::Monthly { month, json } => {
            let period = resolve_period(month.as_deref())?;
            let summary = MonthlySummary::generate(storage, period)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_monthly_summary(&summary));
            }
        }

        ReportCommands::Yearly { year, json } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let summary = YearlySummary::generate(storage, year)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_yearly_summary(&summary));
            }
        }

        ReportCommands::Budget { month, json } => {
            let period = resolve_period(month.as_deref())?;
            let status = BudgetStatus::generate(storage, period)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print!("{}", format_budget_status(&status));
            }
        }
    }

    Ok(())
}

fn resolve_period(month: Option<&str>) -> BudgetResult<Period> {
    match month {
        Some(s) => Period::parse(s).map_err(|e| BudgetError::Validation(e.to_string())),
        None => Ok(Period::current()),
    }
}
