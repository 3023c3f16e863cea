use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetbook::cli::{
    handle_category_command, handle_report_command, handle_transaction_command, CategoryCommands,
    ReportCommands, TransactionCommands,
};
use budgetbook::config::{paths::BudgetPaths, settings::Settings};
use budgetbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Personal monthly budget tracking from the terminal",
    long_about = "budgetbook tracks income, expenses and investments against \
                  monthly category budgets. Data lives in plain JSON files \
                  under your config directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Summary and budget reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("budgetbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  List limit:      {}", settings.list_limit);
        }
        None => {
            println!("budgetbook - personal monthly budget tracking");
            println!();
            println!("Run 'budgetbook --help' for usage information.");
        }
    }

    Ok(())
}
