//! budgetbook - personal monthly budget tracking from the terminal
//!
//! This library provides the core functionality for the budgetbook CLI:
//! categories with monthly budget limits, dated transactions, and the
//! aggregation reports built on top of them. Amounts are stored as integer
//! cents so report totals stay exact.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, categories, transactions)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly/yearly summaries and budget status
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetbook::config::{paths::BudgetPaths, settings::Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
