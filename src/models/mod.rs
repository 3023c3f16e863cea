//! Core data models
//!
//! Value types shared across storage, services and reports: strongly-typed
//! IDs, fixed-point money, calendar periods, categories and transactions.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, CategoryKind, CategoryPatch, DEFAULT_COLOR};
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use period::Period;
pub use transaction::{Transaction, TransactionKind, TransactionPatch};
