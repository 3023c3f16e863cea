//! Business logic services
//!
//! Services apply validation and referential checks on top of the storage
//! repositories; they are the only layer the CLI talks to for writes.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::TransactionService;
