//! Transaction model
//!
//! A transaction is a single dated monetary event. Its kind (income,
//! expense, investment) classifies it for aggregation independently of the
//! kind of the category it is filed under.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Classification of a transaction for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
    Investment,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    pub fn is_investment(&self) -> bool {
        matches!(self, Self::Investment)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Investment => write!(f, "investment"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "investment" => Ok(Self::Investment),
            other => Err(format!("unknown transaction kind: {}", other)),
        }
    }
}

/// A single dated monetary event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Classification for aggregation
    pub kind: TransactionKind,

    /// Amount, strictly positive; sign is carried by `kind`
    pub amount: Money,

    /// The category this transaction is filed under
    pub category_id: CategoryId,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Calendar date; the sole source of period membership
    pub date: NaiveDate,

    /// When the transaction was created, never mutated
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with an empty description
    pub fn new(kind: TransactionKind, amount: Money, category_id: CategoryId, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category_id,
            description: String::new(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Partial update for a transaction; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let category_id = CategoryId::new();
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(4599),
            category_id,
            test_date(),
        );

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount.cents(), 4599);
        assert_eq!(txn.category_id, category_id);
        assert!(txn.description.is_empty());
    }

    #[test]
    fn test_validation_rejects_non_positive_amount() {
        let mut txn = Transaction::new(
            TransactionKind::Income,
            Money::from_cents(100),
            CategoryId::new(),
            test_date(),
        );
        assert!(txn.validate().is_ok());

        txn.amount = Money::zero();
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        txn.amount = Money::from_cents(-100);
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "investment".parse::<TransactionKind>().unwrap(),
            TransactionKind::Investment
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Investment).unwrap(),
            r#""investment""#
        );
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TransactionPatch::default().is_empty());
        let patch = TransactionPatch {
            amount: Some(Money::from_cents(100)),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let txn = Transaction::new(
            TransactionKind::Investment,
            Money::from_cents(20000),
            CategoryId::new(),
            test_date(),
        );
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.kind, deserialized.kind);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.date, deserialized.date);
    }

    #[test]
    fn test_display() {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(5000),
            CategoryId::new(),
            test_date(),
        );
        txn.description = "Weekly shop".to_string();
        assert_eq!(format!("{}", txn), "2025-06-15 expense $50.00");
    }
}
