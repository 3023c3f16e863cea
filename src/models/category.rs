//! Category model
//!
//! Categories are named buckets transactions are assigned to. Expense
//! categories may carry a monthly budget limit; a zero limit means "no
//! limit" and excludes the category from over-budget checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Display color assigned to categories created without an explicit one
pub const DEFAULT_COLOR: &str = "#3D405B";

/// Maximum accepted category name length
const MAX_NAME_LEN: usize = 50;

/// Whether a category buckets income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    #[default]
    Expense,
}

impl CategoryKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown category kind: {}", other)),
        }
    }
}

/// A budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, immutable after creation
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Whether this category buckets income or expenses
    pub kind: CategoryKind,

    /// Monthly budget limit; zero means no limit
    #[serde(default)]
    pub budget_limit: Money,

    /// Display color token
    #[serde(default = "default_color")]
    pub color: String,

    /// When the category was created, never mutated
    pub created_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Category {
    /// Create a new category with no budget limit and the default color
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            budget_limit: Money::zero(),
            color: default_color(),
            created_at: Utc::now(),
        }
    }

    /// Whether this category participates in budget-status computation
    pub fn has_budget(&self) -> bool {
        self.kind.is_expense() && self.budget_limit.is_positive()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }
        if self.budget_limit.is_negative() {
            return Err(CategoryValidationError::NegativeBudgetLimit);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Partial update for a category; `None` fields are left unchanged
///
/// `kind` and `created_at` are immutable and have no patch field.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub budget_limit: Option<Money>,
    pub color: Option<String>,
}

impl CategoryPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.budget_limit.is_none() && self.color.is_none()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudgetLimit,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NegativeBudgetLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
