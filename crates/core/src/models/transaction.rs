use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, freelance work, etc.)
    Income,
    /// Money going out (groceries, rent, etc.)
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Alphabetical by description
    DescriptionAsc,
    /// Reverse alphabetical by description
    DescriptionDesc,
}

/// A single recorded income or expense.
///
/// **Important**: `amount` is always positive. Direction is carried solely
/// by `kind`, never by a negative amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation time
    pub id: Uuid,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Currency amount (always positive, not rounded to whole units)
    pub amount: f64,

    /// Date of the transaction (no time component — daily granularity)
    pub date: NaiveDate,

    /// Free-text description (e.g., "Groceries", "Salary")
    pub description: String,

    /// Optional grouping label, reserved for category breakdowns
    #[serde(default)]
    pub category: Option<String>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            description: description.into(),
            category: None,
        }
    }

    /// Create a transaction with a category label attached.
    pub fn with_category(
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            description: description.into(),
            category: Some(category.into()),
        }
    }
}
