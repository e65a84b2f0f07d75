use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use super::transaction::Transaction;

/// Accumulated expense total for one calendar month.
///
/// Income is excluded from this series — it backs the "expenses over time"
/// bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month bucket
    pub month: MonthKey,

    /// Sum of expense amounts in this month (non-negative)
    pub total: f64,
}

/// Accumulated expense total for one category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category label, as entered on the transaction
    pub category: String,

    /// Sum of expense amounts carrying this label
    pub total: f64,
}

/// The derived aggregate view the dashboard renders: summary cards, the
/// recent-activity list, and the chart series.
///
/// The core computes these — the frontend just renders. A pure projection
/// of the ledger, never edited directly; rebuilt or patched after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of all income amounts
    pub total_income: f64,

    /// Sum of all expense amounts
    pub total_expenses: f64,

    /// `total_income - total_expenses`. Signed — may be negative.
    pub balance: f64,

    /// The most recently added transactions, newest first (at most five).
    /// Ordered by insertion, NOT by the date field.
    pub recent_transactions: Vec<Transaction>,

    /// One entry per distinct expense month, ascending by (year, month)
    pub monthly_totals: Vec<MonthlyTotal>,

    /// Expense totals per category label, largest first
    pub category_totals: Vec<CategoryTotal>,
}
