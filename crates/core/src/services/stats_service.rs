use std::collections::{BTreeMap, HashMap};

use crate::models::ledger::Ledger;
use crate::models::month::MonthKey;
use crate::models::stats::{CategoryTotal, DashboardStats, MonthlyTotal};
use crate::models::transaction::{Transaction, TransactionKind};

/// Number of transactions kept in the recent-activity list.
pub const RECENT_LIMIT: usize = 5;

/// Computes the dashboard view from the transaction collection.
///
/// Two paths produce the same result:
/// - [`compute`](Self::compute) — full scan of the ledger, used at seed
///   time and after edits/removals;
/// - [`apply_add`](Self::apply_add) — patches existing stats in place for
///   a single newly added transaction, so an add never rescans the ledger.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Build `DashboardStats` from scratch.
    ///
    /// One pass over the collection: sums per kind, monthly expense
    /// buckets, category breakdown. An empty ledger yields all-zero
    /// totals and empty series.
    pub fn compute(&self, ledger: &Ledger) -> DashboardStats {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        // BTreeMap keeps buckets ascending by (year, month) for free.
        let mut monthly: BTreeMap<MonthKey, f64> = BTreeMap::new();
        let mut categories: HashMap<String, f64> = HashMap::new();

        for transaction in &ledger.transactions {
            match transaction.kind {
                TransactionKind::Income => total_income += transaction.amount,
                TransactionKind::Expense => {
                    total_expenses += transaction.amount;

                    let key = MonthKey::from_date(transaction.date);
                    *monthly.entry(key).or_insert(0.0) += transaction.amount;

                    if let Some(category) = &transaction.category {
                        *categories.entry(category.clone()).or_insert(0.0) +=
                            transaction.amount;
                    }
                }
            }
        }

        let monthly_totals = monthly
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect();

        let mut category_totals: Vec<CategoryTotal> = categories
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect();
        Self::sort_category_totals(&mut category_totals);

        DashboardStats {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            recent_transactions: ledger
                .transactions
                .iter()
                .take(RECENT_LIMIT)
                .cloned()
                .collect(),
            monthly_totals,
            category_totals,
        }
    }

    /// Patch existing stats for one newly added transaction.
    ///
    /// The transaction must already sit at the front of the ledger the
    /// stats were computed from. Monthly buckets: an existing month is
    /// incremented in place (a bucket's position is fixed once inserted —
    /// only the (year, month) order determines position, never the total);
    /// a new month is inserted and the series re-sorted. Income never
    /// touches the monthly series.
    pub fn apply_add(&self, stats: &mut DashboardStats, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::Income => stats.total_income += transaction.amount,
            TransactionKind::Expense => stats.total_expenses += transaction.amount,
        }
        stats.balance = stats.total_income - stats.total_expenses;

        stats.recent_transactions.insert(0, transaction.clone());
        stats.recent_transactions.truncate(RECENT_LIMIT);

        if transaction.kind == TransactionKind::Expense {
            let key = MonthKey::from_date(transaction.date);
            match stats.monthly_totals.iter_mut().find(|m| m.month == key) {
                Some(bucket) => bucket.total += transaction.amount,
                None => {
                    stats.monthly_totals.push(MonthlyTotal {
                        month: key,
                        total: transaction.amount,
                    });
                    stats.monthly_totals.sort_by(|a, b| a.month.cmp(&b.month));
                }
            }

            if let Some(category) = &transaction.category {
                match stats
                    .category_totals
                    .iter_mut()
                    .find(|c| c.category == *category)
                {
                    Some(entry) => entry.total += transaction.amount,
                    None => stats.category_totals.push(CategoryTotal {
                        category: category.clone(),
                        total: transaction.amount,
                    }),
                }
                // Category order is total-descending, so any change can
                // reorder the list.
                Self::sort_category_totals(&mut stats.category_totals);
            }
        }
    }

    /// Largest total first; ties broken alphabetically so the order is
    /// deterministic.
    fn sort_category_totals(totals: &mut [CategoryTotal]) {
        totals.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
