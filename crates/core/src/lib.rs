pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    ledger::Ledger,
    settings::Settings,
    stats::DashboardStats,
    transaction::{Transaction, TransactionKind, TransactionSortOrder},
};
use services::{ledger_service::LedgerService, stats_service::StatsService};
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the Finance Tracker core library.
/// Owns the transaction ledger and the derived dashboard stats, and keeps
/// the two consistent across every mutation.
///
/// Single-owner by construction: all mutation goes through `&mut self`, so
/// operations run to completion one at a time. A multi-threaded host must
/// confine the tracker to one owner (a lock or a single task).
#[must_use]
pub struct FinanceTracker {
    ledger: Ledger,
    ledger_service: LedgerService,
    stats_service: StatsService,
    stats: DashboardStats,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("transactions", &self.ledger.transactions.len())
            .field("balance", &self.stats.balance)
            .field("settings", &self.ledger.settings)
            .finish()
    }
}

impl FinanceTracker {
    /// Create a brand new empty tracker with default settings.
    pub fn create_new() -> Self {
        Self::build(Ledger::default())
    }

    /// Create a tracker pre-populated with a seed collection, as handed
    /// over by the hosting frontend at session start.
    pub fn with_transactions(seed: Vec<Transaction>) -> Self {
        let mut tracker = Self::create_new();
        tracker.initialize(seed);
        tracker
    }

    /// Replace the transaction collection with `seed` and rebuild the
    /// stats from scratch.
    ///
    /// The seed's own order is taken as insertion order, most recent
    /// first — nothing is re-sorted here. An empty seed yields all-zero
    /// stats and empty series.
    pub fn initialize(&mut self, seed: Vec<Transaction>) {
        self.ledger.transactions = seed;
        self.stats = self.stats_service.compute(&self.ledger);
    }

    // ── Transaction Management ──────────────────────────────────────

    /// Record a new income or expense. Returns the stored transaction
    /// (with its assigned id) so the caller can reflect it locally.
    ///
    /// The stats are patched incrementally — an add never rescans the
    /// ledger. A validation failure leaves ledger and stats unchanged.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Transaction, CoreError> {
        self.insert_transaction(Transaction::new(kind, amount, date, description))
    }

    /// Record a new transaction with a category label attached.
    pub fn add_transaction_with_category(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Transaction, CoreError> {
        self.insert_transaction(Transaction::with_category(
            kind,
            amount,
            date,
            description,
            category,
        ))
    }

    fn insert_transaction(&mut self, transaction: Transaction) -> Result<Transaction, CoreError> {
        self.ledger_service
            .add_transaction(&mut self.ledger, transaction.clone())?;
        self.stats_service.apply_add(&mut self.stats, &transaction);
        Ok(transaction)
    }

    /// Update an existing transaction in place (position in insertion
    /// order is preserved). The category label is kept; use
    /// [`set_category`](Self::set_category) to change it.
    ///
    /// Stats are rebuilt with a full recompute afterwards, so edits can
    /// never leave the dashboard stale.
    pub fn update_transaction(
        &mut self,
        transaction_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.ledger_service.update_transaction(
            &mut self.ledger,
            transaction_id,
            kind,
            amount,
            date,
            description,
        )?;
        self.stats = self.stats_service.compute(&self.ledger);
        Ok(())
    }

    /// Remove a transaction by its id, then rebuild the stats.
    /// The frontend calls this only after its confirm dialog.
    pub fn remove_transaction(&mut self, transaction_id: Uuid) -> Result<(), CoreError> {
        self.ledger_service
            .remove_transaction(&mut self.ledger, transaction_id)?;
        self.stats = self.stats_service.compute(&self.ledger);
        Ok(())
    }

    /// Set or clear the category label on an existing transaction.
    /// Rebuilds the stats — the category breakdown depends on it.
    pub fn set_category(
        &mut self,
        transaction_id: Uuid,
        category: Option<String>,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .set_category(&mut self.ledger, transaction_id, category)?;
        self.stats = self.stats_service.compute(&self.ledger);
        Ok(())
    }

    // ── Reading ─────────────────────────────────────────────────────

    /// The derived dashboard view. Consistent with the collection after
    /// every mutation.
    #[must_use]
    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// Get a single transaction by its id.
    #[must_use]
    pub fn get_transaction(&self, transaction_id: Uuid) -> Option<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .find(|t| t.id == transaction_id)
    }

    /// All transactions, most recently added first.
    #[must_use]
    pub fn get_transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// The total number of transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.transactions.len()
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Search transactions by matching query against description and
    /// category (case-insensitive). Backs the table's search box.
    #[must_use]
    pub fn search_transactions(&self, query: &str) -> Vec<&Transaction> {
        let q = query.to_lowercase();
        self.ledger
            .transactions
            .iter()
            .filter(|t| {
                t.description.to_lowercase().contains(&q)
                    || t.category
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&q)
            })
            .collect()
    }

    /// Get transactions sorted by a specific column order.
    #[must_use]
    pub fn get_transactions_sorted(&self, order: &TransactionSortOrder) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.ledger.transactions.iter().collect();
        match order {
            TransactionSortOrder::DateDesc => {
                transactions.sort_by(|a, b| b.date.cmp(&a.date))
            }
            TransactionSortOrder::DateAsc => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSortOrder::AmountDesc => transactions.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::AmountAsc => transactions.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::DescriptionAsc => {
                transactions.sort_by(|a, b| a.description.cmp(&b.description))
            }
            TransactionSortOrder::DescriptionDesc => {
                transactions.sort_by(|a, b| b.description.cmp(&a.description))
            }
        }
        transactions
    }

    /// Get transactions of one kind (income or expense), newest-added
    /// first (the collection's own order).
    #[must_use]
    pub fn get_transactions_by_kind(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .filter(|t| t.kind == kind)
            .collect()
    }

    /// Get transactions within a date range (inclusive), newest-added
    /// first.
    #[must_use]
    pub fn get_transactions_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect()
    }

    // ── Convenience Helpers ─────────────────────────────────────────

    /// Date of the oldest transaction by the date field, if any.
    /// The collection is insertion-ordered, so this scans.
    #[must_use]
    pub fn earliest_transaction_date(&self) -> Option<NaiveDate> {
        self.ledger.transactions.iter().map(|t| t.date).min()
    }

    /// Date of the newest transaction by the date field, if any.
    #[must_use]
    pub fn latest_transaction_date(&self) -> Option<NaiveDate> {
        self.ledger.transactions.iter().map(|t| t.date).max()
    }

    // ── Bulk Operations ─────────────────────────────────────────────

    /// Add multiple transactions at once. All are validated first; if any
    /// fails validation, none are added (all-or-nothing). The batch keeps
    /// its own ordering and is spliced in at the front as-is.
    /// Returns the ids of all added transactions.
    pub fn add_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Uuid>, CoreError> {
        for transaction in &transactions {
            self.ledger_service.validate_transaction(transaction)?;
        }

        let ids = transactions.iter().map(|t| t.id).collect();
        self.ledger.transactions.splice(0..0, transactions);
        self.stats = self.stats_service.compute(&self.ledger);
        Ok(ids)
    }

    /// Remove multiple transactions at once. All removals are applied to
    /// a scratch copy first; if any id is unknown, none are removed
    /// (all-or-nothing).
    pub fn remove_transactions(&mut self, transaction_ids: &[Uuid]) -> Result<(), CoreError> {
        let mut scratch = self.ledger.clone();

        for id in transaction_ids {
            self.ledger_service.remove_transaction(&mut scratch, *id)?;
        }

        self.ledger = scratch;
        self.stats = self.stats_service.compute(&self.ledger);
        Ok(())
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all transactions as a JSON string.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.transactions).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}"))
        })
    }

    /// Export all transactions as a CSV string.
    /// Columns: id, type, amount, date, description, category
    #[must_use]
    pub fn export_transactions_to_csv(&self) -> String {
        let mut csv = String::from("id,type,amount,date,description,category\n");
        for transaction in &self.ledger.transactions {
            let category = transaction.category.as_deref().unwrap_or("");
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                transaction.id,
                transaction.kind,
                transaction.amount,
                transaction.date,
                escape_csv_field(&transaction.description),
                escape_csv_field(category),
            ));
        }
        csv
    }

    /// Import transactions from a JSON string. Each one is validated;
    /// a single invalid entry rejects the whole batch.
    /// Returns the number of transactions imported.
    pub fn import_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let transactions: Vec<Transaction> = serde_json::from_str(json)?;
        let count = transactions.len();
        self.add_transactions(transactions)?;
        Ok(count)
    }

    /// Export the full ledger (transactions + settings) as JSON — the
    /// snapshot a persistence collaborator would ship to a backend.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the display currency (e.g., "USD", "EUR", "PLN").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_display_currency(&mut self, currency: String) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR, PLN)"
            )));
        }
        self.ledger.settings.display_currency = trimmed;
        Ok(())
    }

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ledger: Ledger) -> Self {
        let ledger_service = LedgerService::new();
        let stats_service = StatsService::new();
        let stats = stats_service.compute(&ledger);

        Self {
            ledger,
            ledger_service,
            stats_service,
            stats,
        }
    }
}

/// Quote a CSV field if it contains commas, quotes, or newlines.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
