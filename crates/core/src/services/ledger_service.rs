use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionKind};

/// Minimum number of characters a description must have.
const MIN_DESCRIPTION_CHARS: usize = 3;

/// Manages the transaction collection (add/update/remove).
///
/// Pure business logic — no I/O, no derived state. Easy to test.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new transaction at the front of the ledger.
    /// The front is the most recently added entry, so the recent-activity
    /// list reads straight off it.
    pub fn add_transaction(
        &self,
        ledger: &mut Ledger,
        transaction: Transaction,
    ) -> Result<(), CoreError> {
        self.validate_transaction(&transaction)?;
        ledger.transactions.insert(0, transaction);
        Ok(())
    }

    /// Replace the transaction with the same id, keeping its position in
    /// insertion order. The category label is preserved; use
    /// [`set_category`](Self::set_category) to change it.
    ///
    /// The replacement is validated before anything is touched, so a
    /// rejected update leaves the ledger unchanged.
    pub fn update_transaction(
        &self,
        ledger: &mut Ledger,
        transaction_id: Uuid,
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<(), CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;

        let updated = Transaction {
            id: transaction_id,
            kind,
            amount,
            date,
            description: description.into(),
            category: ledger.transactions[idx].category.clone(),
        };
        self.validate_transaction(&updated)?;

        ledger.transactions[idx] = updated;
        Ok(())
    }

    /// Remove a transaction by id and return it.
    /// Unknown ids are an error, not a silent no-op — the caller surfaces
    /// the message to the user.
    pub fn remove_transaction(
        &self,
        ledger: &mut Ledger,
        transaction_id: Uuid,
    ) -> Result<Transaction, CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;

        Ok(ledger.transactions.remove(idx))
    }

    /// Set or clear the category label on an existing transaction.
    pub fn set_category(
        &self,
        ledger: &mut Ledger,
        transaction_id: Uuid,
        category: Option<String>,
    ) -> Result<(), CoreError> {
        let transaction = ledger
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| CoreError::TransactionNotFound(transaction_id.to_string()))?;
        transaction.category = category;
        Ok(())
    }

    /// Validate a transaction before it enters the ledger.
    ///
    /// Rules:
    /// - Amount must be a positive, finite number
    /// - Description must be at least 3 characters
    ///
    /// Kind and date need no runtime check — `TransactionKind` and
    /// `NaiveDate` cannot hold invalid values.
    pub fn validate_transaction(&self, transaction: &Transaction) -> Result<(), CoreError> {
        if !transaction.amount.is_finite() || transaction.amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Amount must be a positive number".into(),
            ));
        }

        if transaction.description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(CoreError::ValidationError(format!(
                "Description must be at least {MIN_DESCRIPTION_CHARS} characters"
            )));
        }

        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
