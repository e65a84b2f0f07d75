use serde::{Deserialize, Serialize};

use super::settings::Settings;
use super::transaction::Transaction;

/// The main data container. Lives entirely in memory for one session:
/// the hosting frontend seeds it at startup, mutates it through the
/// services, and discards it when the session ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// All recorded transactions, most recently added first.
    /// Insertion order is the only ordering the ledger maintains —
    /// the recent-activity list reads straight off the front.
    pub transactions: Vec<Transaction>,

    /// User settings (display currency)
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            settings: Settings::default(),
        }
    }
}
