use serde::{Deserialize, Serialize};

/// User-configurable settings, kept alongside the transaction collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The currency code used when formatting amounts for display
    /// (e.g., "USD", "EUR", "PLN").
    pub display_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "USD".to_string(),
        }
    }
}
