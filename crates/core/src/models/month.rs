use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Key identifying one calendar-month bucket.
///
/// **Ordering** is derived from the field declaration order, so `year`
/// must stay first: buckets compare by year, then by month number within
/// a year. Never compare the `Display` form — "10/2025" would sort before
/// "9/2025" lexically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    /// Calendar year (e.g., 2025)
    pub year: i32,

    /// Month number, 1–12
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The bucket a given date falls into. Two dates share a bucket iff
    /// both year and month number match.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Chart label shape, e.g. "4/2025". Display only — see the ordering note
/// on the struct.
impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
