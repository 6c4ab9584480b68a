use chrono::{Datelike as _, NaiveDate};
use rust_decimal::Decimal;

/// Largest magnitude accepted for a single posting amount, in whole units.
/// Sums over any realistic batch of accepted postings stay inside `Decimal`'s
/// range.
pub const MAX_POSTING_MAGNITUDE: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde_derive::Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub String);

/// Organizational branch a posting is attributed to. The set of valid units
/// is supplied by `DashboardConfig::known_units`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde_derive::Deserialize)]
#[serde(transparent)]
pub struct Unit(pub String);

/// One financial transaction. Negative amounts are expenses, positive amounts
/// are revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct Posting {
    pub id: PostingId,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub origin: String,
    pub unit: Unit,
    pub amount: Decimal,
}

// --

impl std::fmt::Display for PostingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        Unit(s.to_string())
    }
}

impl Posting {
    /// Month slot of the posting (0 = January).
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn has_supported_amount(&self) -> bool {
        is_supported_amount(&self.amount)
    }
}

pub(crate) fn is_supported_amount(amount: &Decimal) -> bool {
    amount.abs() <= Decimal::from(MAX_POSTING_MAGNITUDE)
}
