use std::collections::BTreeSet;

use rust_decimal::Decimal;

/// Month-over-month variation between the last two active months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Fewer than two active months, or the previous month nets to zero.
    NoComparison,
    /// Percentage change, rounded to one decimal place.
    Change(Decimal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gain,
    Loss,
    Neutral,
}

/// First and last active month slots (0 = January), inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePeriod {
    pub first: usize,
    pub last: usize,
}

/// Summary indicators for the current filter scope. Only produced when at
/// least one month is active.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub accumulated_result: Decimal,
    pub active_months: BTreeSet<usize>,
    pub trend: Trend,
    /// Non-positive.
    pub average_monthly_expense: Decimal,
    pub top_expense_category: Option<String>,
    pub active_period: ActivePeriod,
}

// --

impl DashboardMetrics {
    pub fn result_tone(&self) -> Tone {
        if self.accumulated_result < Decimal::ZERO {
            Tone::Loss
        } else {
            Tone::Gain
        }
    }
}
