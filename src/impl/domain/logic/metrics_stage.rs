use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::{
    ActivePeriod, CategoryAggregate, CategoryPolicy, DashboardMetrics, Posting, Trend,
};

/// Derives the summary indicators from the ordered rows and the filtered
/// postings they were built from.
pub(crate) struct MetricsStage<'a> {
    policy: &'a CategoryPolicy,
}

impl<'a> MetricsStage<'a> {
    pub(crate) fn new(policy: &'a CategoryPolicy) -> Self {
        Self { policy }
    }

    /// Returns `None` when no month has data.
    pub(crate) fn process(
        &self,
        rows: &[CategoryAggregate],
        postings: &[Posting],
    ) -> Option<DashboardMetrics> {
        let active_months: BTreeSet<usize> = postings.iter().map(Posting::month_index).collect();
        let first = *active_months.first()?;
        let last = *active_months.last()?;

        Some(DashboardMetrics {
            accumulated_result: rows.iter().map(|r| r.total).sum(),
            trend: self.trend(rows, &active_months),
            average_monthly_expense: self.average_monthly_expense(postings, active_months.len()),
            top_expense_category: self.top_expense_category(rows),
            active_period: ActivePeriod { first, last },
            active_months,
        })
    }

    fn trend(&self, rows: &[CategoryAggregate], active_months: &BTreeSet<usize>) -> Trend {
        let Some(&last) = active_months.last() else {
            return Trend::NoComparison;
        };
        let Some(&prev) = active_months.range(..last).next_back() else {
            return Trend::NoComparison;
        };
        let column_total = |month: usize| -> Decimal {
            rows.iter().map(|r| r.monthly_totals[month]).sum()
        };
        let total_last = column_total(last);
        let total_prev = column_total(prev);
        if total_prev.is_zero() {
            return Trend::NoComparison;
        }
        // A tiny previous total can push the ratio past `Decimal`'s range.
        match total_last
            .checked_sub(total_prev)
            .and_then(|delta| delta.checked_div(total_prev.abs()))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(percentage) => Trend::Change(
                percentage.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            ),
            None => Trend::NoComparison,
        }
    }

    fn average_monthly_expense(&self, postings: &[Posting], active_month_count: usize) -> Decimal {
        if active_month_count == 0 {
            return Decimal::ZERO;
        }
        let total_expenses: Decimal = postings
            .iter()
            .filter(|p| p.is_expense())
            .map(|p| p.amount)
            .sum();
        total_expenses / Decimal::from(active_month_count)
    }

    /// Largest absolute negative total, ignoring the adjustment category. On a
    /// tie the row that comes first in display order wins.
    fn top_expense_category(&self, rows: &[CategoryAggregate]) -> Option<String> {
        rows.iter()
            .filter(|r| r.total < Decimal::ZERO && r.name != self.policy.adjustment)
            .fold(None, |best: Option<&CategoryAggregate>, row| match best {
                Some(b) if row.total.abs() <= b.total.abs() => Some(b),
                _ => Some(row),
            })
            .map(|r| r.name.clone())
    }
}
