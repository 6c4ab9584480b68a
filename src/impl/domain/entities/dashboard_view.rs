use rust_decimal::Decimal;

use super::{
    category_aggregate::{CategoryAggregate, MONTHS_PER_YEAR},
    metrics::DashboardMetrics,
    posting::Posting,
};

/// Ordered pivot rows for the current scope, with footer totals computed over
/// the rows actually shown.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pub year: i32,
    pub rows: Vec<CategoryAggregate>,
    pub column_totals: [Decimal; MONTHS_PER_YEAR],
    pub grand_total: Decimal,
}

/// Everything presentation needs for one filter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub table: PivotTable,
    /// `None` when no posting falls inside the current scope.
    pub metrics: Option<DashboardMetrics>,
    /// Postings that passed the year/unit/date filters, in input order.
    pub postings: Vec<Posting>,
}

// --

impl PivotTable {
    pub(crate) fn new(year: i32, rows: Vec<CategoryAggregate>) -> Self {
        let mut column_totals = [Decimal::ZERO; MONTHS_PER_YEAR];
        for row in &rows {
            for (total, value) in column_totals.iter_mut().zip(row.monthly_totals.iter()) {
                *total += *value;
            }
        }
        let grand_total = rows.iter().map(|r| r.total).sum();
        Self {
            year,
            rows,
            column_totals,
            grand_total,
        }
    }

    pub fn row(&self, category: &str) -> Option<&CategoryAggregate> {
        self.rows.iter().find(|r| r.name == category)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
