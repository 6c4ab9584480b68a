use rust_decimal::Decimal;

use super::posting::Posting;

pub const MONTHS_PER_YEAR: usize = 12;

/// One row of the pivot table: a category rolled up over the twelve months of
/// the selected year.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub name: String,
    /// Index 0 = January ... 11 = December.
    pub monthly_totals: [Decimal; MONTHS_PER_YEAR],
    pub total: Decimal,
    /// Source postings, kept for drill-down. Order is not significant.
    pub postings: Vec<Posting>,
}

// --

impl CategoryAggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monthly_totals: [Decimal::ZERO; MONTHS_PER_YEAR],
            total: Decimal::ZERO,
            postings: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, posting: &Posting) {
        self.monthly_totals[posting.month_index()] += posting.amount;
        self.total += posting.amount;
        self.postings.push(posting.clone());
    }

    /// Source postings in display order: most recent first, ties broken by id.
    pub fn postings_by_date_desc(&self) -> Vec<&Posting> {
        let mut v: Vec<&Posting> = self.postings.iter().collect();
        v.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        v
    }
}
