use std::collections::HashSet;

use chrono::NaiveDate;

use super::posting::Unit;

/// Optional inclusive date bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// UI-driven selection that scopes one dashboard view. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub year: i32,
    /// Allowed units. Selecting every known unit lifts the restriction, while
    /// an empty set lets nothing through.
    pub units: HashSet<Unit>,
    pub date_range: DateRange,
    /// Case-insensitive substring match on category names. Filters rows, not
    /// postings.
    pub category_search: String,
}

// --

impl FilterConfig {
    /// Whole year, every given unit, no search.
    pub fn for_year<I>(year: i32, units: I) -> Self
    where
        I: IntoIterator<Item = Unit>,
    {
        Self {
            year,
            units: units.into_iter().collect(),
            date_range: DateRange::default(),
            category_search: String::new(),
        }
    }

    pub fn with_units<I>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = Unit>,
    {
        self.units = units.into_iter().collect();
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_range = DateRange { start, end };
        self
    }

    pub fn with_category_search(mut self, search: impl Into<String>) -> Self {
        self.category_search = search.into();
        self
    }
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}
