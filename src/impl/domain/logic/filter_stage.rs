use crate::entities::{FilterConfig, Posting};

/// Applies the year, unit and date-range predicates. Input order is kept.
pub(crate) struct FilterStage<'a> {
    filter: &'a FilterConfig,
    known_unit_count: usize,
}

impl<'a> FilterStage<'a> {
    pub(crate) fn new(filter: &'a FilterConfig, known_unit_count: usize) -> Self {
        Self {
            filter,
            known_unit_count,
        }
    }

    pub(crate) fn process(&self, postings: &[Posting]) -> Vec<Posting> {
        postings
            .iter()
            .filter(|p| p.year() == self.filter.year)
            .filter(|p| self.unit_allowed(p))
            .filter(|p| self.filter.date_range.contains(p.date))
            .cloned()
            .collect()
    }

    fn unit_allowed(&self, posting: &Posting) -> bool {
        // Full selection is detected by cardinality, so an empty selection
        // never means "all".
        self.filter.units.len() >= self.known_unit_count
            || self.filter.units.contains(&posting.unit)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{domain::logic::utils::fixtures::posting, entities::Unit};

    fn all_units() -> Vec<Unit> {
        vec!["Matriz".into(), "Filial BH".into(), "Filial AL".into()]
    }

    fn sample() -> Vec<Posting> {
        vec![
            posting("1", "Receita de Vendas", "2024-01-10", "Matriz", "1000"),
            posting("2", "Aluguel", "2024-02-05", "Filial BH", "-500"),
            posting("3", "Aluguel", "2023-12-30", "Matriz", "-300"),
            posting("4", "Impostos", "2024-03-31", "Filial AL", "-120"),
            posting("5", "INSS", "2024-03-01", "Filial BH", "-80"),
        ]
    }

    fn ids(postings: &[Posting]) -> Vec<&str> {
        postings.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn keeps_only_selected_year_in_input_order() {
        let filter = FilterConfig::for_year(2024, all_units());
        let result = FilterStage::new(&filter, 3).process(&sample());
        assert_eq!(ids(&result), vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn restricts_to_selected_units() {
        let filter = FilterConfig::for_year(2024, vec![Unit::from("Filial BH")]);
        let result = FilterStage::new(&filter, 3).process(&sample());
        assert_eq!(ids(&result), vec!["2", "5"]);
    }

    #[test]
    fn empty_unit_selection_lets_nothing_through() {
        let filter = FilterConfig::for_year(2024, vec![]);
        assert!(FilterStage::new(&filter, 3).process(&sample()).is_empty());
    }

    #[test]
    fn full_unit_selection_is_a_no_op_regardless_of_order() {
        let mut reversed = all_units();
        reversed.reverse();
        let a = FilterConfig::for_year(2024, all_units());
        let b = FilterConfig::for_year(2024, reversed);
        let year_only: Vec<Posting> = sample().into_iter().filter(|p| p.year() == 2024).collect();
        assert_eq!(FilterStage::new(&a, 3).process(&sample()), year_only);
        assert_eq!(FilterStage::new(&b, 3).process(&sample()), year_only);
    }

    #[test]
    fn full_selection_also_admits_units_outside_known_set() {
        let mut postings = sample();
        postings.push(posting("6", "Aluguel", "2024-04-01", "Filial SP", "-10"));
        let filter = FilterConfig::for_year(2024, all_units());
        let result = FilterStage::new(&filter, 3).process(&postings);
        assert!(ids(&result).contains(&"6"));
    }

    #[test]
    fn date_range_bounds_are_inclusive_and_independent() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

        let both = FilterConfig::for_year(2024, all_units())
            .with_date_range(Some(d("2024-02-05")), Some(d("2024-03-01")));
        assert_eq!(ids(&FilterStage::new(&both, 3).process(&sample())), vec!["2", "5"]);

        let start_only =
            FilterConfig::for_year(2024, all_units()).with_date_range(Some(d("2024-03-01")), None);
        assert_eq!(ids(&FilterStage::new(&start_only, 3).process(&sample())), vec!["4", "5"]);

        let end_only =
            FilterConfig::for_year(2024, all_units()).with_date_range(None, Some(d("2024-01-10")));
        assert_eq!(ids(&FilterStage::new(&end_only, 3).process(&sample())), vec!["1"]);
    }

    #[test]
    fn filtering_twice_equals_filtering_once() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let filter = FilterConfig::for_year(2024, vec![Unit::from("Filial BH"), Unit::from("Matriz")])
            .with_date_range(Some(d("2024-01-01")), Some(d("2024-02-28")));
        let stage = FilterStage::new(&filter, 3);
        let once = stage.process(&sample());
        let twice = stage.process(&once);
        assert_eq!(once, twice);
    }
}
