use std::collections::HashMap;

use crate::entities::{CategoryAggregate, Posting};

/// Groups postings by category into twelve monthly buckets for one year.
pub(crate) struct AggregationStage {
    year: i32,
}

impl AggregationStage {
    pub(crate) fn new(year: i32) -> Self {
        Self { year }
    }

    /// The returned map has no meaningful iteration order; see
    /// `OrderingPolicy`.
    pub(crate) fn process(&self, postings: &[Posting]) -> HashMap<String, CategoryAggregate> {
        postings
            .iter()
            // Re-checked here so the stage stays correct when used standalone.
            .filter(|p| p.year() == self.year)
            .fold(HashMap::new(), |mut map, posting| {
                map.entry(posting.category.clone())
                    .or_insert_with(|| CategoryAggregate::new(&posting.category))
                    .add(posting);
                map
            })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::logic::utils::fixtures::posting;

    #[test]
    fn sums_per_category_and_month() {
        let postings = vec![
            posting("1", "Receita de Vendas", "2024-01-03", "Matriz", "1000"),
            posting("2", "Aluguel", "2024-01-15", "Matriz", "-500"),
            posting("3", "Aluguel", "2024-02-15", "Filial BH", "-300"),
        ];

        let result = AggregationStage::new(2024).process(&postings);

        assert_eq!(result.len(), 2);
        let revenue = &result["Receita de Vendas"];
        assert_eq!(revenue.total, dec!(1000));
        assert_eq!(revenue.monthly_totals[0], dec!(1000));
        let rent = &result["Aluguel"];
        assert_eq!(rent.total, dec!(-800));
        assert_eq!(rent.monthly_totals[0], dec!(-500));
        assert_eq!(rent.monthly_totals[1], dec!(-300));
        assert_eq!(rent.monthly_totals[2..], [Decimal::ZERO; 10]);
        assert_eq!(rent.postings.len(), 2);
    }

    #[test]
    fn skips_postings_from_other_years() {
        let postings = vec![
            posting("1", "Aluguel", "2023-12-31", "Matriz", "-500"),
            posting("2", "Aluguel", "2024-12-01", "Matriz", "-300"),
        ];
        let result = AggregationStage::new(2024).process(&postings);
        assert_eq!(result["Aluguel"].total, dec!(-300));
        assert_eq!(result["Aluguel"].monthly_totals[11], dec!(-300));
        assert_eq!(result["Aluguel"].postings.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_categories() {
        assert!(AggregationStage::new(2024).process(&[]).is_empty());
    }

    #[test]
    fn zero_amounts_still_create_a_row() {
        let postings = vec![posting("1", "Estorno de Serviço", "2024-05-05", "Matriz", "0")];
        let result = AggregationStage::new(2024).process(&postings);
        assert_eq!(result["Estorno de Serviço"].total, Decimal::ZERO);
    }

    fn arb_postings() -> impl Strategy<Value = Vec<Posting>> {
        let categories = prop::sample::select(vec!["Aluguel", "INSS", "Receita de Vendas", "Impostos"]);
        prop::collection::vec(
            (categories, 1u32..=12, 1u32..=28, -1_000_000i64..1_000_000i64),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, month, day, cents))| {
                    let mut p = posting(
                        &i.to_string(),
                        category,
                        &format!("2024-{:02}-{:02}", month, day),
                        "Matriz",
                        "0",
                    );
                    p.amount = Decimal::new(cents, 2);
                    p
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn total_equals_sum_of_monthly_totals(postings in arb_postings()) {
            for aggregate in AggregationStage::new(2024).process(&postings).values() {
                let sum: Decimal = aggregate.monthly_totals.iter().sum();
                prop_assert_eq!(aggregate.total, sum);
            }
        }

        #[test]
        fn totals_do_not_depend_on_posting_order(postings in arb_postings()) {
            let mut reversed = postings.clone();
            reversed.reverse();
            let a = AggregationStage::new(2024).process(&postings);
            let b = AggregationStage::new(2024).process(&reversed);
            prop_assert_eq!(a.len(), b.len());
            for (name, aggregate) in &a {
                let other = &b[name];
                prop_assert_eq!(aggregate.total, other.total);
                prop_assert_eq!(aggregate.monthly_totals, other.monthly_totals);
                prop_assert_eq!(aggregate.postings.len(), other.postings.len());
            }
        }
    }
}
