use std::collections::HashMap;

use crate::entities::{CategoryAggregate, CategoryPolicy};

use super::utils::collate;

/// Display order of pivot rows:
///
/// 1. the adjustment category,
/// 2. the primary revenue category,
/// 3. any other category starting with the revenue prefix,
/// 4. everything else,
///
/// with collated alphabetical order inside each rank.
pub(crate) struct OrderingPolicy<'a> {
    policy: &'a CategoryPolicy,
}

impl<'a> OrderingPolicy<'a> {
    pub(crate) fn new(policy: &'a CategoryPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn rank(&self, name: &str) -> u8 {
        if name == self.policy.adjustment {
            1
        } else if name == self.policy.primary_revenue {
            2
        } else if name.starts_with(&self.policy.revenue_prefix) {
            3
        } else {
            4
        }
    }

    pub(crate) fn process(
        &self,
        aggregates: HashMap<String, CategoryAggregate>,
    ) -> Vec<CategoryAggregate> {
        let mut v: Vec<CategoryAggregate> = aggregates.into_values().collect();
        v.sort_by(|a, b| {
            self.rank(&a.name)
                .cmp(&self.rank(&b.name))
                .then_with(|| collate(&a.name, &b.name))
        });
        v
    }
}
