use tracing::debug;

use crate::entities::{DashboardConfig, DashboardView, FilterConfig, PivotTable, Posting};

use super::{
    aggregation_stage::AggregationStage, filter_stage::FilterStage,
    metrics_stage::MetricsStage, ordering_policy::OrderingPolicy, utils::contains_ignore_case,
};

/// Full recomputation of a dashboard view from the retained posting list.
pub(crate) struct DashboardPipeline<'a> {
    config: &'a DashboardConfig,
}

impl<'a> DashboardPipeline<'a> {
    pub(crate) fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    pub(crate) fn run(&self, postings: &[Posting], filter: &FilterConfig) -> DashboardView {
        let filtered =
            FilterStage::new(filter, self.config.known_units.len()).process(postings);
        let ordered = OrderingPolicy::new(&self.config.categories)
            .process(AggregationStage::new(filter.year).process(&filtered));

        // Metrics see every category; the search only narrows the table.
        let metrics = MetricsStage::new(&self.config.categories).process(&ordered, &filtered);
        let rows = ordered
            .into_iter()
            .filter(|r| contains_ignore_case(&r.name, &filter.category_search))
            .collect::<Vec<_>>();

        debug!(
            year = filter.year,
            postings = filtered.len(),
            rows = rows.len(),
            "dashboard pipeline run"
        );

        DashboardView {
            table: PivotTable::new(filter.year, rows),
            metrics,
            postings: filtered,
        }
    }
}
