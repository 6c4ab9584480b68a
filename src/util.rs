use std::sync::Arc;

use fractic_server_error::ServerError;
use num_format::Locale;

use crate::{
    domain::usecases::dashboard_usecase::{DashboardUsecase as _, DashboardUsecaseImpl},
    entities::{DashboardConfig, DashboardView, DataState, FilterConfig, PostingsProvider},
    errors::UnknownCategory,
    presentation::{
        kpi_fmt::{Kpi, KpiFormatter},
        table_printer::TablePrinter,
    },
};

/// Entry point: owns the loaded postings for the selected year and turns a
/// `FilterConfig` into tables, KPI cards and text renderings.
pub struct DashboardUtil<P>
where
    P: PostingsProvider,
{
    usecase: DashboardUsecaseImpl<P>,
    locale: Locale,
}

impl<P> DashboardUtil<P>
where
    P: PostingsProvider,
{
    pub fn new(config: DashboardConfig, provider: P) -> Result<Self, ServerError> {
        config.validate()?;
        let locale = config.number_locale()?;
        Ok(Self {
            usecase: DashboardUsecaseImpl::new(config, provider),
            locale,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        self.usecase.config()
    }

    pub fn state(&self) -> DataState {
        self.usecase.state()
    }

    /// Filter selecting the whole of `year` across every known unit.
    pub fn default_filter(&self, year: i32) -> FilterConfig {
        FilterConfig::for_year(year, self.config().known_units.iter().cloned())
    }

    pub async fn select_year(&mut self, year: i32) -> Result<(), ServerError> {
        self.usecase.select_year(year).await
    }

    pub async fn reload(&mut self, year: i32) -> Result<(), ServerError> {
        self.usecase.reload(year).await
    }

    pub async fn preload(&mut self, years: &[i32]) -> Result<(), ServerError> {
        self.usecase.preload(years).await
    }

    pub fn view(&mut self, filter: &FilterConfig) -> Result<Arc<DashboardView>, ServerError> {
        self.usecase.view(filter)
    }

    pub fn kpis(&mut self, filter: &FilterConfig) -> Result<Vec<Kpi>, ServerError> {
        let view = self.usecase.view(filter)?;
        Ok(KpiFormatter::new(self.usecase.config(), self.locale).kpis(view.metrics.as_ref()))
    }

    pub fn render_table(&mut self, filter: &FilterConfig) -> Result<String, ServerError> {
        let view = self.usecase.view(filter)?;
        Ok(TablePrinter::new(self.usecase.config(), self.locale).print_table(&view.table))
    }

    /// Drill-down listing for one visible row of the current view.
    pub fn render_details(
        &mut self,
        filter: &FilterConfig,
        category: &str,
    ) -> Result<String, ServerError> {
        let view = self.usecase.view(filter)?;
        let row = view
            .table
            .row(category)
            .ok_or_else(|| UnknownCategory::new(category))?;
        Ok(TablePrinter::new(self.usecase.config(), self.locale).print_details(row))
    }
}
