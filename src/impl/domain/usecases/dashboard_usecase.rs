use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::{
    domain::{entities::posting::MAX_POSTING_MAGNITUDE, logic::pipeline::DashboardPipeline},
    entities::{DashboardConfig, DashboardView, FilterConfig, Posting, PostingsProvider},
    errors::{AmountOutOfRange, DataNotLoaded, DataUnavailable, InvalidPostingRecord},
};

/// Observable acquisition state. A failed load is distinct from a successful
/// load that happened to return zero postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataState {
    NotLoaded,
    Loaded { year: i32, posting_count: usize },
    Failed { year: i32, cause: String },
}

#[async_trait]
pub trait DashboardUsecase: Send + Sync {
    /// Makes `year` the active posting list, fetching it unless it was already
    /// loaded or preloaded.
    async fn select_year(&mut self, year: i32) -> Result<(), ServerError>;

    /// Like `select_year`, but always fetches from the provider.
    async fn reload(&mut self, year: i32) -> Result<(), ServerError>;

    /// Fetches several years concurrently so later year switches need no
    /// fetch. Does not change the active year.
    async fn preload(&mut self, years: &[i32]) -> Result<(), ServerError>;

    fn view(&mut self, filter: &FilterConfig) -> Result<Arc<DashboardView>, ServerError>;

    fn state(&self) -> DataState;

    fn config(&self) -> &DashboardConfig;
}

enum LoadState {
    NotLoaded,
    Loaded {
        year: i32,
        postings: Arc<Vec<Posting>>,
    },
    Failed {
        year: i32,
        cause: String,
    },
}

struct CachedView {
    generation: u64,
    filter: FilterConfig,
    view: Arc<DashboardView>,
}

pub(crate) struct DashboardUsecaseImpl<P: PostingsProvider> {
    config: DashboardConfig,
    provider: P,
    state: LoadState,
    fetched: HashMap<i32, Arc<Vec<Posting>>>,
    /// Bumped on every successful load, invalidating `cached_view`.
    generation: u64,
    cached_view: Option<CachedView>,
}

#[async_trait]
impl<P: PostingsProvider> DashboardUsecase for DashboardUsecaseImpl<P> {
    async fn select_year(&mut self, year: i32) -> Result<(), ServerError> {
        match self.fetched.get(&year).cloned() {
            Some(postings) => {
                debug!(year, "selecting already fetched year");
                self.activate(year, postings);
                Ok(())
            }
            None => self.reload(year).await,
        }
    }

    async fn reload(&mut self, year: i32) -> Result<(), ServerError> {
        info!(year, "loading postings");
        match self.provider.fetch(year).await.and_then(check_amounts) {
            Ok(postings) => {
                info!(year, count = postings.len(), "postings loaded");
                let postings = Arc::new(postings);
                self.fetched.insert(year, postings.clone());
                self.activate(year, postings);
                Ok(())
            }
            Err(e) => {
                let cause = e.to_string();
                warn!(year, %cause, "postings provider failed");
                self.fetched.remove(&year);
                self.cached_view = None;
                self.state = LoadState::Failed {
                    year,
                    cause: cause.clone(),
                };
                Err(DataUnavailable::with_debug(&cause, &e))
            }
        }
    }

    async fn preload(&mut self, years: &[i32]) -> Result<(), ServerError> {
        let provider = &self.provider;
        let results = try_join_all(years.iter().map(|&year| async move {
            provider
                .fetch(year)
                .await
                .and_then(check_amounts)
                .map(|postings| (year, postings))
        }))
        .await
        .map_err(|e| {
            warn!(?years, "preload failed");
            DataUnavailable::with_debug(&e.to_string(), &e)
        })?;
        for (year, postings) in results {
            info!(year, count = postings.len(), "postings preloaded");
            self.fetched.insert(year, Arc::new(postings));
        }
        Ok(())
    }

    fn view(&mut self, filter: &FilterConfig) -> Result<Arc<DashboardView>, ServerError> {
        match &self.state {
            LoadState::NotLoaded => return Err(DataNotLoaded::new()),
            LoadState::Failed { cause, .. } => return Err(DataUnavailable::new(cause)),
            LoadState::Loaded { .. } => {}
        }
        let Some(postings) = self.fetched.get(&filter.year).cloned() else {
            warn!(requested = filter.year, "view requested for a year that was never fetched");
            return Err(DataNotLoaded::new());
        };

        if let Some(cached) = &self.cached_view {
            if cached.generation == self.generation && cached.filter == *filter {
                debug!("dashboard view cache hit");
                return Ok(cached.view.clone());
            }
        }

        let view = Arc::new(DashboardPipeline::new(&self.config).run(&postings, filter));
        self.cached_view = Some(CachedView {
            generation: self.generation,
            filter: filter.clone(),
            view: view.clone(),
        });
        Ok(view)
    }

    fn state(&self) -> DataState {
        match &self.state {
            LoadState::NotLoaded => DataState::NotLoaded,
            LoadState::Loaded { year, postings } => DataState::Loaded {
                year: *year,
                posting_count: postings.len(),
            },
            LoadState::Failed { year, cause } => DataState::Failed {
                year: *year,
                cause: cause.clone(),
            },
        }
    }

    fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

impl<P: PostingsProvider> DashboardUsecaseImpl<P> {
    pub(crate) fn new(config: DashboardConfig, provider: P) -> Self {
        DashboardUsecaseImpl {
            config,
            provider,
            state: LoadState::NotLoaded,
            fetched: HashMap::new(),
            generation: 0,
            cached_view: None,
        }
    }

    fn activate(&mut self, year: i32, postings: Arc<Vec<Posting>>) {
        self.generation += 1;
        self.cached_view = None;
        self.state = LoadState::Loaded { year, postings };
    }
}

/// Rejects the whole batch if any posting carries an amount outside the
/// supported magnitude.
fn check_amounts(postings: Vec<Posting>) -> Result<Vec<Posting>, ServerError> {
    match postings.iter().position(|p| !p.has_supported_amount()) {
        Some(index) => Err(InvalidPostingRecord::with_debug(
            index,
            "amount",
            &AmountOutOfRange::new(&postings[index].amount.to_string(), MAX_POSTING_MAGNITUDE),
        )),
        None => Ok(postings),
    }
}
