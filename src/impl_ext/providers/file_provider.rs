use std::path::PathBuf;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::{
        datasources::{
            postings_csv_datasource::PostingsCsvDatasourceImpl,
            postings_json_datasource::PostingsJsonDatasourceImpl,
        },
        repositories::postings_repository_impl::PostingsRepositoryImpl,
    },
    domain::repositories::postings_repository::{PostingsFormat, PostingsRepository as _},
    entities::{Posting, PostingsProvider},
};

const YEAR_PLACEHOLDER: &str = "{year}";

/// Reads postings from a CSV or JSON file. The path may contain a `{year}`
/// placeholder to keep one file per year; postings dated outside the
/// requested year are dropped either way.
pub struct FilePostingsProvider {
    path: String,
    format: PostingsFormat,
    repository: PostingsRepositoryImpl<PostingsCsvDatasourceImpl, PostingsJsonDatasourceImpl>,
}

impl FilePostingsProvider {
    pub fn csv(path: impl Into<String>) -> Self {
        Self::new(path, PostingsFormat::Csv)
    }

    pub fn json(path: impl Into<String>) -> Self {
        Self::new(path, PostingsFormat::Json)
    }

    fn new(path: impl Into<String>, format: PostingsFormat) -> Self {
        Self {
            path: path.into(),
            format,
            repository: PostingsRepositoryImpl::new(),
        }
    }

    fn path_for(&self, year: i32) -> PathBuf {
        PathBuf::from(self.path.replace(YEAR_PLACEHOLDER, &year.to_string()))
    }
}

#[async_trait]
impl PostingsProvider for FilePostingsProvider {
    async fn fetch(&self, year: i32) -> Result<Vec<Posting>, ServerError> {
        let postings = self
            .repository
            .from_file(self.path_for(year), self.format)
            .await?;
        let total = postings.len();
        let postings: Vec<Posting> = postings.into_iter().filter(|p| p.year() == year).collect();
        debug!(year, total, kept = postings.len(), "postings read from file");
        Ok(postings)
    }
}
