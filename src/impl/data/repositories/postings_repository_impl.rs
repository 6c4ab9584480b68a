use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::datasources::{
        postings_csv_datasource::{PostingsCsvDatasource, PostingsCsvDatasourceImpl},
        postings_json_datasource::{PostingsJsonDatasource, PostingsJsonDatasourceImpl},
    },
    domain::repositories::postings_repository::{PostingsFormat, PostingsRepository},
    entities::Posting,
    errors::ReadError,
};

pub(crate) struct PostingsRepositoryImpl<DS1, DS2>
where
    DS1: PostingsCsvDatasource,
    DS2: PostingsJsonDatasource,
{
    csv_datasource: DS1,
    json_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> PostingsRepository for PostingsRepositoryImpl<DS1, DS2>
where
    DS1: PostingsCsvDatasource + Send + Sync,
    DS2: PostingsJsonDatasource + Send + Sync,
{
    fn from_string(&self, s: &str, format: PostingsFormat) -> Result<Vec<Posting>, ServerError> {
        match format {
            PostingsFormat::Csv => self.csv_datasource.from_string(s),
            PostingsFormat::Json => self.json_datasource.from_string(s),
        }
    }

    async fn from_file<P>(&self, path: P, format: PostingsFormat) -> Result<Vec<Posting>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), ?format, "reading postings file");
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&content, format)
    }
}

impl PostingsRepositoryImpl<PostingsCsvDatasourceImpl, PostingsJsonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        PostingsRepositoryImpl {
            csv_datasource: PostingsCsvDatasourceImpl::new(),
            json_datasource: PostingsJsonDatasourceImpl::new(),
        }
    }
}
