use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::Posting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingsFormat {
    Csv,
    Json,
}

#[async_trait]
pub trait PostingsRepository: Send + Sync {
    fn from_string(&self, s: &str, format: PostingsFormat) -> Result<Vec<Posting>, ServerError>;

    async fn from_file<P>(&self, path: P, format: PostingsFormat) -> Result<Vec<Posting>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
