use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::posting::Posting;

/// Source of raw postings for a year. Implementations either yield the
/// complete list or fail; an empty list is a valid, non-failing answer.
#[async_trait]
pub trait PostingsProvider: Send + Sync {
    async fn fetch(&self, year: i32) -> Result<Vec<Posting>, ServerError>;
}
