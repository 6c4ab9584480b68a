use fractic_server_error::ServerError;

use crate::{
    data::models::posting_model::PostingModel,
    entities::Posting,
    errors::InvalidJson,
};

/// JSON array of posting objects, as returned by the structured-output
/// generation service.
pub(crate) trait PostingsJsonDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, ServerError>;
}

pub(crate) struct PostingsJsonDatasourceImpl;

impl PostingsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PostingsJsonDatasource for PostingsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, ServerError> {
        let models: Vec<PostingModel> =
            serde_json::from_str(s.trim()).map_err(|e| InvalidJson::with_debug(&e))?;
        models
            .into_iter()
            .enumerate()
            .map(|(i, m)| m.into_posting(i))
            .collect()
    }
}
