use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::posting_model::PostingModel,
    entities::Posting,
    errors::InvalidCsv,
};

/// Headered CSV with positional columns:
/// `id,category,date,description,origin,unit,amount`.
pub(crate) trait PostingsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, ServerError>;
}

pub(crate) struct PostingsCsvDatasourceImpl;

impl PostingsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PostingsCsvDatasource for PostingsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, ServerError> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record. Missing columns stay `None` and
                    // are rejected during validation.
                    let field = |n: usize| r.get(n).map(str::to_string);

                    // Build.
                    PostingModel {
                        id: field(0).map(Value::String),
                        category: field(1),
                        date: field(2),
                        description: field(3),
                        origin: field(4),
                        unit: field(5),
                        amount: field(6).map(Value::String),
                    }
                    .into_posting(i)
                })
            })
            .collect()
    }
}
