use std::str::FromStr as _;

use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    entities::{Posting, PostingId, Unit},
    errors::InvalidPostingRecord,
};

use super::{amount_model::AmountModel, iso_date_model::ISODateModel};

/// Raw posting as it arrives from a datasource, before validation. Keys accept
/// both the English names and the ones used by the structured-output service.
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct PostingModel {
    pub id: Option<Value>,
    #[serde(alias = "categoria")]
    pub category: Option<String>,
    #[serde(alias = "data")]
    pub date: Option<String>,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "origem")]
    pub origin: Option<String>,
    #[serde(alias = "filial")]
    pub unit: Option<String>,
    #[serde(alias = "valor")]
    pub amount: Option<Value>,
}

impl PostingModel {
    /// Validates every required field. `index` is the record's position in its
    /// batch, used for error reporting.
    pub(crate) fn into_posting(self, index: usize) -> Result<Posting, ServerError> {
        let required = |value: Option<String>, field: &str| -> Result<String, ServerError> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(InvalidPostingRecord::new(index, field)),
            }
        };
        let present = |value: Option<String>, field: &str| -> Result<String, ServerError> {
            value.ok_or_else(|| InvalidPostingRecord::new(index, field))
        };

        let id = match self.id {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let raw_amount = match self.amount {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let date = ISODateModel::from_str(&required(self.date, "date")?)
            .map_err(|e| InvalidPostingRecord::with_debug(index, "date", &e))?;
        let amount = AmountModel::from_str(&required(raw_amount, "amount")?)
            .map_err(|e| InvalidPostingRecord::with_debug(index, "amount", &e))?;

        Ok(Posting {
            id: PostingId(required(id, "id")?),
            category: required(self.category, "category")?,
            date: date.into(),
            description: present(self.description, "description")?,
            origin: present(self.origin, "origin")?,
            unit: Unit(required(self.unit, "unit")?),
            amount: amount.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn complete() -> PostingModel {
        serde_json::from_value(json!({
            "id": "lanc-1",
            "categoria": "Aluguel",
            "data": "2024-03-05",
            "descricao": "Pagamento ref. Aluguel",
            "origem": "Fornecedor G",
            "filial": "Filial BH",
            "valor": -1500.5
        }))
        .unwrap()
    }

    #[test]
    fn converts_complete_record() {
        let p = complete().into_posting(0).unwrap();
        assert_eq!(p.id, PostingId("lanc-1".to_string()));
        assert_eq!(p.category, "Aluguel");
        assert_eq!(p.unit, Unit::from("Filial BH"));
        assert_eq!(p.amount, dec!(-1500.5));
        assert_eq!(p.month_index(), 2);
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let mut model = complete();
        model.id = Some(json!(42));
        assert_eq!(model.into_posting(0).unwrap().id, PostingId("42".to_string()));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut model = complete();
        model.category = None;
        assert!(model.into_posting(3).is_err());

        let mut model = complete();
        model.amount = None;
        assert!(model.into_posting(3).is_err());

        let mut model = complete();
        model.unit = Some("  ".to_string());
        assert!(model.into_posting(3).is_err());
    }

    #[test]
    fn invalid_date_or_amount_is_rejected() {
        let mut model = complete();
        model.date = Some("05/03/2024".to_string());
        assert!(model.into_posting(0).is_err());

        let mut model = complete();
        model.amount = Some(json!(true));
        assert!(model.into_posting(0).is_err());
    }

    #[test]
    fn empty_description_is_allowed() {
        let mut model = complete();
        model.description = Some(String::new());
        assert!(model.into_posting(0).is_ok());
    }
}
