use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    domain::entities::posting::{is_supported_amount, MAX_POSTING_MAGNITUDE},
    errors::{AmountOutOfRange, InvalidAmount},
};

/// Signed amount as written by spreadsheets and accounting exports: accepts
/// thousands commas, a leading minus, or parentheses for negatives.
#[derive(Debug)]
pub(crate) struct AmountModel(pub Decimal);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        let opens = raw.starts_with('(');
        let closes = raw.ends_with(')');
        if opens != closes {
            return Err(InvalidAmount::new(s));
        }
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = Decimal::from_str(numeric_part)
            .or_else(|_| Decimal::from_scientific(numeric_part))
            .map_err(|e| InvalidAmount::with_debug(s, &e))?;
        if !is_supported_amount(&amount) {
            return Err(AmountOutOfRange::new(s, MAX_POSTING_MAGNITUDE));
        }
        Ok(AmountModel(if opens { -amount } else { amount }))
    }
}

impl From<AmountModel> for Decimal {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}
