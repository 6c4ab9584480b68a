use std::fs;

use fractic_server_error::ServerError;
use num_format::Locale;

use crate::errors::{InvalidConfig, InvalidLocale, InvalidRon, ReadError};

use super::{category_aggregate::MONTHS_PER_YEAR, posting::Unit};

/// Names that receive special treatment when ordering and ranking categories.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct CategoryPolicy {
    /// Always ranked first, and never reported as the top expense.
    pub adjustment: String,
    /// Ranked second, ahead of every other revenue category.
    pub primary_revenue: String,
    /// Remaining categories starting with this prefix are ranked third.
    pub revenue_prefix: String,
}

/// Dashboard configuration. Defaults reproduce the standard dashboard, and any
/// subset of fields can be overridden from RON:
///
/// ```ron
/// (
///     known_units: ["Matriz", "Filial SP"],
///     categories: (adjustment: "AJUSTE"),
///     locale: "en",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub known_units: Vec<Unit>,
    pub categories: CategoryPolicy,
    pub month_labels: Vec<String>,
    /// `num-format` locale name used for thousands grouping.
    pub locale: String,
}

// --

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            adjustment: "RESULTADO ASOS".to_string(),
            primary_revenue: "Receita de Vendas".to_string(),
            revenue_prefix: "Receita".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            known_units: vec!["Matriz".into(), "Filial BH".into(), "Filial AL".into()],
            categories: CategoryPolicy::default(),
            month_labels: [
                "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            locale: "pt".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        let config: DashboardConfig =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("DashboardConfig", &e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_ron_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.known_units.is_empty() {
            return Err(InvalidConfig::new("at least one known unit is required"));
        }
        if self.month_labels.len() != MONTHS_PER_YEAR {
            return Err(InvalidConfig::with_debug(
                "exactly 12 month labels are required",
                &self.month_labels,
            ));
        }
        self.number_locale()?;
        Ok(())
    }

    pub fn number_locale(&self) -> Result<Locale, ServerError> {
        Locale::from_name(&self.locale).map_err(|e| InvalidLocale::with_debug(&self.locale, &e))
    }

    /// Label for a month slot (0 = January). Falls back to the 1-based month
    /// number if the label list is short.
    pub fn month_label(&self, month_index: usize) -> String {
        self.month_labels
            .get(month_index)
            .cloned()
            .unwrap_or_else(|| format!("{:02}", month_index + 1))
    }
}
