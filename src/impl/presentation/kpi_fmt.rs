use num_format::Locale;

use crate::entities::{ActivePeriod, DashboardConfig, DashboardMetrics, Tone, Trend};

use super::amount_fmt::{format_amount, format_percentage};

const NOT_AVAILABLE: &str = "N/A";
const NO_COMPARISON: &str = "Sem dados para comparação";

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub trend: String,
    pub tone: Tone,
}

pub(crate) struct KpiFormatter<'a> {
    config: &'a DashboardConfig,
    locale: Locale,
}

impl<'a> KpiFormatter<'a> {
    pub(crate) fn new(config: &'a DashboardConfig, locale: Locale) -> Self {
        Self { config, locale }
    }

    pub(crate) fn period_label(&self, period: &ActivePeriod) -> String {
        format!(
            "{}–{}",
            self.config.month_label(period.first),
            self.config.month_label(period.last)
        )
    }

    pub(crate) fn trend_label(&self, trend: &Trend) -> String {
        match trend {
            Trend::NoComparison => NO_COMPARISON.to_string(),
            Trend::Change(p) => format!("Variação vs mês anterior {}", format_percentage(*p)),
        }
    }

    /// Cards in display order. Without metrics every card keeps its label and
    /// shows its "no data" sentinel.
    pub(crate) fn kpis(&self, metrics: Option<&DashboardMetrics>) -> Vec<Kpi> {
        let Some(m) = metrics else {
            return vec![
                kpi("Resultado acumulado", NOT_AVAILABLE, NO_COMPARISON, Tone::Neutral),
                kpi("Despesa média mensal", NOT_AVAILABLE, NOT_AVAILABLE, Tone::Neutral),
                kpi("Top categoria", NOT_AVAILABLE, "Maior impacto no período", Tone::Neutral),
                kpi("Período ativo", NOT_AVAILABLE, "Meses com lançamentos", Tone::Neutral),
            ];
        };
        let period = self.period_label(&m.active_period);
        vec![
            kpi(
                "Resultado acumulado",
                &format_amount(m.accumulated_result, &self.locale),
                &self.trend_label(&m.trend),
                m.result_tone(),
            ),
            kpi(
                "Despesa média mensal",
                &format_amount(m.average_monthly_expense, &self.locale),
                &period,
                Tone::Loss,
            ),
            kpi(
                "Top categoria",
                m.top_expense_category.as_deref().unwrap_or(NOT_AVAILABLE),
                "Maior impacto no período",
                Tone::Neutral,
            ),
            kpi(
                "Período ativo",
                &period,
                &format!("{} meses com lançamentos", m.active_months.len()),
                Tone::Neutral,
            ),
        ]
    }
}

fn kpi(label: &str, value: &str, trend: &str, tone: Tone) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
        tone,
    }
}
