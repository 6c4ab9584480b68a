use num_format::Locale;
use rust_decimal::Decimal;

use crate::entities::{CategoryAggregate, DashboardConfig, PivotTable};

use super::amount_fmt::format_amount;

const CATEGORY_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 11;
const DESCRIPTION_WIDTH: usize = 44;

/// Plain-text rendering of the pivot table and of a category drill-down.
pub(crate) struct TablePrinter<'a> {
    config: &'a DashboardConfig,
    locale: Locale,
}

impl<'a> TablePrinter<'a> {
    pub(crate) fn new(config: &'a DashboardConfig, locale: Locale) -> Self {
        Self { config, locale }
    }

    pub(crate) fn print_table(&self, table: &PivotTable) -> String {
        let mut output = String::new();

        // Header.
        output.push_str(&format!("{:CATEGORY_WIDTH$}", "Categoria"));
        for month in 0..self.config.month_labels.len() {
            output.push_str(&format!(" {:>AMOUNT_WIDTH$}", self.config.month_label(month)));
        }
        output.push_str(&format!(" {:>AMOUNT_WIDTH$}\n", format!("Total {}", table.year)));
        output.push_str(&"-".repeat(CATEGORY_WIDTH + (AMOUNT_WIDTH + 1) * 13));
        output.push('\n');

        // Rows.
        for row in &table.rows {
            self.print_line(&mut output, &row.name, &row.monthly_totals, &row.total);
        }

        // Footer.
        output.push_str(&"-".repeat(CATEGORY_WIDTH + (AMOUNT_WIDTH + 1) * 13));
        output.push('\n');
        self.print_line(&mut output, "Total", &table.column_totals, &table.grand_total);

        output
    }

    pub(crate) fn print_details(&self, row: &CategoryAggregate) -> String {
        let postings = row.postings_by_date_desc();
        if postings.is_empty() {
            return "Sem lançamentos para esta categoria.\n".to_string();
        }

        let mut output = String::new();
        for posting in &postings {
            let date = posting.date.format("%d/%m/%Y").to_string();
            let amount = format_amount(posting.amount, &self.locale);
            let wrapped = textwrap::wrap(&posting.description, DESCRIPTION_WIDTH);
            for (i, line) in wrapped.iter().enumerate() {
                if i == 0 {
                    output.push_str(&format!(
                        "{:10}  {:DESCRIPTION_WIDTH$}  {:>AMOUNT_WIDTH$}\n",
                        date, line, amount
                    ));
                } else {
                    output.push_str(&format!("{:10}  {}\n", "", line));
                }
            }
            if wrapped.is_empty() {
                output.push_str(&format!(
                    "{:10}  {:DESCRIPTION_WIDTH$}  {:>AMOUNT_WIDTH$}\n",
                    date, "", amount
                ));
            }
            output.push_str(&format!("{:10}  {}\n", "", posting.origin));
        }
        output.push_str(&format!("{} itens\n", postings.len()));
        output
    }

    fn print_line(
        &self,
        output: &mut String,
        name: &str,
        values: &[Decimal],
        total: &Decimal,
    ) {
        let name: String = name.chars().take(CATEGORY_WIDTH).collect();
        output.push_str(&format!("{:CATEGORY_WIDTH$}", name));
        for value in values {
            output.push_str(&format!(
                " {:>AMOUNT_WIDTH$}",
                format_amount(*value, &self.locale)
            ));
        }
        output.push_str(&format!(
            " {:>AMOUNT_WIDTH$}\n",
            format_amount(*total, &self.locale)
        ));
    }
}
