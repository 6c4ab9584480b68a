use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::{CriticalError, ServerError};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use rust_decimal::Decimal;

use crate::entities::{DashboardConfig, Posting, PostingId, PostingsProvider, Unit};

const EXPENSE_CATEGORIES: [&str; 7] = [
    "INSS",
    "Empréstimos",
    "Estorno de Serviço",
    "Salários",
    "Fornecedores",
    "Impostos",
    "Aluguel",
];
const REVENUE_POSTINGS: usize = 20;
const FREQUENT_EXPENSE_POSTINGS: usize = 10;
const RARE_EXPENSE_POSTINGS: usize = 4;
const ADJUSTMENT_POSTINGS: usize = 3;

/// In-memory provider that synthesizes a plausible year of postings for a
/// small company. Output is reproducible for a given seed and year.
#[derive(Debug, Clone)]
pub struct StaticPostingsProvider {
    seed: u64,
    units: Vec<Unit>,
    revenue_category: String,
    adjustment_category: String,
}

impl StaticPostingsProvider {
    pub fn new(seed: u64) -> Self {
        Self::from_config(&DashboardConfig::default(), seed)
    }

    pub fn from_config(config: &DashboardConfig, seed: u64) -> Self {
        Self {
            seed,
            units: config.known_units.clone(),
            revenue_category: config.categories.primary_revenue.clone(),
            adjustment_category: config.categories.adjustment.clone(),
        }
    }

    pub fn generate(&self, year: i32) -> Result<Vec<Posting>, ServerError> {
        let mut rng = StdRng::seed_from_u64(self.seed ^ (year as u64));
        let mut postings = Vec::new();
        let mut next_id = {
            let mut counter = 0usize;
            move || {
                counter += 1;
                PostingId(format!("lanc-{}-{}", year, counter))
            }
        };

        for _ in 0..REVENUE_POSTINGS {
            postings.push(Posting {
                id: next_id(),
                category: self.revenue_category.clone(),
                date: random_date(&mut rng, year)?,
                description: format!("Venda de produtos e serviços #{}", rng.gen_range(0..1000)),
                origin: format!("Cliente {}", random_letter(&mut rng, 'A')),
                unit: self.random_unit(&mut rng),
                amount: Decimal::from(rng.gen_range(5_000i64..30_000)),
            });
        }

        for category in EXPENSE_CATEGORIES {
            let count = match category {
                "Empréstimos" | "Estorno de Serviço" => RARE_EXPENSE_POSTINGS,
                _ => FREQUENT_EXPENSE_POSTINGS,
            };
            for _ in 0..count {
                postings.push(Posting {
                    id: next_id(),
                    category: category.to_string(),
                    date: random_date(&mut rng, year)?,
                    description: format!("Pagamento ref. {}", category),
                    origin: format!("Fornecedor {}", random_letter(&mut rng, 'F')),
                    unit: self.random_unit(&mut rng),
                    amount: -Decimal::from(rng.gen_range(1_000i64..10_000)),
                });
            }
        }

        for _ in 0..ADJUSTMENT_POSTINGS {
            postings.push(Posting {
                id: next_id(),
                category: self.adjustment_category.clone(),
                date: random_date(&mut rng, year)?,
                description: "Ajuste de resultado do sistema".to_string(),
                origin: "Sistema Interno".to_string(),
                unit: self.units.first().cloned().unwrap_or_else(|| Unit::from("Matriz")),
                amount: -Decimal::from(rng.gen_range(50i64..350)),
            });
        }

        Ok(postings)
    }

    fn random_unit(&self, rng: &mut StdRng) -> Unit {
        match self.units.len() {
            0 => Unit::from("Matriz"),
            n => self.units[rng.gen_range(0..n)].clone(),
        }
    }
}

#[async_trait]
impl PostingsProvider for StaticPostingsProvider {
    async fn fetch(&self, year: i32) -> Result<Vec<Posting>, ServerError> {
        self.generate(year)
    }
}

/// January to November, days 1–28, so every generated date is valid.
fn random_date(rng: &mut StdRng, year: i32) -> Result<NaiveDate, ServerError> {
    let month = rng.gen_range(1..=11);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CriticalError::with_debug(
            "generated posting date unexpectedly invalid",
            &format!("year: {}, month: {}, day: {}", year, month, day),
        )
    })
}

fn random_letter(rng: &mut StdRng, first: char) -> char {
    char::from(first as u8 + rng.gen_range(0..5))
}
