//! Storage for base prices and holidays.
//!
//! `PgPriceStore` is the production backend. `InMemoryPriceStore` serves
//! DB-less runs and tests; both start from the same default tariff.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::pricing::date::CivilDate;
use crate::pricing::queries;

/// Default base prices (type, cost)
pub const DEFAULT_BASE_PRICES: [(&str, u32); 2] = [("1jour", 35), ("night", 19)];

/// Default holidays (year, month, day)
pub const DEFAULT_HOLIDAYS: [(i32, u32, u32); 3] = [(2019, 2, 18), (2019, 2, 25), (2019, 3, 4)];

/// Read/write access to the pricing data the engine consumes.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Base price for a ticket type, `None` if the type is not registered.
    async fn find_base_price(&self, ticket_type: &str) -> Result<Option<u32>>;

    /// Set or overwrite the base price for a ticket type.
    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<()>;

    /// Every holiday on record.
    async fn holidays(&self) -> Result<Vec<CivilDate>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn find_base_price(&self, ticket_type: &str) -> Result<Option<u32>> {
        let row = queries::find_base_price_by_type(&self.pool, ticket_type).await?;

        row.map(|price| {
            u32::try_from(price.cost).map_err(|_| {
                AppError::Internal(format!(
                    "base price {} for {} out of range",
                    price.cost, price.ticket_type
                ))
            })
        })
        .transpose()
    }

    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<()> {
        queries::set_base_price(&self.pool, ticket_type, i64::from(cost)).await
    }

    async fn holidays(&self) -> Result<Vec<CivilDate>> {
        let rows = queries::get_holidays(&self.pool).await?;
        Ok(rows.into_iter().map(CivilDate::from).collect())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    prices: RwLock<HashMap<String, u32>>,
    holidays: RwLock<Vec<CivilDate>>,
}

impl InMemoryPriceStore {
    pub fn new(prices: HashMap<String, u32>, holidays: Vec<CivilDate>) -> Self {
        Self {
            prices: RwLock::new(prices),
            holidays: RwLock::new(holidays),
        }
    }

    /// Store seeded with the default tariff and holidays
    pub fn with_defaults() -> Self {
        let prices = DEFAULT_BASE_PRICES
            .iter()
            .map(|(ticket_type, cost)| (ticket_type.to_string(), *cost))
            .collect();
        let holidays = DEFAULT_HOLIDAYS
            .iter()
            .filter_map(|&(y, m, d)| CivilDate::from_ymd(y, m, d))
            .collect();
        Self::new(prices, holidays)
    }

    pub async fn add_holiday(&self, date: CivilDate) {
        self.holidays.write().await.push(date);
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn find_base_price(&self, ticket_type: &str) -> Result<Option<u32>> {
        Ok(self.prices.read().await.get(ticket_type).copied())
    }

    async fn set_base_price(&self, ticket_type: &str, cost: u32) -> Result<()> {
        self.prices
            .write()
            .await
            .insert(ticket_type.to_string(), cost);
        Ok(())
    }

    async fn holidays(&self) -> Result<Vec<CivilDate>> {
        Ok(self.holidays.read().await.clone())
    }
}
