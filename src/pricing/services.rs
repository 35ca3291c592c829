//! Pricing service functions with store access.
//!
//! These functions gather the engine inputs (base price, holiday snapshot)
//! from the cache or the store and run the pure calculators.

use std::sync::Arc;

use tracing::debug;

use crate::cache::AppCache;
use crate::error::Result;
use crate::store::PriceStore;

use super::calculators::calculate_cost;
use super::date::{parse_date, CivilDate};
use super::models::TicketType;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid date format: {input:?}")]
    InvalidDateFormat { input: String },

    #[error("No base price registered for ticket type {ticket_type:?}")]
    UnknownTicketType { ticket_type: String },
}

/// A validated price request
#[derive(Debug, Clone)]
pub struct PriceRequest<'a> {
    pub ticket_type: &'a str,
    pub age: Option<u32>,
    pub date: Option<&'a str>,
}

/// Base price for a ticket type, cache first.
///
/// A miss fills the cache under the shared side of `base_price_fill`, so a
/// concurrent `set_base_price` cannot be overwritten by the value read
/// before it.
pub async fn find_base_price(
    store: &dyn PriceStore,
    cache: &AppCache,
    ticket_type: &str,
) -> Result<u32> {
    if let Some(cost) = cache.base_prices.get(ticket_type).await {
        debug!("Cache HIT for base price: {}", ticket_type);
        return Ok(cost);
    }

    debug!("Cache MISS for base price: {}", ticket_type);
    let _fill = cache.base_price_fill.read().await;
    let cost = store
        .find_base_price(ticket_type)
        .await?
        .ok_or_else(|| PricingError::UnknownTicketType {
            ticket_type: ticket_type.to_string(),
        })?;

    cache.base_prices.insert(ticket_type.to_string(), cost).await;
    Ok(cost)
}

/// Full holiday snapshot, cache first.
pub async fn load_holidays(store: &dyn PriceStore, cache: &AppCache) -> Result<Arc<[CivilDate]>> {
    if let Some(holidays) = cache.holidays().await {
        return Ok(holidays);
    }

    let holidays: Arc<[CivilDate]> = store.holidays().await?.into();
    cache.insert_holidays(holidays.clone()).await;
    debug!("Loaded {} holidays", holidays.len());
    Ok(holidays)
}

/// Compute the cost of a ticket end to end.
///
/// The base price is resolved before the date is parsed, so an unknown
/// ticket type is reported ahead of a malformed date.
pub async fn quote_price(
    store: &dyn PriceStore,
    cache: &AppCache,
    request: PriceRequest<'_>,
) -> Result<u32> {
    let base_price = find_base_price(store, cache, request.ticket_type).await?;
    let date = parse_date(request.date)?;
    let holidays = load_holidays(store, cache).await?;

    let ticket_type = TicketType::from_tag(request.ticket_type);
    let cost = calculate_cost(request.age, ticket_type, date.as_ref(), base_price, &holidays);

    debug!(
        ticket_type = request.ticket_type,
        age = ?request.age,
        date = ?date.map(|d| d.to_string()),
        base_price,
        cost,
        "Priced ticket"
    );

    Ok(cost)
}

/// Register or overwrite a base price and drop the cached value.
pub async fn set_base_price(
    store: &dyn PriceStore,
    cache: &AppCache,
    ticket_type: &str,
    cost: u32,
) -> Result<()> {
    let _write = cache.base_price_fill.write().await;
    store.set_base_price(ticket_type, cost).await?;
    cache.invalidate_base_price(ticket_type).await;
    Ok(())
}
