//! Prices route handlers

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::{PriceQuery, SetPriceQuery};
use super::responses::CostResponse;
use super::services::{self, PriceRequest};

/// Router for `/prices`
pub fn router() -> Router<AppState> {
    Router::new().route("/prices", get(get_price).put(put_price))
}

/// `PUT /prices?type=..&cost=..`
async fn put_price(
    State(state): State<AppState>,
    Query(query): Query<SetPriceQuery>,
) -> Result<Json<()>> {
    let ticket_type = query.ticket_type()?;
    let cost = query.cost()?;
    services::set_base_price(state.store.as_ref(), &state.cache, ticket_type, cost).await?;
    tracing::info!("Base price for {} set to {}", ticket_type, cost);
    Ok(Json(()))
}

/// `GET /prices?type=..[&age=..][&date=..]`
async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<CostResponse>> {
    let request = PriceRequest {
        ticket_type: query.ticket_type()?,
        age: query.age()?,
        date: query.date.as_deref(),
    };

    let cost = services::quote_price(state.store.as_ref(), &state.cache, request).await?;
    Ok(Json(CostResponse { cost }))
}
