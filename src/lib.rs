//! Lift pass pricing service.
//!
//! `GET /prices` quotes a day or night pass, `PUT /prices` registers base
//! prices. The arithmetic lives in [`pricing::calculators`] and takes every
//! input explicitly; the HTTP layer only gathers those inputs.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod store;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cache::{AppCache, CacheStats};
use store::PriceStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PriceStore>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(store: Arc<dyn PriceStore>, cache: AppCache) -> Self {
        Self { store, cache }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pricing::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` wins over the built-in default filter. Only the first call
/// takes effect.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lift_pass_pricing=debug,sqlx=warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()
            .ok();
    }
}
