use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use lift_pass_pricing::cache::AppCache;
use lift_pass_pricing::config::AppConfig;
use lift_pass_pricing::pricing::queries;
use lift_pass_pricing::store::{InMemoryPriceStore, PgPriceStore, PriceStore};
use lift_pass_pricing::{app, init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_json);

    let store: Arc<dyn PriceStore> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await
                .context("connecting to database")?;
            queries::ensure_schema(&pool)
                .await
                .context("preparing pricing tables")?;
            info!("Using PostgreSQL price store");
            Arc::new(PgPriceStore::new(pool))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory price store");
            Arc::new(InMemoryPriceStore::with_defaults())
        }
    };

    let state = AppState::new(store, AppCache::new(config.cache_ttl));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Lift pass pricing listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
