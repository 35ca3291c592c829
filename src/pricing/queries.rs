//! Database queries for base prices and holidays.

use sqlx::PgPool;

use crate::error::AppError;

use super::models::{BasePrice, Holiday};

/// Create the pricing tables if missing and seed the default tariff when empty.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS base_price (
            type TEXT PRIMARY KEY,
            cost BIGINT NOT NULL CHECK (cost >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            holiday DATE PRIMARY KEY,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO base_price (type, cost)
        VALUES ('1jour', 35), ('night', 19)
        ON CONFLICT (type) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO holidays (holiday, description)
        VALUES
            ('2019-02-18', 'winter'),
            ('2019-02-25', 'winter'),
            ('2019-03-04', 'winter')
        ON CONFLICT (holiday) DO NOTHING
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Find the base price registered for a ticket type
pub async fn find_base_price_by_type(
    pool: &PgPool,
    ticket_type: &str,
) -> Result<Option<BasePrice>, AppError> {
    let price = sqlx::query_as::<_, BasePrice>(
        r#"
        SELECT type, cost
        FROM base_price
        WHERE type = $1
        "#,
    )
    .bind(ticket_type)
    .fetch_optional(pool)
    .await?;

    Ok(price)
}

/// Insert or overwrite the base price for a ticket type
pub async fn set_base_price(pool: &PgPool, ticket_type: &str, cost: i64) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO base_price (type, cost)
        VALUES ($1, $2)
        ON CONFLICT (type) DO UPDATE SET cost = EXCLUDED.cost
        "#,
    )
    .bind(ticket_type)
    .bind(cost)
    .execute(pool)
    .await?;

    Ok(())
}

/// All holidays on record
pub async fn get_holidays(pool: &PgPool) -> Result<Vec<Holiday>, AppError> {
    let holidays = sqlx::query_as::<_, Holiday>(
        r#"
        SELECT holiday, description
        FROM holidays
        ORDER BY holiday
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}
