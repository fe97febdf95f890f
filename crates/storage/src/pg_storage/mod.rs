//! PostgreSQL storage backend using sqlx.
//!
//! The like set lives in a `TEXT[]` column so set-add and set-remove are
//! single `UPDATE ... RETURNING` statements.

mod attributes;

use std::collections::BTreeSet;

use bookstall_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    SyntheticAttributeRecord,
};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) const ATTRIBUTE_COLUMNS: &str = "id, price, rating, liked_by, created_at";

pub(crate) fn row_to_record(
    row: &sqlx::postgres::PgRow,
) -> Result<SyntheticAttributeRecord, StorageError> {
    let id: String = row.try_get("id")?;
    let price: i32 = row.try_get("price")?;
    let rating: i16 = row.try_get("rating")?;
    let liked_by: Vec<String> = row.try_get("liked_by")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    let price = u32::try_from(price)
        .map_err(|e| StorageError::corrupt(format!("price {price} for {id}"), e))?;
    let rating = u8::try_from(rating)
        .map_err(|e| StorageError::corrupt(format!("rating {rating} for {id}"), e))?;

    Ok(SyntheticAttributeRecord {
        id,
        price,
        rating,
        liked_by: liked_by.into_iter().collect::<BTreeSet<_>>(),
        created_at,
    })
}
