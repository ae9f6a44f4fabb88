//! Fund repository implementation
//!
//! PostgreSQL adapter for the `domain_fund::FundRepository` port. All four
//! operations run against the single `mutual_funds` table with columns
//! `id, name, ticker, nav`, in that order.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use domain_fund::{Fund, FundError, FundRepository};

use crate::error::DatabaseError;

/// PostgreSQL-backed fund repository
///
/// Each operation checks one connection out of the pool, performs exactly
/// one parameterized statement, and releases the connection on every exit
/// path (the pooled handle is dropped whether the statement succeeds or
/// fails). No connection state is carried between calls.
#[derive(Debug, Clone)]
pub struct PgFundRepository {
    pool: PgPool,
}

impl PgFundRepository {
    /// Creates a new repository over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FundRepository for PgFundRepository {
    async fn list_all(&self) -> Result<Vec<Fund>, FundError> {
        let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;

        let rows = sqlx::query_as::<_, FundRow>(
            "SELECT id, name, ticker, nav FROM mutual_funds ORDER BY id DESC",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(DatabaseError::from)?;

        Ok(rows.into_iter().map(Fund::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Fund>, FundError> {
        let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;

        let row = sqlx::query_as::<_, FundRow>(
            "SELECT id, name, ticker, nav FROM mutual_funds WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(DatabaseError::from)?;

        Ok(row.map(Fund::from))
    }

    async fn add(&self, name: &str, ticker: &str, nav: Decimal) -> Result<Fund, FundError> {
        let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;

        let row = sqlx::query_as::<_, FundRow>(
            "INSERT INTO mutual_funds (name, ticker, nav) VALUES ($1, $2, $3) \
             RETURNING id, name, ticker, nav",
        )
        .bind(name)
        .bind(ticker)
        .bind(nav)
        .fetch_one(&mut *conn)
        .await
        .map_err(DatabaseError::from)?;

        tracing::info!(id = row.id, ticker = %row.ticker, "Fund inserted");
        Ok(Fund::from(row))
    }

    async fn delete(&self, id: i32) -> Result<(), FundError> {
        let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;

        // Zero rows affected is fine: deleting an absent id is a no-op.
        sqlx::query("DELETE FROM mutual_funds WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(DatabaseError::from)?;

        Ok(())
    }
}

/// Database row for a fund
///
/// `last_updated` has no backing column; the entity's field is stamped with
/// load time during mapping.
#[derive(Debug, Clone, sqlx::FromRow)]
struct FundRow {
    id: i32,
    name: String,
    ticker: String,
    nav: Decimal,
}

impl From<FundRow> for Fund {
    fn from(row: FundRow) -> Self {
        Fund {
            id: row.id,
            name: row.name,
            ticker: row.ticker,
            nav: row.nav,
            last_updated: Utc::now(),
        }
    }
}
