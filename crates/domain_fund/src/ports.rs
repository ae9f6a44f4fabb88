//! Fund Domain Ports
//!
//! This module defines the port interface for fund storage, enabling
//! swappable implementations (PostgreSQL, in-memory mock, etc.).
//!
//! # Architecture
//!
//! The `FundRepository` trait defines all operations the fund domain needs
//! from its data source. Multiple adapters can implement this trait:
//!
//! - **PostgreSQL Adapter**: `infra_db::PgFundRepository`
//! - **In-Memory Adapter**: for testing without external dependencies
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_fund::FundRepository;
//! use std::sync::Arc;
//!
//! // The HTTP layer receives the port trait, not a concrete store
//! let funds: Arc<dyn FundRepository> = Arc::new(PgFundRepository::new(pool));
//! let all = funds.list_all().await?;
//! ```

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::FundError;
use crate::fund::Fund;

/// Storage port for fund records
///
/// Each operation is a single round trip against the store. Implementations
/// acquire whatever connection handle they need per call and release it on
/// every exit path; no connection state is held between calls.
#[async_trait]
pub trait FundRepository: Send + Sync {
    /// Retrieves all funds, ordered by descending id
    /// (most-recently-inserted first). An empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Fund>, FundError>;

    /// Retrieves a single fund by id, or `None` if no such row exists
    async fn get_by_id(&self, id: i32) -> Result<Option<Fund>, FundError>;

    /// Inserts a new fund from `name`, `ticker` and `nav`; the store
    /// assigns the id. Returns the created fund carrying that id.
    ///
    /// No uniqueness or validation checks are performed: duplicate tickers
    /// and empty names are accepted silently.
    async fn add(&self, name: &str, ticker: &str, nav: Decimal) -> Result<Fund, FundError>;

    /// Deletes the fund with the given id. Deleting a non-existent id is a
    /// no-op at the store level, not an error.
    async fn delete(&self, id: i32) -> Result<(), FundError>;
}
