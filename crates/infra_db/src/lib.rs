//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL side of the fund tracker: connection
//! pool construction and the repository adapter behind the
//! `domain_fund::FundRepository` port.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: SQL lives here and nowhere
//! else, and rows are mapped into domain entities before they leave the
//! crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgFundRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/finance")).await?;
//! let repo = PgFundRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::PgFundRepository;
