//! Shared Test Utilities
//!
//! Helpers used across the workspace test suites:
//!
//! - [`database`]: PostgreSQL testcontainer management for repository
//!   integration tests
//! - [`memory`]: an in-memory `FundRepository` adapter for exercising the
//!   HTTP layer without a database
//! - [`builders`]: fluent builders for test entities

pub mod builders;
pub mod database;
pub mod memory;

pub use builders::FundBuilder;
pub use database::{create_isolated_test_database, get_shared_test_database, TestDatabase};
pub use memory::InMemoryFundRepository;
