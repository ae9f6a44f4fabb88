//! Fund Domain
//!
//! This crate defines the core of the fund tracker: the [`Fund`] entity and
//! the [`FundRepository`] port that storage adapters implement.
//!
//! # Architecture
//!
//! The domain owns the entity shape and the port trait; it knows nothing
//! about SQL or HTTP. Adapters (PostgreSQL in `infra_db`, in-memory in
//! `test_utils`) plug in behind [`FundRepository`].

pub mod error;
pub mod fund;
pub mod ports;

pub use error::FundError;
pub use fund::Fund;
pub use ports::FundRepository;
