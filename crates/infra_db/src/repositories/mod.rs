//! Repository implementations
//!
//! Concrete adapters behind the domain storage ports. Repositories
//! encapsulate SQL and map between database rows and domain entities;
//! nothing outside this module sees a row type.

pub mod fund;

pub use fund::PgFundRepository;
