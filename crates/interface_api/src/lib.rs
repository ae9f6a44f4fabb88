//! HTTP API Layer
//!
//! This crate provides the REST API for the finance dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: thin delegation from routes to the fund storage port
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_fund::FundRepository;
use infra_db::PgFundRepository;

use crate::config::ApiConfig;
use crate::handlers::{fund, health};

/// Application state shared across handlers
///
/// Handlers see only the storage port, never a concrete database type, so
/// tests can swap in an in-memory adapter.
#[derive(Clone)]
pub struct AppState {
    pub funds: Arc<dyn FundRepository>,
    pub config: ApiConfig,
}

/// Creates the API router backed by PostgreSQL
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let funds: Arc<dyn FundRepository> = Arc::new(PgFundRepository::new(pool));
    router(AppState { funds, config })
}

/// Creates the API router over an arbitrary storage adapter
pub fn router(state: AppState) -> Router {
    let fund_routes = Router::new()
        .route("/", get(fund::list_funds).post(fund::create_fund))
        .route("/:id", delete(fund::delete_fund));

    // CORS stays wide open: the API fronts a browser SPA and carries no
    // credentials.
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/funds", fund_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
