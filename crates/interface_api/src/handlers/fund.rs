//! Fund handlers
//!
//! Pure delegation: each handler maps one request kind onto one or two port
//! calls and translates the result into a response. No business logic.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::dto::fund::{CreateFundRequest, FundResponse};
use crate::{error::ApiError, AppState};

/// Lists all funds, most recently inserted first
///
/// An empty table is a normal outcome: 200 with an empty array.
pub async fn list_funds(
    State(state): State<AppState>,
) -> Result<Json<Vec<FundResponse>>, ApiError> {
    let funds = state.funds.list_all().await?;
    Ok(Json(funds.into_iter().map(FundResponse::from).collect()))
}

/// Creates a fund and echoes it back with its store-assigned id
pub async fn create_fund(
    State(state): State<AppState>,
    Json(request): Json<CreateFundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let fund = state
        .funds
        .add(&request.name, &request.ticker, request.nav)
        .await?;

    let location = format!("/api/funds/{}", fund.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FundResponse::from(fund)),
    ))
}

/// Deletes a fund by id
///
/// The existence check exists only to produce a distinguishable 404; it is
/// not atomic with the delete, and a concurrent delete of the same id can
/// win the race between the two round trips.
pub async fn delete_fund(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if state.funds.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Fund with id {} not found", id)));
    }

    state.funds.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
