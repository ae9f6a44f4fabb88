//! Fund DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_fund::Fund;

/// Payload for creating a fund; the store assigns the id
///
/// No validation beyond type coercion: empty names and zero or negative
/// navs are accepted as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundRequest {
    pub name: String,
    pub ticker: String,
    pub nav: Decimal,
}

/// A fund as returned to the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundResponse {
    pub id: i32,
    pub name: String,
    pub ticker: String,
    pub nav: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl From<Fund> for FundResponse {
    fn from(fund: Fund) -> Self {
        Self {
            id: fund.id,
            name: fund.name,
            ticker: fund.ticker,
            nav: fund.nav,
            last_updated: fund.last_updated,
        }
    }
}
