//! Fund entity
//!
//! This module defines the Fund entity and its properties.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A mutual fund tracked by the dashboard
///
/// The id is assigned by the store on insert; instances built in memory
/// carry a placeholder id of zero until persisted. JSON uses camelCase
/// field names to match the dashboard frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    /// Unique identifier, store-assigned
    #[serde(default)]
    pub id: i32,
    /// Fund name
    pub name: String,
    /// Short symbolic identifier (e.g. "GRW")
    pub ticker: String,
    /// Net asset value, exact decimal
    pub nav: Decimal,
    /// When this instance was materialized; not persisted by the store
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Fund {
    /// Creates a new unpersisted fund
    ///
    /// # Arguments
    ///
    /// * `name` - Fund name
    /// * `ticker` - Short symbolic identifier
    /// * `nav` - Net asset value
    pub fn new(name: impl Into<String>, ticker: impl Into<String>, nav: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            ticker: ticker.into(),
            nav,
            last_updated: Utc::now(),
        }
    }

    /// Returns true if the fund has not yet been assigned a store id
    pub fn is_transient(&self) -> bool {
        self.id == 0
    }
}
