//! In-memory fund repository
//!
//! A `FundRepository` adapter backed by a `Vec`, for exercising the HTTP
//! layer without a database. Mirrors the store semantics the PostgreSQL
//! adapter relies on: ids are assigned by an internal sequence, listing is
//! ordered by descending id, and deleting an absent id is a no-op.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use domain_fund::{Fund, FundError, FundRepository};

#[derive(Debug, Default)]
struct Inner {
    funds: Vec<Fund>,
    next_id: i32,
}

/// In-memory adapter for the fund storage port
#[derive(Debug, Default)]
pub struct InMemoryFundRepository {
    inner: Mutex<Inner>,
}

impl InMemoryFundRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored funds
    pub async fn len(&self) -> usize {
        self.inner.lock().await.funds.len()
    }

    /// Returns true if no funds are stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FundRepository for InMemoryFundRepository {
    async fn list_all(&self) -> Result<Vec<Fund>, FundError> {
        let inner = self.inner.lock().await;
        let mut funds = inner.funds.clone();
        funds.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(funds)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Fund>, FundError> {
        let inner = self.inner.lock().await;
        Ok(inner.funds.iter().find(|f| f.id == id).cloned())
    }

    async fn add(&self, name: &str, ticker: &str, nav: Decimal) -> Result<Fund, FundError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let fund = Fund {
            id: inner.next_id,
            name: name.to_string(),
            ticker: ticker.to_string(),
            nav,
            last_updated: Utc::now(),
        };
        inner.funds.push(fund.clone());
        Ok(fund)
    }

    async fn delete(&self, id: i32) -> Result<(), FundError> {
        let mut inner = self.inner.lock().await;
        inner.funds.retain(|f| f.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_assigns_sequential_ids() {
        let repo = InMemoryFundRepository::new();

        let first = repo.add("Growth Fund", "GRW", dec!(101.25)).await.unwrap();
        let second = repo.add("Bond Fund", "BND", dec!(99.10)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_is_descending_by_id() {
        let repo = InMemoryFundRepository::new();
        repo.add("A", "A", dec!(1)).await.unwrap();
        repo.add("B", "B", dec!(2)).await.unwrap();
        repo.add("C", "C", dec!(3)).await.unwrap();

        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let repo = InMemoryFundRepository::new();
        repo.add("A", "A", dec!(1)).await.unwrap();

        repo.delete(42).await.unwrap();
        assert_eq!(repo.len().await, 1);
    }
}
