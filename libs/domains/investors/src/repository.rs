use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{InvestorError, InvestorResult};
use crate::models::Investor;

/// Repository trait for Investor persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvestorRepository: Send + Sync {
    /// Insert an investor and return the storage-assigned id
    async fn create(&self, investor: Investor) -> InvestorResult<i64>;

    async fn list(&self) -> InvestorResult<Vec<Investor>>;

    async fn get(&self, id: i64) -> InvestorResult<Investor>;

    async fn update(&self, investor: Investor) -> InvestorResult<()>;

    async fn delete(&self, id: i64) -> InvestorResult<()>;
}

/// In-memory implementation of InvestorRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryInvestorRepository {
    investors: Arc<RwLock<Vec<Investor>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryInvestorRepository {
    pub fn new() -> Self {
        Self {
            investors: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryInvestorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvestorRepository for InMemoryInvestorRepository {
    async fn create(&self, mut investor: Investor) -> InvestorResult<i64> {
        let mut investors = self.investors.write().await;
        investor.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = investor.id;
        investors.push(investor);

        tracing::info!(investor_id = id, "Created investor");
        Ok(id)
    }

    async fn list(&self) -> InvestorResult<Vec<Investor>> {
        Ok(self.investors.read().await.clone())
    }

    async fn get(&self, id: i64) -> InvestorResult<Investor> {
        let investors = self.investors.read().await;
        investors
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(InvestorError::NotFound(id))
    }

    async fn update(&self, investor: Investor) -> InvestorResult<()> {
        let mut investors = self.investors.write().await;
        let slot = investors
            .iter_mut()
            .find(|c| c.id == investor.id)
            .ok_or(InvestorError::NotFound(investor.id))?;
        *slot = investor;
        Ok(())
    }

    async fn delete(&self, id: i64) -> InvestorResult<()> {
        let mut investors = self.investors.write().await;
        let before = investors.len();
        investors.retain(|c| c.id != id);

        if investors.len() == before {
            return Err(InvestorError::NotFound(id));
        }
        tracing::info!(investor_id = id, "Deleted investor");
        Ok(())
    }
}
