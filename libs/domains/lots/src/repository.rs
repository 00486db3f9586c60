use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{LotError, LotResult};
use crate::models::Lot;

/// Repository trait for Lot persistence
///
/// Implementations store crop ids only; the embedded crops are never persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LotRepository: Send + Sync {
    async fn create(&self, lot: Lot) -> LotResult<i64>;

    async fn list(&self) -> LotResult<Vec<Lot>>;

    async fn get(&self, id: i64) -> LotResult<Lot>;

    async fn update(&self, lot: Lot) -> LotResult<()>;

    async fn delete(&self, id: i64) -> LotResult<()>;

    /// Remove every lot of `field_id`, returning how many went.
    async fn delete_by_field(&self, field_id: i64) -> LotResult<u64>;
}

/// In-memory implementation of LotRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryLotRepository {
    lots: Arc<RwLock<Vec<Lot>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryLotRepository {
    pub fn new() -> Self {
        Self {
            lots: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryLotRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LotRepository for InMemoryLotRepository {
    async fn create(&self, mut lot: Lot) -> LotResult<i64> {
        let mut lots = self.lots.write().await;
        lot.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        lot.previous_crop = None;
        lot.current_crop = None;
        let id = lot.id;
        lots.push(lot);

        tracing::info!(lot_id = id, "Created lot");
        Ok(id)
    }

    async fn list(&self) -> LotResult<Vec<Lot>> {
        Ok(self.lots.read().await.clone())
    }

    async fn get(&self, id: i64) -> LotResult<Lot> {
        let lots = self.lots.read().await;
        lots.iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(LotError::NotFound(id))
    }

    async fn update(&self, mut lot: Lot) -> LotResult<()> {
        let mut lots = self.lots.write().await;
        let slot = lots
            .iter_mut()
            .find(|l| l.id == lot.id)
            .ok_or(LotError::NotFound(lot.id))?;
        lot.previous_crop = None;
        lot.current_crop = None;
        *slot = lot;
        Ok(())
    }

    async fn delete(&self, id: i64) -> LotResult<()> {
        let mut lots = self.lots.write().await;
        let before = lots.len();
        lots.retain(|l| l.id != id);

        if lots.len() == before {
            return Err(LotError::NotFound(id));
        }
        tracing::info!(lot_id = id, "Deleted lot");
        Ok(())
    }

    async fn delete_by_field(&self, field_id: i64) -> LotResult<u64> {
        let mut lots = self.lots.write().await;
        let before = lots.len();
        lots.retain(|l| l.field_id != field_id);

        let removed = (before - lots.len()) as u64;
        tracing::info!(field_id, removed, "Deleted lots of field");
        Ok(removed)
    }
}
