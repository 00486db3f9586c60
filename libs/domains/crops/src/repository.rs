use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{CropError, CropResult};
use crate::models::Crop;

/// Repository trait for Crop persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CropRepository: Send + Sync {
    /// Insert a crop and return the storage-assigned id
    async fn create(&self, crop: Crop) -> CropResult<i64>;

    async fn list(&self) -> CropResult<Vec<Crop>>;

    async fn get(&self, id: i64) -> CropResult<Crop>;

    /// Replace the stored row matching `crop.id`
    async fn update(&self, crop: Crop) -> CropResult<()>;

    async fn delete(&self, id: i64) -> CropResult<()>;
}

/// In-memory implementation of CropRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryCropRepository {
    crops: Arc<RwLock<Vec<Crop>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCropRepository {
    pub fn new() -> Self {
        Self {
            crops: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryCropRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CropRepository for InMemoryCropRepository {
    async fn create(&self, mut crop: Crop) -> CropResult<i64> {
        let mut crops = self.crops.write().await;
        crop.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = crop.id;
        crops.push(crop);

        tracing::info!(crop_id = id, "Created crop");
        Ok(id)
    }

    async fn list(&self) -> CropResult<Vec<Crop>> {
        Ok(self.crops.read().await.clone())
    }

    async fn get(&self, id: i64) -> CropResult<Crop> {
        let crops = self.crops.read().await;
        crops
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CropError::NotFound(id))
    }

    async fn update(&self, crop: Crop) -> CropResult<()> {
        let mut crops = self.crops.write().await;
        let slot = crops
            .iter_mut()
            .find(|c| c.id == crop.id)
            .ok_or(CropError::NotFound(crop.id))?;
        *slot = crop;
        Ok(())
    }

    async fn delete(&self, id: i64) -> CropResult<()> {
        let mut crops = self.crops.write().await;
        let before = crops.len();
        crops.retain(|c| c.id != id);

        if crops.len() == before {
            return Err(CropError::NotFound(id));
        }
        tracing::info!(crop_id = id, "Deleted crop");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(name: &str) -> Crop {
        Crop {
            id: 0,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repo = InMemoryCropRepository::new();

        assert_eq!(repo.create(crop("Soja")).await.unwrap(), 1);
        assert_eq!(repo.create(crop("Maíz")).await.unwrap(), 2);

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Soja", "Maíz"]);
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let repo = InMemoryCropRepository::new();

        assert!(matches!(repo.get(7).await, Err(CropError::NotFound(7))));
        assert!(matches!(
            repo.update(Crop {
                id: 7,
                name: "Trigo".into()
            })
            .await,
            Err(CropError::NotFound(7))
        ));
        assert!(matches!(repo.delete(7).await, Err(CropError::NotFound(7))));
    }
}
