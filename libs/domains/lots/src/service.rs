use async_trait::async_trait;
use domain_crops::{Crop, CropRepository, CropResult, CropService};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{LotError, LotResult};
use crate::models::{Lot, UpdateLot};
use crate::repository::LotRepository;

/// Read access to the crop catalog, used to embed crops into lots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CropLookup: Send + Sync {
    async fn get_crop(&self, id: i64) -> CropResult<Crop>;
}

#[async_trait]
impl<R: CropRepository + 'static> CropLookup for CropService<R> {
    async fn get_crop(&self, id: i64) -> CropResult<Crop> {
        CropService::get_crop(self, id).await
    }
}

/// Service layer for Lot operations
pub struct LotService<R: LotRepository> {
    repository: Arc<R>,
    crops: Arc<dyn CropLookup>,
}

impl<R: LotRepository> Clone for LotService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            crops: Arc::clone(&self.crops),
        }
    }
}

impl<R: LotRepository> LotService<R> {
    pub fn new(repository: R, crops: Arc<dyn CropLookup>) -> Self {
        Self {
            repository: Arc::new(repository),
            crops,
        }
    }

    #[instrument(skip(self, lot), fields(lot_name = %lot.name, field_id = lot.field_id))]
    pub async fn create_lot(&self, lot: Lot) -> LotResult<i64> {
        lot.validate()
            .map_err(|e| LotError::Validation(e.to_string()))?;

        self.repository.create(lot).await
    }

    /// All lots, each with both crops embedded. One failed lookup fails the whole list.
    #[instrument(skip(self))]
    pub async fn list_lots(&self) -> LotResult<Vec<Lot>> {
        let lots = self.repository.list().await?;

        let mut enriched = Vec::with_capacity(lots.len());
        for lot in lots {
            enriched.push(self.with_crops(lot).await?);
        }
        Ok(enriched)
    }

    #[instrument(skip(self))]
    pub async fn get_lot(&self, id: i64) -> LotResult<Lot> {
        let lot = self.repository.get(id).await?;
        self.with_crops(lot).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_lot(&self, id: i64, input: UpdateLot) -> LotResult<()> {
        input
            .validate()
            .map_err(|e| LotError::Validation(e.to_string()))?;

        let mut lot = self.repository.get(id).await?;
        lot.apply_update(input);
        self.repository.update(lot).await
    }

    #[instrument(skip(self))]
    pub async fn delete_lot(&self, id: i64) -> LotResult<()> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_lots_of_field(&self, field_id: i64) -> LotResult<u64> {
        self.repository.delete_by_field(field_id).await
    }

    async fn with_crops(&self, mut lot: Lot) -> LotResult<Lot> {
        let previous = self
            .crops
            .get_crop(lot.previous_crop_id)
            .await
            .map_err(|source| LotError::Crop {
                context: format!("fetch previous crop {}", lot.previous_crop_id),
                source,
            })?;
        let current = self
            .crops
            .get_crop(lot.current_crop_id)
            .await
            .map_err(|source| LotError::Crop {
                context: format!("fetch current crop {}", lot.current_crop_id),
                source,
            })?;

        lot.previous_crop = Some(previous);
        lot.current_crop = Some(current);
        Ok(lot)
    }
}
