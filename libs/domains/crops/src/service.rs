use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CropError, CropResult};
use crate::models::{Crop, UpdateCrop};
use crate::repository::CropRepository;

/// Service layer for Crop operations
pub struct CropService<R: CropRepository> {
    repository: Arc<R>,
}

impl<R: CropRepository> Clone for CropService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CropRepository> CropService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, crop), fields(crop_name = %crop.name))]
    pub async fn create_crop(&self, crop: Crop) -> CropResult<i64> {
        crop.validate()
            .map_err(|e| CropError::Validation(e.to_string()))?;

        self.repository.create(crop).await
    }

    #[instrument(skip(self))]
    pub async fn list_crops(&self) -> CropResult<Vec<Crop>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_crop(&self, id: i64) -> CropResult<Crop> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_crop(&self, id: i64, input: UpdateCrop) -> CropResult<()> {
        input
            .validate()
            .map_err(|e| CropError::Validation(e.to_string()))?;

        let mut crop = self.repository.get(id).await?;
        crop.apply_update(input);
        self.repository.update(crop).await
    }

    #[instrument(skip(self))]
    pub async fn delete_crop(&self, id: i64) -> CropResult<()> {
        self.repository.delete(id).await
    }
}
