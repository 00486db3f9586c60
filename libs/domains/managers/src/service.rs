use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ManagerError, ManagerResult};
use crate::models::{Manager, UpdateManager};
use crate::repository::ManagerRepository;

/// Service layer for Manager operations
pub struct ManagerService<R: ManagerRepository> {
    repository: Arc<R>,
}

impl<R: ManagerRepository> Clone for ManagerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ManagerRepository> ManagerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, manager), fields(manager_name = %manager.name))]
    pub async fn create_manager(&self, manager: Manager) -> ManagerResult<i64> {
        manager
            .validate()
            .map_err(|e| ManagerError::Validation(e.to_string()))?;

        self.repository.create(manager).await
    }

    #[instrument(skip(self))]
    pub async fn list_managers(&self) -> ManagerResult<Vec<Manager>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_manager(&self, id: i64) -> ManagerResult<Manager> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_manager(&self, id: i64, input: UpdateManager) -> ManagerResult<()> {
        input
            .validate()
            .map_err(|e| ManagerError::Validation(e.to_string()))?;

        let mut manager = self.repository.get(id).await?;
        manager.apply_update(input);
        self.repository.update(manager).await
    }

    #[instrument(skip(self))]
    pub async fn delete_manager(&self, id: i64) -> ManagerResult<()> {
        self.repository.delete(id).await
    }
}
