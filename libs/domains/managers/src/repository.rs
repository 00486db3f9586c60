use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ManagerError, ManagerResult};
use crate::models::Manager;

/// Repository trait for Manager persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Insert a manager and return the storage-assigned id
    async fn create(&self, manager: Manager) -> ManagerResult<i64>;

    async fn list(&self) -> ManagerResult<Vec<Manager>>;

    async fn get(&self, id: i64) -> ManagerResult<Manager>;

    async fn update(&self, manager: Manager) -> ManagerResult<()>;

    async fn delete(&self, id: i64) -> ManagerResult<()>;
}

/// In-memory implementation of ManagerRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryManagerRepository {
    managers: Arc<RwLock<Vec<Manager>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryManagerRepository {
    pub fn new() -> Self {
        Self {
            managers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryManagerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagerRepository {
    async fn create(&self, mut manager: Manager) -> ManagerResult<i64> {
        let mut managers = self.managers.write().await;
        manager.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = manager.id;
        managers.push(manager);

        tracing::info!(manager_id = id, "Created manager");
        Ok(id)
    }

    async fn list(&self) -> ManagerResult<Vec<Manager>> {
        Ok(self.managers.read().await.clone())
    }

    async fn get(&self, id: i64) -> ManagerResult<Manager> {
        let managers = self.managers.read().await;
        managers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ManagerError::NotFound(id))
    }

    async fn update(&self, manager: Manager) -> ManagerResult<()> {
        let mut managers = self.managers.write().await;
        let slot = managers
            .iter_mut()
            .find(|c| c.id == manager.id)
            .ok_or(ManagerError::NotFound(manager.id))?;
        *slot = manager;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ManagerResult<()> {
        let mut managers = self.managers.write().await;
        let before = managers.len();
        managers.retain(|c| c.id != id);

        if managers.len() == before {
            return Err(ManagerError::NotFound(id));
        }
        tracing::info!(manager_id = id, "Deleted manager");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_stored_manager() {
        let repo = InMemoryManagerRepository::new();
        let id = repo
            .create(Manager {
                id: 0,
                name: "Manager A".into(),
                kind: "agronomist".into(),
            })
            .await
            .unwrap();

        repo.update(Manager {
            id,
            name: "Manager B".into(),
            kind: "contractor".into(),
        })
        .await
        .unwrap();

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.name, "Manager B");
        assert_eq!(stored.kind, "contractor");
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryManagerRepository::new();
        let id = repo.create(Manager::default()).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(matches!(repo.delete(id).await, Err(ManagerError::NotFound(_))));
    }
}
