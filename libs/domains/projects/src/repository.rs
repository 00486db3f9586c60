use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProjectError, ProjectResult};
use crate::models::ProjectRecord;

/// Repository trait for Project rows and their associations.
///
/// Children must already exist; the repository only writes the project row and
/// association rows, atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: ProjectRecord) -> ProjectResult<i64>;

    async fn list(&self) -> ProjectResult<Vec<ProjectRecord>>;

    async fn list_by_customer(&self, customer_id: i64) -> ProjectResult<Vec<ProjectRecord>>;

    async fn get(&self, id: i64) -> ProjectResult<ProjectRecord>;

    /// Update the row and replace every association set with the record's ids.
    async fn update(&self, project: ProjectRecord) -> ProjectResult<()>;

    /// Remove the associations and the row. Children are left in place.
    async fn delete(&self, id: i64) -> ProjectResult<()>;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<ProjectRecord>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, mut project: ProjectRecord) -> ProjectResult<i64> {
        let mut projects = self.projects.write().await;
        project.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = project.id;
        projects.push(project);

        tracing::info!(project_id = id, "Created project");
        Ok(id)
    }

    async fn list(&self) -> ProjectResult<Vec<ProjectRecord>> {
        Ok(self.projects.read().await.clone())
    }

    async fn list_by_customer(&self, customer_id: i64) -> ProjectResult<Vec<ProjectRecord>> {
        let projects = self.projects.read().await;
        Ok(projects
            .iter()
            .filter(|p| p.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> ProjectResult<ProjectRecord> {
        let projects = self.projects.read().await;
        projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectError::NotFound(id))
    }

    async fn update(&self, project: ProjectRecord) -> ProjectResult<()> {
        let mut projects = self.projects.write().await;
        let slot = projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or(ProjectError::NotFound(project.id))?;
        *slot = project;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ProjectResult<()> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Err(ProjectError::NotFound(id));
        }
        tracing::info!(project_id = id, "Deleted project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, customer_id: i64) -> ProjectRecord {
        ProjectRecord {
            name: name.into(),
            customer_id,
            manager_ids: vec![20],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_by_customer_filters_in_insertion_order() {
        let repo = InMemoryProjectRepository::new();
        repo.create(record("A", 10)).await.unwrap();
        repo.create(record("B", 11)).await.unwrap();
        repo.create(record("C", 10)).await.unwrap();

        let names: Vec<_> = repo
            .list_by_customer(10)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["A", "C"]);
        assert!(repo.list_by_customer(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_associations() {
        let repo = InMemoryProjectRepository::new();
        let id = repo.create(record("A", 10)).await.unwrap();

        let mut updated = repo.get(id).await.unwrap();
        updated.manager_ids = vec![21, 22];
        repo.update(updated).await.unwrap();

        assert_eq!(repo.get(id).await.unwrap().manager_ids, vec![21, 22]);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryProjectRepository::new();
        let id = repo.create(record("A", 10)).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(matches!(repo.delete(id).await, Err(ProjectError::NotFound(_))));
    }
}
