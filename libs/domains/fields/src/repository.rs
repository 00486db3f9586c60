use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{FieldError, FieldResult};
use crate::models::Field;

/// Repository trait for Field rows. Lots live in their own repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FieldRepository: Send + Sync {
    async fn create(&self, field: Field) -> FieldResult<i64>;

    async fn list(&self) -> FieldResult<Vec<Field>>;

    async fn get(&self, id: i64) -> FieldResult<Field>;

    async fn update(&self, field: Field) -> FieldResult<()>;

    async fn delete(&self, id: i64) -> FieldResult<()>;
}

/// In-memory implementation of FieldRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryFieldRepository {
    fields: Arc<RwLock<Vec<Field>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryFieldRepository {
    pub fn new() -> Self {
        Self {
            fields: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryFieldRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FieldRepository for InMemoryFieldRepository {
    async fn create(&self, mut field: Field) -> FieldResult<i64> {
        let mut fields = self.fields.write().await;
        field.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        field.lots.clear();
        let id = field.id;
        fields.push(field);

        tracing::info!(field_id = id, "Created field");
        Ok(id)
    }

    async fn list(&self) -> FieldResult<Vec<Field>> {
        Ok(self.fields.read().await.clone())
    }

    async fn get(&self, id: i64) -> FieldResult<Field> {
        let fields = self.fields.read().await;
        fields
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(FieldError::NotFound(id))
    }

    async fn update(&self, mut field: Field) -> FieldResult<()> {
        let mut fields = self.fields.write().await;
        let slot = fields
            .iter_mut()
            .find(|f| f.id == field.id)
            .ok_or(FieldError::NotFound(field.id))?;
        field.lots.clear();
        *slot = field;
        Ok(())
    }

    async fn delete(&self, id: i64) -> FieldResult<()> {
        let mut fields = self.fields.write().await;
        let before = fields.len();
        fields.retain(|f| f.id != id);

        if fields.len() == before {
            return Err(FieldError::NotFound(id));
        }
        tracing::info!(field_id = id, "Deleted field");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_lots::Lot;

    #[tokio::test]
    async fn test_create_drops_nested_lots() {
        let repo = InMemoryFieldRepository::new();
        let id = repo
            .create(Field {
                name: "Field A".into(),
                lease_type_id: 1,
                lots: vec![Lot::default()],
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(repo.get(id).await.unwrap().lots.is_empty());
    }

    #[tokio::test]
    async fn test_ids_increase_in_insertion_order() {
        let repo = InMemoryFieldRepository::new();
        for name in ["North", "South"] {
            repo.create(Field {
                name: name.into(),
                lease_type_id: 2,
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let fields = repo.list().await.unwrap();
        assert_eq!(fields[0].id, 1);
        assert_eq!(fields[1].name, "South");
    }
}
