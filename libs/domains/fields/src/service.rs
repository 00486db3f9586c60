use async_trait::async_trait;
use domain_lots::{Lot, LotRepository, LotResult, LotService};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{FieldError, FieldResult};
use crate::models::{Field, UpdateField};
use crate::repository::FieldRepository;

/// The lot operations a field needs: nested creation, rollback and enrichment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LotPort: Send + Sync {
    async fn create_lot(&self, lot: Lot) -> LotResult<i64>;

    /// Every lot, crops embedded, in storage order.
    async fn list_lots(&self) -> LotResult<Vec<Lot>>;

    async fn delete_lot(&self, id: i64) -> LotResult<()>;

    async fn delete_lots_of_field(&self, field_id: i64) -> LotResult<u64>;
}

#[async_trait]
impl<R: LotRepository + 'static> LotPort for LotService<R> {
    async fn create_lot(&self, lot: Lot) -> LotResult<i64> {
        LotService::create_lot(self, lot).await
    }

    async fn list_lots(&self) -> LotResult<Vec<Lot>> {
        LotService::list_lots(self).await
    }

    async fn delete_lot(&self, id: i64) -> LotResult<()> {
        LotService::delete_lot(self, id).await
    }

    async fn delete_lots_of_field(&self, field_id: i64) -> LotResult<u64> {
        LotService::delete_lots_of_field(self, field_id).await
    }
}

/// Service layer for Field operations
pub struct FieldService<R: FieldRepository> {
    repository: Arc<R>,
    lots: Arc<dyn LotPort>,
}

impl<R: FieldRepository> Clone for FieldService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            lots: Arc::clone(&self.lots),
        }
    }
}

impl<R: FieldRepository> FieldService<R> {
    pub fn new(repository: R, lots: Arc<dyn LotPort>) -> Self {
        Self {
            repository: Arc::new(repository),
            lots,
        }
    }

    /// Insert the field row, then each nested lot pointing at it.
    ///
    /// When a lot insert fails, the lots already inserted are deleted in creation order
    /// and then the field row. The lot error is returned, or
    /// [`FieldError::Compensation`] when one of those deletes failed as well.
    #[instrument(skip(self, field), fields(field_name = %field.name, lots = field.lots.len()))]
    pub async fn create_field(&self, mut field: Field) -> FieldResult<i64> {
        field
            .validate()
            .map_err(|e| FieldError::Validation(e.to_string()))?;

        let lots = std::mem::take(&mut field.lots);
        let field_id = self.repository.create(field).await?;

        let mut created = Vec::with_capacity(lots.len());
        for mut lot in lots {
            lot.field_id = field_id;
            let context = format!("create lot \"{}\"", lot.name);

            match self.lots.create_lot(lot).await {
                Ok(lot_id) => created.push(lot_id),
                Err(source) => {
                    let err = FieldError::Lot { context, source };
                    return Err(self.roll_back(field_id, &created, err).await);
                }
            }
        }

        Ok(field_id)
    }

    #[instrument(skip(self))]
    pub async fn list_fields(&self) -> FieldResult<Vec<Field>> {
        let mut fields = self.repository.list().await?;
        if fields.is_empty() {
            return Ok(fields);
        }

        let lots = self.all_lots("list lots").await?;
        for field in &mut fields {
            field.lots = lots_of(field.id, &lots);
        }
        Ok(fields)
    }

    #[instrument(skip(self))]
    pub async fn get_field(&self, id: i64) -> FieldResult<Field> {
        let mut field = self.repository.get(id).await?;
        let lots = self.all_lots(&format!("list lots for field {id}")).await?;
        field.lots = lots_of(id, &lots);
        Ok(field)
    }

    #[instrument(skip(self, input))]
    pub async fn update_field(&self, id: i64, input: UpdateField) -> FieldResult<()> {
        input
            .validate()
            .map_err(|e| FieldError::Validation(e.to_string()))?;

        let mut field = self.repository.get(id).await?;
        field.apply_update(input);
        self.repository.update(field).await
    }

    /// Delete the field row, then its lots.
    ///
    /// Postgres already cascades the lots, so the second step only matters for stores
    /// without foreign keys.
    #[instrument(skip(self))]
    pub async fn delete_field(&self, id: i64) -> FieldResult<()> {
        self.repository.delete(id).await?;
        self.lots
            .delete_lots_of_field(id)
            .await
            .map_err(|source| FieldError::Lot {
                context: format!("delete lots of field {id}"),
                source,
            })?;
        Ok(())
    }

    async fn all_lots(&self, context: &str) -> FieldResult<Vec<Lot>> {
        self.lots.list_lots().await.map_err(|source| FieldError::Lot {
            context: context.to_string(),
            source,
        })
    }

    async fn roll_back(&self, field_id: i64, lot_ids: &[i64], err: FieldError) -> FieldError {
        let mut failures = Vec::new();

        for &lot_id in lot_ids {
            tracing::info!(field_id, lot_id, "Rolling back lot");
            if let Err(e) = self.lots.delete_lot(lot_id).await {
                tracing::warn!(field_id, lot_id, error = %e, "Lot rollback failed");
                failures.push(format!("delete lot {lot_id}: {e}"));
            }
        }

        tracing::info!(field_id, "Rolling back field");
        if let Err(e) = self.repository.delete(field_id).await {
            tracing::warn!(field_id, error = %e, "Field rollback failed");
            failures.push(format!("delete field {field_id}: {e}"));
        }

        if failures.is_empty() {
            err
        } else {
            FieldError::Compensation {
                source: Box::new(err),
                failures,
            }
        }
    }
}

/// Lots whose `field_id` matches, in the order they were listed.
fn lots_of(field_id: i64, lots: &[Lot]) -> Vec<Lot> {
    lots.iter()
        .filter(|lot| lot.field_id == field_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryFieldRepository, MockFieldRepository};
    use domain_crops::CropError;
    use domain_lots::LotError;
    use mockall::Sequence;

    fn lot(name: &str, field_id: i64) -> Lot {
        Lot {
            name: name.into(),
            hectares: 10.0,
            season: "2025".into(),
            field_id,
            previous_crop_id: 1,
            current_crop_id: 2,
            ..Default::default()
        }
    }

    fn field_with(lots: Vec<Lot>) -> Field {
        Field {
            id: 0,
            name: "Field A".into(),
            lease_type_id: 1,
            lots,
        }
    }

    #[tokio::test]
    async fn test_nested_lots_get_the_new_field_id() {
        let mut repo = MockFieldRepository::new();
        repo.expect_create()
            .withf(|field| field.lots.is_empty())
            .returning(|_| Ok(40));

        let mut lots = MockLotPort::new();
        lots.expect_create_lot()
            .withf(|lot| lot.field_id == 40)
            .times(2)
            .returning(|_| Ok(1));
        lots.expect_delete_lot().never();

        let service = FieldService::new(repo, Arc::new(lots));
        let id = service
            .create_field(field_with(vec![lot("Lot A", 0), lot("Lot B", 0)]))
            .await
            .unwrap();
        assert_eq!(id, 40);
    }

    #[tokio::test]
    async fn test_lot_failure_rolls_back_lots_then_field() {
        let mut seq = Sequence::new();
        let mut repo = MockFieldRepository::new();
        let mut lots = MockLotPort::new();

        repo.expect_create().returning(|_| Ok(40));
        lots.expect_create_lot()
            .withf(|lot| lot.name == "Lot A")
            .returning(|_| Ok(7));
        lots.expect_create_lot()
            .withf(|lot| lot.name == "Lot B")
            .returning(|_| Ok(8));
        lots.expect_create_lot()
            .withf(|lot| lot.name == "Lot C")
            .returning(|_| Err(LotError::Internal("Database error: fk".into())));

        lots.expect_delete_lot()
            .withf(|id| *id == 7)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        lots.expect_delete_lot()
            .withf(|id| *id == 8)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        repo.expect_delete()
            .withf(|id| *id == 40)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = FieldService::new(repo, Arc::new(lots));
        let result = service
            .create_field(field_with(vec![
                lot("Lot A", 0),
                lot("Lot B", 0),
                lot("Lot C", 0),
            ]))
            .await;

        match result {
            Err(FieldError::Lot { context, source }) => {
                assert_eq!(context, "create lot \"Lot C\"");
                assert!(matches!(source, LotError::Internal(_)));
            }
            other => panic!("expected lot error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_rollback_is_reported() {
        let mut repo = MockFieldRepository::new();
        repo.expect_create().returning(|_| Ok(40));
        repo.expect_delete()
            .times(1)
            .returning(|id| Err(FieldError::Internal(format!("cannot delete {id}"))));

        let mut lots = MockLotPort::new();
        lots.expect_create_lot()
            .returning(|_| Err(LotError::Internal("Database error: fk".into())));

        let service = FieldService::new(repo, Arc::new(lots));
        match service.create_field(field_with(vec![lot("Lot A", 0)])).await {
            Err(FieldError::Compensation { source, failures }) => {
                assert!(matches!(*source, FieldError::Lot { .. }));
                assert_eq!(failures.len(), 1);
                assert!(failures[0].starts_with("delete field 40"));
            }
            other => panic!("expected compensation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_lot_rejected_before_any_write() {
        let mut repo = MockFieldRepository::new();
        repo.expect_create().never();

        let service = FieldService::new(repo, Arc::new(MockLotPort::new()));
        let mut bad = lot("Lot A", 0);
        bad.hectares = 0.0;

        assert!(matches!(
            service.create_field(field_with(vec![bad])).await,
            Err(FieldError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_field_keeps_only_matching_lots_in_order() {
        let mut repo = MockFieldRepository::new();
        repo.expect_get().returning(|id| {
            Ok(Field {
                id,
                name: "Field A".into(),
                lease_type_id: 1,
                lots: Vec::new(),
            })
        });

        let mut lots = MockLotPort::new();
        lots.expect_list_lots().times(1).returning(|| {
            Ok(vec![
                lot("a", 40),
                lot("b", 41),
                lot("c", 40),
                lot("d", 0),
                lot("e", 40),
            ])
        });

        let service = FieldService::new(repo, Arc::new(lots));
        let field = service.get_field(40).await.unwrap();

        let names: Vec<_> = field.lots.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "e"]);
    }

    #[tokio::test]
    async fn test_lot_listing_failure_fails_the_read() {
        let mut repo = MockFieldRepository::new();
        repo.expect_get().returning(|_| Ok(field_with(Vec::new())));

        let mut lots = MockLotPort::new();
        lots.expect_list_lots().returning(|| {
            Err(LotError::Crop {
                context: "fetch current crop 2".into(),
                source: CropError::NotFound(2),
            })
        });

        let service = FieldService::new(repo, Arc::new(lots));
        match service.get_field(40).await {
            Err(FieldError::Lot { context, .. }) => assert_eq!(context, "list lots for field 40"),
            other => panic!("expected lot error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_field_removes_its_lots() {
        let mut seq = Sequence::new();
        let mut repo = MockFieldRepository::new();
        repo.expect_delete()
            .withf(|id| *id == 40)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut lots = MockLotPort::new();
        lots.expect_delete_lots_of_field()
            .withf(|field_id| *field_id == 40)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(2));

        let service = FieldService::new(repo, Arc::new(lots));
        assert!(service.delete_field(40).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_unknown_field_leaves_lots_alone() {
        let mut repo = MockFieldRepository::new();
        repo.expect_delete()
            .returning(|id| Err(FieldError::NotFound(id)));

        let mut lots = MockLotPort::new();
        lots.expect_delete_lots_of_field().never();

        let service = FieldService::new(repo, Arc::new(lots));
        assert!(matches!(
            service.delete_field(5).await,
            Err(FieldError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_list_fields_scans_lots_once_for_many_fields() {
        let repo = InMemoryFieldRepository::new();
        for i in 0..20 {
            repo.create(Field {
                name: format!("Field {i}"),
                lease_type_id: 1,
                ..Default::default()
            })
            .await
            .unwrap();
        }

        let mut lots = MockLotPort::new();
        lots.expect_list_lots().times(1).returning(|| {
            Ok((0..1_000)
                .map(|i| lot(&format!("Lot {i}"), i % 20 + 1))
                .collect())
        });

        let service = FieldService::new(repo, Arc::new(lots));
        let fields = service.list_fields().await.unwrap();

        assert_eq!(fields.len(), 20);
        assert!(fields.iter().all(|f| f.lots.len() == 50));
        assert!(fields.iter().all(|f| f.lots.iter().all(|l| l.field_id == f.id)));
    }
}
