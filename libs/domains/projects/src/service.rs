use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{Project, ProjectRecord, UpdateProject};
use crate::ports::{CustomerPort, FieldPort, InvestorPort, ManagerPort};
use crate::repository::ProjectRepository;
use crate::saga::{CompensationFailure, Saga, Step};

/// Project orchestration over the child services.
///
/// Creating a project writes through several independent services, so it is not
/// atomic. Every child row created along the way is recorded, and when a later step
/// fails those rows are deleted again before the error is returned. Only the final
/// write of the project row and its associations is a single transaction.
///
/// Compensation runs inside the request future: if the caller drops it mid-create,
/// neither the remaining steps nor the rollback run.
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
    customers: Arc<dyn CustomerPort>,
    managers: Arc<dyn ManagerPort>,
    investors: Arc<dyn InvestorPort>,
    fields: Arc<dyn FieldPort>,
}

impl<R: ProjectRepository> Clone for ProjectService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            customers: Arc::clone(&self.customers),
            managers: Arc::clone(&self.managers),
            investors: Arc::clone(&self.investors),
            fields: Arc::clone(&self.fields),
        }
    }
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(
        repository: R,
        customers: Arc<dyn CustomerPort>,
        managers: Arc<dyn ManagerPort>,
        investors: Arc<dyn InvestorPort>,
        fields: Arc<dyn FieldPort>,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            customers,
            managers,
            investors,
            fields,
        }
    }

    /// Create the project and whatever children it brings.
    ///
    /// The customer, managers and investors are created only when their id is `0`;
    /// otherwise the existing row is linked. Fields are always created, together with
    /// their lots. On failure the rows created by this call are deleted (fields,
    /// investors, managers, customer) and the triggering error is returned, wrapped in
    /// [`ProjectError::Compensation`] if any of those deletes failed.
    #[instrument(skip(self, project), fields(project_name = %project.name))]
    pub async fn create_project(&self, mut project: Project) -> ProjectResult<i64> {
        project
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let mut saga = Saga::default();

        if project.customer.id == 0 {
            let id = self
                .customers
                .create_customer(project.customer.clone())
                .await
                .map_err(|source| ProjectError::Customer {
                    context: "create customer".into(),
                    source,
                })?;
            project.customer.id = id;
            saga.record(Step::Customer(id));
        }

        for manager in project.managers.iter_mut().filter(|m| m.id == 0) {
            match self.managers.create_manager(manager.clone()).await {
                Ok(id) => {
                    manager.id = id;
                    saga.record(Step::Manager(id));
                }
                Err(source) => {
                    let err = ProjectError::Manager {
                        context: format!("create manager \"{}\"", manager.name),
                        source,
                    };
                    return Err(self.abort(&saga, err).await);
                }
            }
        }

        for investor in project.investors.iter_mut().filter(|i| i.id == 0) {
            match self.investors.create_investor(investor.clone()).await {
                Ok(id) => {
                    investor.id = id;
                    saga.record(Step::Investor(id));
                }
                Err(source) => {
                    let err = ProjectError::Investor {
                        context: format!("create investor \"{}\"", investor.name),
                        source,
                    };
                    return Err(self.abort(&saga, err).await);
                }
            }
        }

        for field in project.fields.iter_mut() {
            match self.fields.create_field(field.clone()).await {
                Ok(id) => {
                    field.id = id;
                    saga.record(Step::Field(id));
                }
                Err(source) => {
                    let err = ProjectError::Field {
                        context: format!("create field \"{}\"", field.name),
                        source,
                    };
                    return Err(self.abort(&saga, err).await);
                }
            }
        }

        // The repository transaction rolls back its own row; only children need undoing.
        match self.repository.create(ProjectRecord::from(&project)).await {
            Ok(id) => Ok(id),
            Err(err) => Err(self.abort(&saga, err).await),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> ProjectResult<Vec<Project>> {
        let records = self.repository.list().await?;
        self.resolve_all(records).await
    }

    #[instrument(skip(self))]
    pub async fn list_projects_by_customer(&self, customer_id: i64) -> ProjectResult<Vec<Project>> {
        let records = self.repository.list_by_customer(customer_id).await?;
        self.resolve_all(records).await
    }

    #[instrument(skip(self))]
    pub async fn get_project(&self, id: i64) -> ProjectResult<Project> {
        let record = self.repository.get(id).await?;
        self.resolve(record).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_project(&self, id: i64, input: UpdateProject) -> ProjectResult<()> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let mut record = self.repository.get(id).await?;
        record.apply_update(input);
        self.repository.update(record).await
    }

    /// Remove the project and its associations. Children are kept.
    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: i64) -> ProjectResult<()> {
        self.repository.delete(id).await
    }

    async fn abort(&self, saga: &Saga, err: ProjectError) -> ProjectError {
        if saga.is_empty() {
            return err;
        }

        tracing::info!(error = %err, "Project creation failed, compensating");
        let failures = self.compensate(saga).await;
        if failures.is_empty() {
            err
        } else {
            ProjectError::Compensation {
                source: Box::new(err),
                failures,
            }
        }
    }

    /// Run every compensating delete, continuing past failures.
    async fn compensate(&self, saga: &Saga) -> Vec<CompensationFailure> {
        let mut failures = Vec::new();

        for step in saga.compensation_order() {
            tracing::info!(%step, "Compensating");
            let result = match step {
                Step::Field(id) => self.fields.delete_field(id).await.map_err(|e| e.to_string()),
                Step::Investor(id) => self
                    .investors
                    .delete_investor(id)
                    .await
                    .map_err(|e| e.to_string()),
                Step::Manager(id) => self
                    .managers
                    .delete_manager(id)
                    .await
                    .map_err(|e| e.to_string()),
                Step::Customer(id) => self
                    .customers
                    .delete_customer(id)
                    .await
                    .map_err(|e| e.to_string()),
            };

            if let Err(error) = result {
                tracing::warn!(%step, %error, "Compensation failed");
                failures.push(CompensationFailure { step, error });
            }
        }
        failures
    }

    async fn resolve_all(&self, records: Vec<ProjectRecord>) -> ProjectResult<Vec<Project>> {
        let mut projects = Vec::with_capacity(records.len());
        for record in records {
            projects.push(self.resolve(record).await?);
        }
        Ok(projects)
    }

    /// Replace each child id with the full child. Any failed lookup fails the read.
    async fn resolve(&self, record: ProjectRecord) -> ProjectResult<Project> {
        let customer = self
            .customers
            .get_customer(record.customer_id)
            .await
            .map_err(|source| ProjectError::Customer {
                context: format!("fetch customer {}", record.customer_id),
                source,
            })?;

        let mut managers = Vec::with_capacity(record.manager_ids.len());
        for &id in &record.manager_ids {
            let manager = self.managers.get_manager(id).await.map_err(|source| {
                ProjectError::Manager {
                    context: format!("fetch manager {id}"),
                    source,
                }
            })?;
            managers.push(manager);
        }

        let mut investors = Vec::with_capacity(record.investor_ids.len());
        for &id in &record.investor_ids {
            let investor = self.investors.get_investor(id).await.map_err(|source| {
                ProjectError::Investor {
                    context: format!("fetch investor {id}"),
                    source,
                }
            })?;
            investors.push(investor);
        }

        let mut fields = Vec::with_capacity(record.field_ids.len());
        for &id in &record.field_ids {
            let field = self
                .fields
                .get_field(id)
                .await
                .map_err(|source| ProjectError::Field {
                    context: format!("fetch field {id}"),
                    source,
                })?;
            fields.push(field);
        }

        Ok(Project {
            id: record.id,
            name: record.name,
            customer,
            managers,
            investors,
            fields,
        })
    }
}
