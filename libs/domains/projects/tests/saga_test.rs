//! Project creation and reads over the real child services.

mod common;

use async_trait::async_trait;
use common::{Stack, project_x};
use domain_fields::FieldError;
use domain_projects::*;

/// Accepts nothing: every write fails as if the transaction had aborted.
struct AbortingRepository;

#[async_trait]
impl ProjectRepository for AbortingRepository {
    async fn create(&self, _project: ProjectRecord) -> ProjectResult<i64> {
        Err(ProjectError::Internal(
            "Database error: could not serialize access".into(),
        ))
    }

    async fn list(&self) -> ProjectResult<Vec<ProjectRecord>> {
        Ok(Vec::new())
    }

    async fn list_by_customer(&self, _customer_id: i64) -> ProjectResult<Vec<ProjectRecord>> {
        Ok(Vec::new())
    }

    async fn get(&self, id: i64) -> ProjectResult<ProjectRecord> {
        Err(ProjectError::NotFound(id))
    }

    async fn update(&self, project: ProjectRecord) -> ProjectResult<()> {
        Err(ProjectError::NotFound(project.id))
    }

    async fn delete(&self, id: i64) -> ProjectResult<()> {
        Err(ProjectError::NotFound(id))
    }
}

#[tokio::test]
async fn test_created_project_reads_back_resolved() {
    let stack = Stack::new().await;
    let projects = stack.projects(InMemoryProjectRepository::new());

    let id = projects.create_project(project_x()).await.unwrap();
    let project = projects.get_project(id).await.unwrap();

    assert_eq!(project.name, "Project X");
    assert_eq!(project.customer.name, "Client A");
    assert_eq!(project.managers[0].name, "Manager A");
    assert_eq!(project.investors[0].percentage, 25);

    let lot = &project.fields[0].lots[0];
    assert_eq!(lot.field_id, project.fields[0].id);
    assert_eq!(lot.current_crop.as_ref().unwrap().name, "Corn");
}

#[tokio::test]
async fn test_repeated_reads_are_equal() {
    let stack = Stack::new().await;
    let projects = stack.projects(InMemoryProjectRepository::new());
    let id = projects.create_project(project_x()).await.unwrap();

    let first = projects.get_project(id).await.unwrap();
    let second = projects.get_project(id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failed_persist_removes_every_created_child() {
    let stack = Stack::new().await;
    let projects = stack.projects(AbortingRepository);

    let result = projects.create_project(project_x()).await;
    assert!(matches!(result, Err(ProjectError::Internal(_))));

    assert!(stack.customers.list_customers().await.unwrap().is_empty());
    assert!(stack.managers.list_managers().await.unwrap().is_empty());
    assert!(stack.investors.list_investors().await.unwrap().is_empty());
    assert!(stack.fields.list_fields().await.unwrap().is_empty());
    assert!(stack.lots.list_lots().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_a_field_removes_its_lots() {
    let stack = Stack::new().await;
    let projects = stack.projects(InMemoryProjectRepository::new());

    let first = projects.create_project(project_x()).await.unwrap();
    let second = projects.create_project(project_x()).await.unwrap();
    let field_id = projects.get_project(first).await.unwrap().fields[0].id;

    projects.delete_project(first).await.unwrap();
    stack.fields.delete_field(field_id).await.unwrap();

    let lots = stack.lots.list_lots().await.unwrap();
    let kept = projects.get_project(second).await.unwrap().fields[0].id;
    assert_eq!(lots.len(), 1);
    assert_eq!(lots[0].field_id, kept);
}

#[tokio::test]
async fn test_reused_children_survive_rollback() {
    let stack = Stack::new().await;
    let mut project = project_x();
    project.customer.id = stack
        .customers
        .create_customer(project.customer.clone())
        .await
        .unwrap();
    project.managers[0].id = stack
        .managers
        .create_manager(project.managers[0].clone())
        .await
        .unwrap();

    let projects = stack.projects(AbortingRepository);
    assert!(projects.create_project(project).await.is_err());

    assert_eq!(stack.customers.list_customers().await.unwrap().len(), 1);
    assert_eq!(stack.managers.list_managers().await.unwrap().len(), 1);
    assert!(stack.investors.list_investors().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_lot_unwinds_earlier_steps() {
    let stack = Stack::new().await;
    let projects = stack.projects(InMemoryProjectRepository::new());

    let mut project = project_x();
    project.fields[0].lots[0].hectares = 0.0;

    match projects.create_project(project).await {
        Err(ProjectError::Field { context, source }) => {
            assert_eq!(context, "create field \"Field A\"");
            assert!(matches!(source, FieldError::Validation(_)));
        }
        other => panic!("expected field error, got {other:?}"),
    }

    assert!(stack.customers.list_customers().await.unwrap().is_empty());
    assert!(stack.managers.list_managers().await.unwrap().is_empty());
    assert!(stack.investors.list_investors().await.unwrap().is_empty());
    assert!(projects.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_projects_by_customer_and_delete_keeps_children() {
    let stack = Stack::new().await;
    let projects = stack.projects(InMemoryProjectRepository::new());

    let first = projects.create_project(project_x()).await.unwrap();
    let customer_id = projects.get_project(first).await.unwrap().customer.id;

    let mut second = project_x();
    second.name = "Project Y".into();
    second.customer.id = customer_id;
    projects.create_project(second).await.unwrap();
    projects.create_project(project_x()).await.unwrap();

    let owned = projects.list_projects_by_customer(customer_id).await.unwrap();
    let names: Vec<_> = owned.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Project X", "Project Y"]);

    projects.delete_project(first).await.unwrap();
    assert!(matches!(
        projects.get_project(first).await,
        Err(ProjectError::NotFound(_))
    ));
    assert_eq!(stack.managers.list_managers().await.unwrap().len(), 3);
    assert_eq!(stack.fields.list_fields().await.unwrap().len(), 3);
}
