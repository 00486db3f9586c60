use domain_customers::Customer;
use domain_fields::Field;
use domain_investors::Investor;
use domain_managers::Manager;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// The aggregate.
///
/// On create, a child with `id == 0` is created and one with an id is linked as is
/// (fields are always created). On reads every child is fully resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Project {
    #[serde(default)]
    #[schema(example = 99)]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Project X")]
    pub name: String,
    pub customer: Customer,
    #[serde(default)]
    #[validate(custom(function = "distinct_managers"))]
    pub managers: Vec<Manager>,
    #[serde(default)]
    #[validate(custom(function = "distinct_investors"))]
    pub investors: Vec<Investor>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A project as stored: the row plus the ids in each association table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub customer_id: i64,
    pub manager_ids: Vec<i64>,
    pub investor_ids: Vec<i64>,
    pub field_ids: Vec<i64>,
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            customer_id: project.customer.id,
            manager_ids: project.managers.iter().map(|m| m.id).collect(),
            investor_ids: project.investors.iter().map(|i| i.id).collect(),
            field_ids: project.fields.iter().map(|f| f.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub customer: Customer,
    #[serde(default)]
    #[validate(custom(function = "distinct_managers"))]
    pub managers: Vec<Manager>,
    #[serde(default)]
    #[validate(custom(function = "distinct_investors"))]
    pub investors: Vec<Investor>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl From<CreateProject> for Project {
    fn from(input: CreateProject) -> Self {
        Self {
            id: 0,
            name: input.name,
            customer: input.customer,
            managers: input.managers,
            investors: input.investors,
            fields: input.fields,
        }
    }
}

/// Scalar changes plus association replacement. A present id list replaces the whole
/// association set; an absent one leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub customer_id: Option<i64>,
    #[validate(custom(function = "distinct_ids"))]
    pub manager_ids: Option<Vec<i64>>,
    #[validate(custom(function = "distinct_ids"))]
    pub investor_ids: Option<Vec<i64>>,
    #[validate(custom(function = "distinct_ids"))]
    pub field_ids: Option<Vec<i64>>,
}

/// Each association row is keyed by (project, child), so a child may appear once.
fn distinct_ids(ids: &[i64]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(ids.len());
    match ids.iter().find(|&&id| !seen.insert(id)) {
        Some(id) => {
            let mut err = ValidationError::new("duplicate_id");
            err.message = Some(format!("id {id} is listed more than once").into());
            Err(err)
        }
        None => Ok(()),
    }
}

/// New children (`id == 0`) are exempt; they get distinct ids when created.
fn distinct_existing(ids: impl Iterator<Item = i64>) -> Result<(), ValidationError> {
    distinct_ids(&ids.filter(|&id| id != 0).collect::<Vec<_>>())
}

fn distinct_managers(managers: &[Manager]) -> Result<(), ValidationError> {
    distinct_existing(managers.iter().map(|m| m.id))
}

fn distinct_investors(investors: &[Investor]) -> Result<(), ValidationError> {
    distinct_existing(investors.iter().map(|i| i.id))
}

impl ProjectRecord {
    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(customer_id) = update.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(ids) = update.manager_ids {
            self.manager_ids = ids;
        }
        if let Some(ids) = update.investor_ids {
            self.investor_ids = ids;
        }
        if let Some(ids) = update.field_ids {
            self.field_ids = ids;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_collects_child_ids_in_order() {
        let project = Project {
            id: 7,
            name: "Project X".into(),
            customer: Customer {
                id: 10,
                ..Default::default()
            },
            managers: vec![
                Manager {
                    id: 21,
                    ..Default::default()
                },
                Manager {
                    id: 20,
                    ..Default::default()
                },
            ],
            investors: Vec::new(),
            fields: vec![Field {
                id: 40,
                ..Default::default()
            }],
        };

        let record = ProjectRecord::from(&project);
        assert_eq!(record.customer_id, 10);
        assert_eq!(record.manager_ids, vec![21, 20]);
        assert!(record.investor_ids.is_empty());
        assert_eq!(record.field_ids, vec![40]);
    }

    #[test]
    fn test_update_replaces_only_given_sets() {
        let mut record = ProjectRecord {
            id: 1,
            name: "Old".into(),
            customer_id: 10,
            manager_ids: vec![20],
            investor_ids: vec![30, 31],
            field_ids: vec![40],
        };

        record.apply_update(UpdateProject {
            manager_ids: Some(Vec::new()),
            investor_ids: Some(vec![32]),
            ..Default::default()
        });

        assert_eq!(record.name, "Old");
        assert!(record.manager_ids.is_empty());
        assert_eq!(record.investor_ids, vec![32]);
        assert_eq!(record.field_ids, vec![40]);
    }

    #[test]
    fn test_repeated_child_ids_are_rejected() {
        let update = UpdateProject {
            manager_ids: Some(vec![20, 21, 20]),
            ..Default::default()
        };
        let err = update.validate().unwrap_err();
        assert!(err.to_string().contains("id 20 is listed more than once"));

        let ok = UpdateProject {
            investor_ids: Some(vec![30, 31]),
            field_ids: Some(Vec::new()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_new_children_may_share_the_zero_id() {
        let manager = |id| Manager {
            id,
            name: "Manager".into(),
            ..Default::default()
        };
        let mut project = Project {
            name: "Project X".into(),
            managers: vec![manager(0), manager(0), manager(20)],
            ..Default::default()
        };
        assert!(project.validate().is_ok());

        project.managers.push(manager(20));
        assert!(project.validate().is_err());
    }
}
