#![allow(dead_code)]

use std::sync::Arc;

use domain_crops::{Crop, CropService, InMemoryCropRepository};
use domain_customers::{Customer, CustomerService, InMemoryCustomerRepository};
use domain_fields::{Field, FieldService, InMemoryFieldRepository};
use domain_investors::{InMemoryInvestorRepository, Investor, InvestorService};
use domain_lots::{InMemoryLotRepository, Lot, LotService};
use domain_managers::{InMemoryManagerRepository, Manager, ManagerService};
use domain_projects::{Project, ProjectRepository, ProjectService};

/// Every child service over in-memory storage, with crops 1 (Wheat) and 2 (Corn).
pub struct Stack {
    pub customers: CustomerService<InMemoryCustomerRepository>,
    pub managers: ManagerService<InMemoryManagerRepository>,
    pub investors: InvestorService<InMemoryInvestorRepository>,
    pub lots: LotService<InMemoryLotRepository>,
    pub fields: FieldService<InMemoryFieldRepository>,
}

impl Stack {
    pub async fn new() -> Self {
        let crops = CropService::new(InMemoryCropRepository::new());
        for name in ["Wheat", "Corn"] {
            crops
                .create_crop(Crop {
                    id: 0,
                    name: name.into(),
                })
                .await
                .unwrap();
        }

        let lots = LotService::new(InMemoryLotRepository::new(), Arc::new(crops));
        let fields = FieldService::new(InMemoryFieldRepository::new(), Arc::new(lots.clone()));

        Self {
            customers: CustomerService::new(InMemoryCustomerRepository::new()),
            managers: ManagerService::new(InMemoryManagerRepository::new()),
            investors: InvestorService::new(InMemoryInvestorRepository::new()),
            lots,
            fields,
        }
    }

    pub fn projects<R: ProjectRepository>(&self, repository: R) -> ProjectService<R> {
        ProjectService::new(
            repository,
            Arc::new(self.customers.clone()),
            Arc::new(self.managers.clone()),
            Arc::new(self.investors.clone()),
            Arc::new(self.fields.clone()),
        )
    }
}

pub fn lot_a() -> Lot {
    Lot {
        name: "Lot A".into(),
        hectares: 10.0,
        previous_crop_id: 1,
        current_crop_id: 2,
        season: "2025".into(),
        ..Default::default()
    }
}

/// A project whose children are all new.
pub fn project_x() -> Project {
    Project {
        id: 0,
        name: "Project X".into(),
        customer: Customer {
            name: "Client A".into(),
            ..Default::default()
        },
        managers: vec![Manager {
            name: "Manager A".into(),
            ..Default::default()
        }],
        investors: vec![Investor {
            name: "Investor A".into(),
            percentage: 25,
            ..Default::default()
        }],
        fields: vec![Field {
            name: "Field A".into(),
            lease_type_id: 1,
            lots: vec![lot_a()],
            ..Default::default()
        }],
    }
}
